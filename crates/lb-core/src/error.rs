//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` via `#[from]`
//! where a glyph or coordinate parse can fail underneath them.

use thiserror::Error;

/// Errors raised while decoding core values from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown board glyph {0:?}")]
    UnknownGlyph(char),

    #[error("{0:?} is not a direction glyph")]
    NotADirection(char),

    #[error("invalid coordinate {0:?}: expected \"x,y\"")]
    InvalidCoordinate(String),
}

/// Shorthand result type for `lb-core`.
pub type CoreResult<T> = Result<T, CoreError>;
