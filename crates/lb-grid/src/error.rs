//! Grid-subsystem error type.

use thiserror::Error;

use lb_core::CoreError;

/// Errors produced while building a [`Board`][crate::Board].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("malformed board")]
    MalformedBoard(#[from] BoardDefect),
}

/// What exactly is wrong with a rejected board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardDefect {
    #[error("board data cannot be empty")]
    Empty,

    #[error("row {row} has length {got}, expected {expected}; all board rows must have the same length")]
    RaggedRow {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("bad glyph at row {row}, column {col}")]
    BadGlyph {
        row:    usize,
        col:    usize,
        #[source]
        source: CoreError,
    },
}

pub type GridResult<T> = Result<T, GridError>;
