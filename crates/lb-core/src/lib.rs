//! `lb-core` — foundational types for the ladybug behavior-tree simulator.
//!
//! This crate is a dependency of every other `lb-*` crate.  It has no `lb-*`
//! dependencies and only two external ones (`thiserror`, `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `NodeIdx`                                       |
//! | [`geo`]    | `Position` (1-based grid coordinate), `Direction`          |
//! | [`cell`]   | `Cell` — the board glyph set                               |
//! | [`config`] | `SimConfig`                                                |
//! | [`error`]  | `CoreError`, `CoreResult`                                  |

pub mod cell;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Direction, Position};
pub use ids::{AgentId, NodeIdx};
