//! `lb-grid` — the grid world and its reachability oracle.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`board`] | `Board` — fixed-size 1-based cell grid, out-of-bounds = wall |
//! | [`reach`] | `Reachability` trait, `BfsReachability`                      |
//! | [`error`] | `GridError`, `BoardDefect`, `GridResult<T>`                  |

pub mod board;
pub mod error;
pub mod reach;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use error::{BoardDefect, GridError, GridResult};
pub use reach::{BfsReachability, Reachability};
