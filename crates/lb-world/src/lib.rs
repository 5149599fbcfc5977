//! `lb-world` — what action and condition leaves do to the grid.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`world`]  | `GridWorld<R>` — implements `lb_behavior::World`               |
//!
//! # Movement model
//!
//! Every effect happens immediately on the shared [`Board`][lb_grid::Board]
//! and [`AgentStore`][lb_agent::AgentStore]:
//!
//! - `turnLeft` / `turnRight` redraw the ladybug's glyph and always succeed.
//! - `move` steps one cell forward.  Walls and other ladybugs block it; a
//!   mushroom is pushed one further cell, but only onto an empty cell.
//! - `fly x y` teleports onto an empty cell and faces along the dominant
//!   axis of the jump.
//! - `placeLeaf` / `takeLeaf` edit the cell in front.
//!
//! Conditions read the board through the same front-cell probe, plus a
//! pluggable [`Reachability`][lb_grid::Reachability] for `existsPath`.

pub mod world;

#[cfg(test)]
mod tests;

pub use world::GridWorld;
