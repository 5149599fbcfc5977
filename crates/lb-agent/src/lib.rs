//! `lb-agent` — ladybug storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA id/position/direction), `AgentTrees`         |
//! | [`builder`] | `AgentStoreBuilder` — scans a board for direction glyphs       |

pub mod builder;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use store::{AgentStore, AgentTrees};
