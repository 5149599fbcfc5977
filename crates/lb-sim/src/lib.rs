//! `lb-sim` — the ladybug simulation orchestrator.
//!
//! # Operations
//!
//! ```text
//! load_board(lines)        → board + ladybugs 1..N (row-major scan)
//! load_trees(trees)        → trees for ladybugs 1..k, the rest removed
//! advance_agent(id, sink)  → one tick of one tree (at most one action)
//! advance_all(sink)        → one tick per ladybug, in id order
//! reset_tree / jump_to_node / head / add_sibling
//! ```
//!
//! Trace events from every tick go to the caller-supplied
//! [`TraceSink`][lb_behavior::TraceSink].
//!
//! # Quick-start
//!
//! ```rust
//! use lb_behavior::TraceEvent;
//! use lb_core::{AgentId, Position};
//! use lb_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new().build();
//! sim.load_board(&["...", ".>.", "..."]).unwrap();
//! sim.load_tree_sources(&["A[->] --> B[move]"]).unwrap();
//!
//! let mut trace: Vec<TraceEvent> = Vec::new();
//! sim.advance_all(&mut trace).unwrap();
//! assert_eq!(sim.position(AgentId(1)).unwrap(), Position::new(3, 2));
//! ```

pub mod builder;
pub mod error;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use sim::Sim;
