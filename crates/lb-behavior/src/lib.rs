//! `lb-behavior` — behavior trees: node taxonomy, arena storage, tick
//! engine, tree-source parser, and live mutation.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                          |
//! |------------|-------------------------------------------------------------------|
//! | [`leaf`]   | `ActionCommand`, `Predicate` — parsed leaf labels                 |
//! | [`node`]   | `Outcome`, `NodeKind`, `Node`, `Composite`                        |
//! | [`tree`]   | `BehaviorTree` arena (+ `add_sibling`), `TreeBuilder`             |
//! | [`world`]  | `World` trait — what leaves act on                                |
//! | [`trace`]  | `TraceEvent`, `TraceSink`, `NoopSink`                             |
//! | [`engine`] | `TickEngine`, `TickReport`, `ActionRecord`                        |
//! | [`parser`] | `parse_tree`, `parse_node_definition`                             |
//! | [`error`]  | `TreeError`, `TreeResult<T>`, `LeafError`                         |
//!
//! # Design notes
//!
//! A tree is owned by exactly one agent, but is stored apart from the
//! agent's position data (see `lb-agent`), so the engine can hold
//! `&mut BehaviorTree` while the [`World`] implementation holds the board
//! and the agent roster mutably.
//!
//! Structural problems (bad tree source, bad mutation) are errors.  A leaf
//! whose label cannot be understood is not: it is stored as a
//! [`LeafError`] and evaluates to FAILURE.

pub mod engine;
pub mod error;
pub mod leaf;
pub mod node;
pub mod parser;
pub mod trace;
pub mod tree;
pub mod world;


pub use engine::{ActionRecord, TickEngine, TickReport};
pub use error::{LeafError, TreeError, TreeResult};
pub use leaf::{ActionCommand, Predicate};
pub use node::{Composite, Node, NodeKind, Outcome};
pub use parser::{parse_node_definition, parse_tree};
pub use trace::{NoopSink, TraceEvent, TraceSink};
pub use tree::{BehaviorTree, TreeBuilder};
pub use world::World;
