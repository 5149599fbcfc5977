//! Builds `AgentStore` + `AgentTrees` from a freshly loaded board.
//!
//! # Usage
//!
//! ```rust
//! use lb_agent::AgentStoreBuilder;
//! use lb_core::{AgentId, Position};
//! use lb_grid::Board;
//!
//! let board = Board::from_lines(&["..>", "^.."]).unwrap();
//! let (store, trees) = AgentStoreBuilder::new(&board).build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(store.position(AgentId(1)), Some(Position::new(3, 1)));
//! assert_eq!(trees.len(), 2);
//! ```

use lb_core::{AgentId, Cell};
use lb_grid::Board;

use crate::{AgentStore, AgentTrees};

/// Scans a board for direction glyphs.
///
/// Ladybugs are numbered 1, 2, 3, … in row-major order (left to right, then
/// top to bottom).  Every slot starts without a tree.
pub struct AgentStoreBuilder<'a> {
    board: &'a Board,
}

impl<'a> AgentStoreBuilder<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn build(self) -> (AgentStore, AgentTrees) {
        let ladybugs: Vec<_> = self
            .board
            .iter()
            .filter_map(|(pos, cell)| match cell {
                Cell::Ladybug(dir) => Some((pos, dir)),
                _ => None,
            })
            .collect();

        let mut store = AgentStore::with_capacity(ladybugs.len());
        for (n, (pos, dir)) in (1u32..).zip(ladybugs) {
            store.push(AgentId(n), pos, dir);
        }
        let trees = AgentTrees::new(store.count);

        (store, trees)
    }
}
