//! Reachability trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! The `existsPath` condition calls the oracle through the [`Reachability`]
//! trait, so a world can swap in a different search (A*, a cached
//! connectivity map) without touching the behavior engine.
//!
//! # Walkability
//!
//! Only empty (`.`) and mushroom (`o`) cells are walkable.  Walls,
//! leaves, and ladybugs block the search; so does everything out of bounds.

use std::collections::VecDeque;

use lb_core::Position;

use crate::Board;

/// Pluggable four-connected path query over a [`Board`].
pub trait Reachability {
    /// `true` if a four-connected walk over walkable cells joins `from` and
    /// `to`.  Fails closed: either endpoint being unwalkable or out of
    /// bounds yields `false`.
    fn exists_path(&self, board: &Board, from: Position, to: Position) -> bool;
}

/// Standard BFS with a dense visited set.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsReachability;

impl Reachability for BfsReachability {
    fn exists_path(&self, board: &Board, from: Position, to: Position) -> bool {
        if !walkable(board, from) || !walkable(board, to) {
            return false;
        }
        bfs(board, from, to)
    }
}

#[inline]
fn walkable(board: &Board, pos: Position) -> bool {
    board.contains(pos) && board.get(pos).is_walkable()
}

/// BFS between two walkable cells.
fn bfs(board: &Board, from: Position, to: Position) -> bool {
    if from == to {
        return true;
    }

    let width = board.width();
    let slot = |p: Position| (p.y as usize - 1) * width + (p.x as usize - 1);

    let mut visited = vec![false; width * board.height()];
    let mut queue = VecDeque::new();
    visited[slot(from)] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return true;
        }
        for next in current.neighbours() {
            if walkable(board, next) && !visited[slot(next)] {
                visited[slot(next)] = true;
                queue.push_back(next);
            }
        }
    }
    false
}
