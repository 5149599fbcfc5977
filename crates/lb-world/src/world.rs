//! `GridWorld`: the board-backed implementation of [`World`].

use tracing::trace;

use lb_agent::AgentStore;
use lb_behavior::{ActionCommand, Predicate, World};
use lb_core::{AgentId, Cell, Direction, Position};
use lb_grid::{Board, Reachability};

/// Mutable view of the board and roster for the duration of one tick.
///
/// # Type parameter
///
/// `R` answers `existsPath`; [`lb_grid::BfsReachability`] in practice.
pub struct GridWorld<'a, R: Reachability> {
    board:  &'a mut Board,
    agents: &'a mut AgentStore,
    reach:  &'a R,
}

impl<'a, R: Reachability> GridWorld<'a, R> {
    pub fn new(board: &'a mut Board, agents: &'a mut AgentStore, reach: &'a R) -> Self {
        Self { board, agents, reach }
    }

    /// Slot, position and heading of `agent`.
    fn locate(&self, agent: AgentId) -> Option<(usize, Position, Direction)> {
        let slot = self.agents.slot(agent)?;
        Some((slot, self.agents.pos[slot], self.agents.direction[slot]))
    }

    fn front(&self, agent: AgentId) -> Option<Cell> {
        let (_, pos, dir) = self.locate(agent)?;
        Some(self.board.get(pos.step(dir)))
    }

    // ── Actions ───────────────────────────────────────────────────────────

    fn turn(&mut self, agent: AgentId, right: bool) -> bool {
        let Some((slot, pos, dir)) = self.locate(agent) else { return false };
        let dir = if right { dir.turn_right() } else { dir.turn_left() };
        self.agents.direction[slot] = dir;
        self.board.set(pos, Cell::Ladybug(dir));
        true
    }

    fn step_forward(&mut self, agent: AgentId) -> bool {
        let Some((slot, pos, dir)) = self.locate(agent) else { return false };
        let next = pos.step(dir);
        let dest = self.board.get(next);

        if matches!(dest, Cell::Wall | Cell::Ladybug(_)) || self.agents.occupied_by_other(next, agent) {
            return false;
        }
        if dest == Cell::Mushroom {
            let beyond = next.step(dir);
            if self.board.get(beyond) != Cell::Empty {
                return false;
            }
            self.board.set(beyond, Cell::Mushroom);
            trace!(agent = %agent, to = %beyond, "pushed mushroom");
        }

        self.relocate(slot, pos, next, dir);
        true
    }

    fn fly(&mut self, agent: AgentId, to: Position) -> bool {
        let Some((slot, pos, _)) = self.locate(agent) else { return false };
        if self.board.get(to) != Cell::Empty {
            return false;
        }
        let dir = Direction::dominant(to.x - pos.x, to.y - pos.y);
        self.relocate(slot, pos, to, dir);
        true
    }

    fn relocate(&mut self, slot: usize, from: Position, to: Position, dir: Direction) {
        self.board.set(from, Cell::Empty);
        self.agents.pos[slot] = to;
        self.agents.direction[slot] = dir;
        self.board.set(to, Cell::Ladybug(dir));
        trace!(agent = %self.agents.id[slot], %from, %to, "ladybug moved");
    }

    /// Replace the cell in front of `agent` with `put`, if it currently
    /// holds `expect`.
    fn swap_front(&mut self, agent: AgentId, expect: Cell, put: Cell) -> bool {
        let Some((_, pos, dir)) = self.locate(agent) else { return false };
        let target = pos.step(dir);
        if self.board.get(target) != expect {
            return false;
        }
        self.board.set(target, put)
    }
}

impl<R: Reachability> World for GridWorld<'_, R> {
    fn perform(&mut self, agent: AgentId, action: &ActionCommand) -> bool {
        match *action {
            ActionCommand::TurnLeft  => self.turn(agent, false),
            ActionCommand::TurnRight => self.turn(agent, true),
            ActionCommand::Move      => self.step_forward(agent),
            ActionCommand::PlaceLeaf => self.swap_front(agent, Cell::Empty, Cell::Leaf),
            ActionCommand::TakeLeaf  => self.swap_front(agent, Cell::Leaf, Cell::Empty),
            ActionCommand::Fly(to)   => self.fly(agent, to),
        }
    }

    fn holds(&self, agent: AgentId, predicate: &Predicate) -> bool {
        match *predicate {
            Predicate::LeafFront     => self.front(agent) == Some(Cell::Leaf),
            Predicate::TreeFront     => self.front(agent) == Some(Cell::Wall),
            Predicate::MushroomFront => self.front(agent) == Some(Cell::Mushroom),
            Predicate::AtEdge => self
                .agents
                .position(agent)
                .is_some_and(|pos| self.board.is_edge(pos)),
            // The origin is the ladybug's own cell, which is never walkable,
            // so this form fails closed like any blocked endpoint.
            Predicate::ExistsPath { from: None, to } => self
                .agents
                .position(agent)
                .is_some_and(|origin| self.reach.exists_path(self.board, origin, to)),
            Predicate::ExistsPath { from: Some(from), to } => {
                self.reach.exists_path(self.board, from, to)
            }
        }
    }
}
