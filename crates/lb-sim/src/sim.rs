//! The `Sim` struct: every operation the command layer drives.

use tracing::{debug, warn};

use lb_agent::{AgentStore, AgentStoreBuilder, AgentTrees};
use lb_behavior::{
    parse_node_definition, parse_tree, BehaviorTree, TickEngine, TickReport, TraceSink,
};
use lb_core::{AgentId, Cell, NodeIdx, Position, SimConfig};
use lb_grid::{BfsReachability, Board, Reachability};
use lb_world::GridWorld;

use crate::{SimError, SimResult};

/// The simulation: one board, its ladybugs, and their behavior trees.
///
/// Agents are always processed in ascending [`AgentId`] order; pushes and
/// occupancy checks depend on it.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Reachability = BfsReachability> {
    pub config: SimConfig,

    /// `None` until the first successful [`load_board`](Self::load_board).
    pub(crate) board: Option<Board>,

    /// Position and heading of every ladybug (SoA arrays).
    pub agents: AgentStore,

    /// One tree slot per ladybug, separated for the split-borrow pattern.
    pub trees: AgentTrees,

    pub(crate) engine: TickEngine,

    /// Oracle behind `existsPath`.
    pub(crate) reach: R,
}

impl<R: Reachability> Sim<R> {
    // ── Loading ───────────────────────────────────────────────────────────

    /// Replace the board and rescan it for ladybugs.
    ///
    /// Previously loaded trees are discarded with the old roster.
    pub fn load_board<S: AsRef<str>>(&mut self, lines: &[S]) -> SimResult<&Board> {
        let board = Board::from_lines(lines)?;
        let (agents, trees) = AgentStoreBuilder::new(&board).build();
        debug!(
            width = board.width(),
            height = board.height(),
            ladybugs = agents.count,
            "board loaded"
        );
        self.agents = agents;
        self.trees = trees;
        Ok(self.board.insert(board))
    }

    /// Parse `sources` and hand them to [`load_trees`](Self::load_trees).
    ///
    /// Every source is parsed before anything changes, so a bad source
    /// leaves the simulation untouched.
    pub fn load_tree_sources<S: AsRef<str>>(&mut self, sources: &[S]) -> SimResult<()> {
        let trees = sources
            .iter()
            .enumerate()
            .map(|(index, src)| {
                parse_tree(src.as_ref()).map_err(|source| SimError::TreeSource { index, source })
            })
            .collect::<SimResult<Vec<_>>>()?;
        self.load_trees(trees)
    }

    /// Attach `trees` to the first `trees.len()` ladybugs in id order.
    ///
    /// Every ladybug beyond that is removed and its cell cleared.
    ///
    /// # Errors
    ///
    /// [`SimError::NoBoard`] before any board is loaded;
    /// [`SimError::TooManyTrees`] if there are more trees than ladybugs.
    pub fn load_trees(&mut self, trees: Vec<BehaviorTree>) -> SimResult<()> {
        let board = self.board.as_mut().ok_or(SimError::NoBoard)?;
        let n = trees.len();
        if n > self.agents.count {
            return Err(SimError::TooManyTrees { trees: n, agents: self.agents.count });
        }

        for (slot, tree) in trees.into_iter().enumerate() {
            self.trees.assign(slot, tree);
        }
        for (id, pos) in self.agents.truncate(n) {
            debug!(ladybug = %id, at = %pos, "ladybug has no tree; removed");
            board.set(pos, Cell::Empty);
        }
        self.trees.truncate(n);
        Ok(())
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// Tick one ladybug's tree.  Returns `None` if it has no tree, or if
    /// the board has no ladybugs at all.
    pub fn advance_agent<S>(&mut self, agent: AgentId, sink: &mut S) -> SimResult<Option<TickReport>>
    where
        S: TraceSink + ?Sized,
    {
        let board = self.board.as_mut().ok_or(SimError::NoBoard)?;
        if self.agents.is_empty() {
            warn!("no ladybugs on the board");
            return Ok(None);
        }
        let slot = self.agents.slot(agent).ok_or(SimError::AgentNotFound(agent))?;
        let Some(tree) = self.trees.get_mut(slot) else {
            return Ok(None);
        };

        let mut world = GridWorld::new(board, &mut self.agents, &self.reach);
        Ok(Some(self.engine.run(tree, agent, &mut world, sink)))
    }

    /// Tick every ladybug once, in id order.
    ///
    /// A failure for one ladybug is logged and does not stop the others.
    /// Ladybugs without a tree are skipped.
    pub fn advance_all<S>(&mut self, sink: &mut S) -> SimResult<Vec<(AgentId, TickReport)>>
    where
        S: TraceSink + ?Sized,
    {
        if self.board.is_none() {
            return Err(SimError::NoBoard);
        }
        if self.agents.is_empty() {
            warn!("no ladybugs on the board");
            return Ok(Vec::new());
        }

        let ids: Vec<AgentId> = self.agents.agent_ids().collect();
        let mut reports = Vec::with_capacity(ids.len());
        for id in ids {
            match self.advance_agent(id, sink) {
                Ok(Some(report)) => reports.push((id, report)),
                Ok(None) => {}
                Err(e) => warn!(ladybug = %id, error = %e, "tick failed"),
            }
        }
        Ok(reports)
    }

    // ── Tree inspection and mutation ──────────────────────────────────────

    fn tree_mut(&mut self, agent: AgentId) -> SimResult<&mut BehaviorTree> {
        let slot = self.agents.slot(agent).ok_or(SimError::AgentNotFound(agent))?;
        self.trees.get_mut(slot).ok_or(SimError::Uninitialized(agent))
    }

    fn tree(&self, agent: AgentId) -> SimResult<&BehaviorTree> {
        let slot = self.agents.slot(agent).ok_or(SimError::AgentNotFound(agent))?;
        self.trees.get(slot).ok_or(SimError::Uninitialized(agent))
    }

    /// Clear all progress in the ladybug's tree and move its head to the
    /// root.
    pub fn reset_tree(&mut self, agent: AgentId) -> SimResult<()> {
        self.tree_mut(agent)?.reset();
        Ok(())
    }

    /// Move the ladybug's inspection head.  `Ok(false)` if the node does not
    /// exist.
    pub fn jump_to_node(&mut self, agent: AgentId, node: &str) -> SimResult<bool> {
        Ok(self.tree_mut(agent)?.jump_to(node))
    }

    /// Id of the node under the ladybug's inspection head.
    pub fn head(&self, agent: AgentId) -> SimResult<&str> {
        Ok(&self.tree(agent)?.head().id)
    }

    /// Parse `definition` and splice it in as the youngest sibling of
    /// `target` (the ladybug's head when `None`).
    pub fn add_sibling(
        &mut self,
        agent:      AgentId,
        target:     Option<&str>,
        definition: &str,
    ) -> SimResult<NodeIdx> {
        let tree = self.tree_mut(agent)?;
        let node = parse_node_definition(definition)?;
        let target = match target {
            Some(t) => t.to_string(),
            None => tree.head().id.clone(),
        };
        Ok(tree.add_sibling(&target, node)?)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn position(&self, agent: AgentId) -> SimResult<Position> {
        self.agents.position(agent).ok_or(SimError::AgentNotFound(agent))
    }

    /// Ladybugs that carry a tree, in id order.
    pub fn active_agents(&self) -> Vec<AgentId> {
        self.agents
            .agent_ids()
            .enumerate()
            .filter(|&(slot, _)| self.trees.get(slot).is_some())
            .map(|(_, id)| id)
            .collect()
    }
}
