//! Ladybug storage: `AgentStore` (SoA data) and `AgentTrees` (behavior trees).
//!
//! # Why two structs?
//!
//! A tick needs `&mut BehaviorTree` for the ticking agent and, at the same
//! time, `&mut AgentStore` inside the world so actions can move ladybugs.
//! Keeping the trees in a separate `AgentTrees` struct lets both borrows
//! coexist:
//!
//! ```ignore
//! // lb-sim (simplified):
//! let tree = sim.trees.get_mut(slot)?;
//! let mut world = GridWorld::new(&mut board, &mut sim.agents, &reach);
//! engine.run(tree, id, &mut world, sink);
//! ```
//!
//! Both structs are indexed by *slot* (`0..count`).  Slots follow ascending
//! [`AgentId`] order; use [`AgentStore::slot`] to translate.

use lb_behavior::BehaviorTree;
use lb_core::{AgentId, Direction, Position};

// ── AgentTrees ────────────────────────────────────────────────────────────────

/// One optional behavior tree per agent slot.
#[derive(Default)]
pub struct AgentTrees {
    pub inner: Vec<Option<BehaviorTree>>,
}

impl AgentTrees {
    pub(crate) fn new(count: usize) -> Self {
        Self { inner: (0..count).map(|_| None).collect() }
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<&BehaviorTree> {
        self.inner.get(slot).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut BehaviorTree> {
        self.inner.get_mut(slot).and_then(Option::as_mut)
    }

    /// Attach (or replace) the tree of `slot`.  Out-of-range slots are
    /// ignored.
    pub fn assign(&mut self, slot: usize, tree: BehaviorTree) {
        if let Some(entry) = self.inner.get_mut(slot) {
            *entry = Some(tree);
        }
    }

    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all ladybugs.
///
/// Every `Vec` field has exactly `count` elements, sorted by `id`.
pub struct AgentStore {
    /// Number of ladybugs.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Public number, strictly ascending.
    pub id: Vec<AgentId>,

    /// Current cell.  Always holds the direction glyph of `direction` on the
    /// board, except transiently inside a move.
    pub pos: Vec<Position>,

    pub direction: Vec<Direction>,
}

impl AgentStore {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            count:     0,
            id:        Vec::with_capacity(n),
            pos:       Vec::with_capacity(n),
            direction: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, id: AgentId, pos: Position, direction: Direction) {
        self.id.push(id);
        self.pos.push(pos);
        self.direction.push(direction);
        self.count += 1;
    }

    /// An empty roster.
    pub fn empty() -> Self {
        Self::with_capacity(0)
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.id.iter().copied()
    }

    /// Slot of `agent`, or `None` if no such ladybug exists.
    #[inline]
    pub fn slot(&self, agent: AgentId) -> Option<usize> {
        self.id.binary_search(&agent).ok()
    }

    pub fn position(&self, agent: AgentId) -> Option<Position> {
        self.slot(agent).map(|s| self.pos[s])
    }

    pub fn direction(&self, agent: AgentId) -> Option<Direction> {
        self.slot(agent).map(|s| self.direction[s])
    }

    /// The ladybug standing on `pos`, if any.
    pub fn agent_at(&self, pos: Position) -> Option<AgentId> {
        self.pos.iter().position(|&p| p == pos).map(|s| self.id[s])
    }

    /// `true` if some ladybug other than `exclude` stands on `pos`.
    pub fn occupied_by_other(&self, pos: Position, exclude: AgentId) -> bool {
        self.agent_at(pos).is_some_and(|a| a != exclude)
    }

    /// Keep the first `len` ladybugs; return the id and cell of each removed
    /// one so the caller can clear the board.
    pub fn truncate(&mut self, len: usize) -> Vec<(AgentId, Position)> {
        if len >= self.count {
            return Vec::new();
        }
        let removed = self.id[len..]
            .iter()
            .copied()
            .zip(self.pos[len..].iter().copied())
            .collect();
        self.id.truncate(len);
        self.pos.truncate(len);
        self.direction.truncate(len);
        self.count = len;
        removed
    }
}
