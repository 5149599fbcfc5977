//! Arena-backed behavior tree, its builder, and the sibling-splice mutation.
//!
//! # Data layout
//!
//! All nodes live in one `Vec<Node>` indexed by [`NodeIdx`].  Composites
//! store child indices; a parallel `parents` vector maps every slot back to
//! its parent (`None` only for the root).  External string ids resolve
//! through a separate `id -> NodeIdx` map.  The three structures are only
//! mutated together, inside [`BehaviorTree::add_sibling`] and
//! [`TreeBuilder::build`].
//!
//! The builder lays nodes out in preorder, so the root is always slot 0.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use lb_core::NodeIdx;

use crate::{Node, NodeKind, TreeError, TreeResult};

const ROOT: NodeIdx = NodeIdx(0);

// ── BehaviorTree ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct BehaviorTree {
    nodes:   Vec<Node>,
    parents: Vec<Option<NodeIdx>>,
    index:   FxHashMap<String, NodeIdx>,
    /// Inspection cursor moved by `jump_to` and `reset`.  The tick engine
    /// neither reads nor moves it.
    head:    NodeIdx,
}

impl BehaviorTree {
    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn root(&self) -> NodeIdx {
        ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut Node {
        &mut self.nodes[idx.index()]
    }

    /// Resolve an external id.
    pub fn find(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    pub fn parent(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.parents[idx.index()]
    }

    /// Children of `idx` in visiting order; empty for leaves.
    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.node(idx).kind.composite().map_or(&[], |c| c.children.as_slice())
    }

    /// Ids of every node, in arena order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    // ── Inspection cursor ─────────────────────────────────────────────────

    pub fn head(&self) -> &Node {
        self.node(self.head)
    }

    /// Move the inspection cursor to `id`.  Returns `false` (cursor
    /// unchanged) if no such node exists.
    pub fn jump_to(&mut self, id: &str) -> bool {
        match self.find(id) {
            Some(idx) => {
                self.head = idx;
                true
            }
            None => false,
        }
    }

    // ── Progress state ────────────────────────────────────────────────────

    /// Clear every composite's progress and move the head back to the root.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.kind.reset();
        }
        self.head = ROOT;
    }

    /// Clear progress of `idx` and everything below it.
    pub fn reset_subtree(&mut self, idx: NodeIdx) {
        let mut stack = vec![idx];
        while let Some(n) = stack.pop() {
            let node = self.node_mut(n);
            node.kind.reset();
            if let Some(c) = node.kind.composite() {
                stack.extend_from_slice(&c.children);
            }
        }
    }

    /// `true` when no composite holds a resume cursor or a partial count.
    pub fn is_at_rest(&self) -> bool {
        self.nodes.iter().all(|n| match &n.kind {
            NodeKind::Sequence(c) | NodeKind::Fallback(c) => c.cursor == 0,
            NodeKind::Parallel { body, successes, .. } => body.cursor == 0 && *successes == 0,
            NodeKind::Action(_) | NodeKind::Condition(_) => true,
        })
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append `node` as the last child of `target`'s parent.
    ///
    /// The new node becomes the youngest sibling of `target`, not its
    /// immediate neighbour.  Existing indices stay valid: the node is pushed
    /// onto the end of the arena.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NodeNotFound`] if `target` is unknown.
    /// - [`TreeError::DuplicateId`] if `node.id` is already taken.
    /// - [`TreeError::NoParent`] if `target` is the root.
    pub fn add_sibling(&mut self, target: &str, node: Node) -> TreeResult<NodeIdx> {
        let target_idx = self
            .find(target)
            .ok_or_else(|| TreeError::NodeNotFound(target.to_string()))?;
        if self.index.contains_key(&node.id) {
            return Err(TreeError::DuplicateId(node.id));
        }
        let parent = self
            .parent(target_idx)
            .ok_or_else(|| TreeError::NoParent(target.to_string()))?;

        let idx = NodeIdx::try_from(self.nodes.len())
            .map_err(|_| TreeError::InvalidDefinition(node.id.clone()))?;
        let body = self
            .node_mut(parent)
            .kind
            .composite_mut()
            .ok_or_else(|| TreeError::NoParent(target.to_string()))?;
        body.children.push(idx);

        debug!(target = %target, sibling = %node.id, parent = %idx, "spliced sibling");
        self.index.insert(node.id.clone(), idx);
        self.parents.push(Some(parent));
        self.nodes.push(node);
        Ok(idx)
    }
}

// ── TreeBuilder ───────────────────────────────────────────────────────────────

/// Collects declarations and edges, then assembles a validated
/// [`BehaviorTree`].
///
/// ```
/// use lb_behavior::TreeBuilder;
///
/// let mut b = TreeBuilder::new();
/// b.declare("A", "->").unwrap();
/// b.declare("B", "move").unwrap();
/// b.edge("A", "B").unwrap();
/// let tree = b.build().unwrap();
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Default)]
pub struct TreeBuilder {
    /// Declaration order; the root is chosen from it.
    nodes:    Vec<Node>,
    lookup:   FxHashMap<String, usize>,
    children: Vec<Vec<usize>>,
    parent:   Vec<Option<usize>>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node.  Re-declaring an id with the identical label is a
    /// no-op, so inline declarations may repeat on edge lines.
    pub fn declare(&mut self, id: &str, label: &str) -> TreeResult<()> {
        if let Some(&slot) = self.lookup.get(id) {
            let first = &self.nodes[slot].label;
            if first.trim() == label.trim() {
                return Ok(());
            }
            return Err(TreeError::ConflictingDeclaration {
                id:     id.to_string(),
                first:  first.clone(),
                second: label.to_string(),
            });
        }
        self.push(Node::new(id, label)?);
        Ok(())
    }

    fn push(&mut self, node: Node) {
        self.lookup.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        self.children.push(Vec::new());
        self.parent.push(None);
    }

    /// Attach `child` to `parent`.
    ///
    /// Edges that name an undeclared node, or whose parent is a leaf, are
    /// ignored with a warning.  A second distinct parent for the same child
    /// is an error.
    pub fn edge(&mut self, parent: &str, child: &str) -> TreeResult<()> {
        let (Some(&p), Some(&c)) = (self.lookup.get(parent), self.lookup.get(child)) else {
            warn!(parent, child, "edge names an undeclared node; ignored");
            return Ok(());
        };
        if self.nodes[p].kind.composite().is_none() {
            warn!(parent, child, "edge from a leaf node; ignored");
            return Ok(());
        }
        match self.parent[c] {
            Some(existing) if existing == p => {
                warn!(parent, child, "duplicate edge; ignored");
                Ok(())
            }
            Some(_) => Err(TreeError::MultipleParents(child.to_string())),
            None => {
                self.parent[c] = Some(p);
                self.children[p].push(c);
                Ok(())
            }
        }
    }

    /// Assemble the tree.
    ///
    /// The root is the first declared node that is not the target of any
    /// accepted edge.  Nodes not reachable from it are dropped.
    ///
    /// # Errors
    ///
    /// [`TreeError::RootMissing`] if every node has a parent;
    /// [`TreeError::NoActionNodes`] if no action leaf is reachable.
    pub fn build(self) -> TreeResult<BehaviorTree> {
        let root = self
            .parent
            .iter()
            .position(Option::is_none)
            .ok_or(TreeError::RootMissing)?;

        // Preorder walk assigns arena slots.
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut slot_of = vec![None::<u32>; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(n) = stack.pop() {
            if slot_of[n].is_some() {
                continue;
            }
            slot_of[n] = Some(order.len() as u32);
            order.push(n);
            stack.extend(self.children[n].iter().rev().copied());
        }

        let dropped = self.nodes.len() - order.len();
        if dropped > 0 {
            let names: Vec<&str> = (0..self.nodes.len())
                .filter(|&n| slot_of[n].is_none())
                .map(|n| self.nodes[n].id.as_str())
                .collect();
            warn!(count = dropped, nodes = ?names, "nodes unreachable from the root; dropped");
        }

        if !order.iter().any(|&n| self.nodes[n].kind.is_action()) {
            return Err(TreeError::NoActionNodes);
        }

        let mut nodes: Vec<Option<Node>> = self.nodes.into_iter().map(Some).collect();
        let mut arena   = Vec::with_capacity(order.len());
        let mut parents = Vec::with_capacity(order.len());
        let mut index   = FxHashMap::default();

        for &n in &order {
            let Some(mut node) = nodes[n].take() else { continue };
            if let Some(body) = node.kind.composite_mut() {
                body.children = self.children[n]
                    .iter()
                    .filter_map(|&c| slot_of[c].map(NodeIdx))
                    .collect();
            }
            let parent = self.parent[n].and_then(|p| slot_of[p]).map(NodeIdx);
            index.insert(node.id.clone(), NodeIdx(arena.len() as u32));
            parents.push(if n == root { None } else { parent });
            arena.push(node);
        }

        debug!(nodes = arena.len(), root = %arena[0].id, "behavior tree built");
        Ok(BehaviorTree { nodes: arena, parents, index, head: ROOT })
    }
}
