//! The closed node taxonomy.
//!
//! Every node in a [`BehaviorTree`](crate::BehaviorTree) arena is a [`Node`]:
//! an external string id, the label it was declared with, and a [`NodeKind`].
//! Composites refer to their children by [`NodeIdx`] into the same arena.

use std::fmt;

use lb_core::NodeIdx;

use crate::leaf::{self, ActionCommand, Predicate};
use crate::{LeafError, TreeError, TreeResult};

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Result of evaluating one node during a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
    /// The subtree produced this tick's action but has children left to
    /// visit; the next tick resumes it.
    Running,
}

impl Outcome {
    #[inline]
    pub fn from_bool(ok: bool) -> Outcome {
        if ok { Outcome::Success } else { Outcome::Failure }
    }

    #[inline]
    pub fn is_complete(self) -> bool {
        self != Outcome::Running
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Success => "SUCCESS",
            Outcome::Failure => "FAILURE",
            Outcome::Running => "RUNNING",
        })
    }
}

// ── Composite state ───────────────────────────────────────────────────────────

/// Ordered children plus the resume cursor shared by all composite kinds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composite {
    pub children: Vec<NodeIdx>,
    /// Index into `children` of the next child to visit.  Zero when the
    /// composite is at rest.
    pub cursor:   usize,
}

impl Composite {
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

// ── NodeKind ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Parsed once at construction; a bad label is kept as its error and
    /// evaluates to FAILURE.
    Action(Result<ActionCommand, LeafError>),
    Condition(Result<Predicate, LeafError>),
    Sequence(Composite),
    Fallback(Composite),
    Parallel {
        body:      Composite,
        threshold: usize,
        /// Successes counted so far in the current (possibly multi-tick)
        /// round.
        successes: usize,
    },
}

impl NodeKind {
    /// Classify a declaration label.
    ///
    /// `?` is a fallback, `->` a sequence, `=m>` a parallel with threshold
    /// `m`.  Labels led by an action command are actions; anything else is a
    /// condition.
    pub fn from_label(label: &str) -> TreeResult<NodeKind> {
        let label = label.trim();
        match label {
            "?" => return Ok(NodeKind::Fallback(Composite::default())),
            "->" => return Ok(NodeKind::Sequence(Composite::default())),
            _ => {}
        }
        if let Some(m) = label.strip_prefix('=').and_then(|s| s.strip_suffix('>')) {
            let threshold = m
                .trim()
                .parse::<usize>()
                .map_err(|_| TreeError::InvalidThreshold(label.to_string()))?;
            return Ok(NodeKind::Parallel { body: Composite::default(), threshold, successes: 0 });
        }
        if leaf::is_action_label(label) {
            Ok(NodeKind::Action(label.parse()))
        } else {
            Ok(NodeKind::Condition(label.parse()))
        }
    }

    /// Structural kind name used in trace output.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Action(_)       => "action",
            NodeKind::Condition(_)    => "condition",
            NodeKind::Sequence(_)     => "sequence",
            NodeKind::Fallback(_)     => "fallback",
            NodeKind::Parallel { .. } => "parallel",
        }
    }

    pub fn is_action(&self) -> bool {
        matches!(self, NodeKind::Action(_))
    }

    pub fn composite(&self) -> Option<&Composite> {
        match self {
            NodeKind::Sequence(c) | NodeKind::Fallback(c) => Some(c),
            NodeKind::Parallel { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn composite_mut(&mut self) -> Option<&mut Composite> {
        match self {
            NodeKind::Sequence(c) | NodeKind::Fallback(c) => Some(c),
            NodeKind::Parallel { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Clear this node's own progress (cursor and parallel success count).
    /// Children are untouched; see [`BehaviorTree::reset_subtree`](crate::BehaviorTree::reset_subtree).
    pub fn reset(&mut self) {
        match self {
            NodeKind::Sequence(c) | NodeKind::Fallback(c) => c.reset(),
            NodeKind::Parallel { body, successes, .. } => {
                body.reset();
                *successes = 0;
            }
            NodeKind::Action(_) | NodeKind::Condition(_) => {}
        }
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub id:    String,
    pub label: String,
    pub kind:  NodeKind,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> TreeResult<Node> {
        let label = label.into();
        let kind = NodeKind::from_label(&label)?;
        Ok(Node { id: id.into(), label, kind })
    }

    /// Name used in trace lines: the kind for composites, the label for
    /// leaves.
    pub fn trace_name(&self) -> &str {
        match self.kind {
            NodeKind::Action(_) | NodeKind::Condition(_) => &self.label,
            _ => self.kind.type_name(),
        }
    }
}
