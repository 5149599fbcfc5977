//! The tick engine: one walk of one agent's tree, at most one action.
//!
//! # Tick protocol
//!
//! Every tick enters at the root.  Composites resume at their stored cursor,
//! so children that already completed in an earlier tick are not visited
//! again.  The walk is depth-first in declaration order; the first action
//! leaf reached is executed and marks the tick as consumed.  From then on:
//!
//! - a composite that still has children to visit stores its cursor and
//!   returns [`Outcome::Running`] without an exit event;
//! - a composite whose child returned `Running` keeps its cursor on that
//!   child;
//! - a composite that short-circuits or runs out of children completes
//!   normally (exit event, cursor reset).
//!
//! Sequence and fallback short-circuit as usual.  A parallel visits every
//! child once per round, possibly spread across several ticks, carrying its
//! success count; a child that comes back `Running` counts as a
//! non-success and has its subtree reset.
//!
//! With `wrap_around` set, a tick that started mid-tree and finished the
//! root without reaching an action walks once more from the freshly reset
//! root.  Each composite traces at most one entry and one exit per tick, so
//! the second walk only adds events for nodes the first walk never reached.

use rustc_hash::FxHashSet;
use tracing::debug;

use lb_core::{AgentId, NodeIdx, SimConfig};

use crate::{BehaviorTree, NodeKind, Outcome, TraceEvent, TraceSink, World};

/// The action leaf executed during a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRecord {
    pub node:    String,
    pub label:   String,
    pub outcome: Outcome,
}

/// Summary of one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// What the root returned (`Running` if the tick stopped mid-tree).
    pub root:   Outcome,
    /// `None` if no action leaf was reached.
    pub action: Option<ActionRecord>,
}

impl TickReport {
    pub fn executed(&self) -> bool {
        self.action.is_some()
    }
}

// ── TickEngine ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
pub struct TickEngine {
    wrap_around: bool,
}

impl Default for TickEngine {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

impl TickEngine {
    pub fn new(config: &SimConfig) -> Self {
        Self { wrap_around: config.wrap_around }
    }

    /// Tick `tree` once on behalf of `agent`.
    pub fn run<W, S>(
        &self,
        tree:  &mut BehaviorTree,
        agent: AgentId,
        world: &mut W,
        sink:  &mut S,
    ) -> TickReport
    where
        W: World + ?Sized,
        S: TraceSink + ?Sized,
    {
        let resumed = !tree.is_at_rest();
        let root = tree.root();

        let mut walk = Walk {
            agent,
            world,
            sink,
            action:  None,
            entered: FxHashSet::default(),
            exited:  FxHashSet::default(),
        };
        let mut outcome = walk.eval(tree, root);

        if self.wrap_around && resumed && outcome.is_complete() && walk.action.is_none() {
            debug!(agent = %agent, "resumed tick ran dry; restarting at the root");
            tree.reset_subtree(root);
            outcome = walk.eval(tree, root);
        }

        TickReport { root: outcome, action: walk.action }
    }
}

// ── Walk ──────────────────────────────────────────────────────────────────────

/// State of a single tick, shared by both walks when the tick wraps.
struct Walk<'a, W: ?Sized, S: ?Sized> {
    agent:   AgentId,
    world:   &'a mut W,
    sink:    &'a mut S,
    action:  Option<ActionRecord>,
    /// Composites whose entry / exit has already been traced this tick.
    entered: FxHashSet<NodeIdx>,
    exited:  FxHashSet<NodeIdx>,
}

impl<W, S> Walk<'_, W, S>
where
    W: World + ?Sized,
    S: TraceSink + ?Sized,
{
    #[inline]
    fn consumed(&self) -> bool {
        self.action.is_some()
    }

    fn eval(&mut self, tree: &mut BehaviorTree, idx: NodeIdx) -> Outcome {
        match &tree.node(idx).kind {
            NodeKind::Action(_) => self.act(tree, idx),
            NodeKind::Condition(_) => self.check(tree, idx),
            NodeKind::Sequence(_) => self.serial(tree, idx, Outcome::Failure),
            NodeKind::Fallback(_) => self.serial(tree, idx, Outcome::Success),
            NodeKind::Parallel { .. } => self.parallel(tree, idx),
        }
    }

    // ── Leaves ────────────────────────────────────────────────────────────

    fn act(&mut self, tree: &BehaviorTree, idx: NodeIdx) -> Outcome {
        let node = tree.node(idx);
        let ok = match &node.kind {
            NodeKind::Action(Ok(cmd)) => self.world.perform(self.agent, cmd),
            NodeKind::Action(Err(e)) => {
                debug!(agent = %self.agent, node = %node.id, error = %e, "unusable action label");
                false
            }
            _ => false,
        };
        let outcome = Outcome::from_bool(ok);
        self.sink.record(TraceEvent::Action {
            agent:   self.agent,
            node:    node.id.clone(),
            label:   node.label.clone(),
            outcome,
        });
        self.action = Some(ActionRecord {
            node:    node.id.clone(),
            label:   node.label.clone(),
            outcome,
        });
        outcome
    }

    fn check(&mut self, tree: &BehaviorTree, idx: NodeIdx) -> Outcome {
        let node = tree.node(idx);
        let ok = match &node.kind {
            NodeKind::Condition(Ok(pred)) => self.world.holds(self.agent, pred),
            NodeKind::Condition(Err(e)) => {
                debug!(agent = %self.agent, node = %node.id, error = %e, "unusable condition label");
                false
            }
            _ => false,
        };
        let outcome = Outcome::from_bool(ok);
        self.sink.record(TraceEvent::Condition {
            agent:   self.agent,
            node:    node.id.clone(),
            label:   node.label.clone(),
            outcome,
        });
        outcome
    }

    // ── Composites ────────────────────────────────────────────────────────

    fn enter(&mut self, tree: &BehaviorTree, idx: NodeIdx) -> (Vec<NodeIdx>, usize) {
        let node = tree.node(idx);
        if self.entered.insert(idx) {
            self.sink.record(TraceEvent::Enter {
                agent: self.agent,
                node:  node.id.clone(),
                kind:  node.kind.type_name(),
            });
        }
        let body = node.kind.composite();
        (
            body.map(|c| c.children.clone()).unwrap_or_default(),
            body.map_or(0, |c| c.cursor),
        )
    }

    fn exit(&mut self, tree: &mut BehaviorTree, idx: NodeIdx, outcome: Outcome) -> Outcome {
        let node = tree.node_mut(idx);
        node.kind.reset();
        if self.exited.insert(idx) {
            self.sink.record(TraceEvent::Exit {
                agent:   self.agent,
                node:    node.id.clone(),
                kind:    node.kind.type_name(),
                outcome,
            });
        }
        outcome
    }

    fn suspend(tree: &mut BehaviorTree, idx: NodeIdx, cursor: usize) -> Outcome {
        if let Some(body) = tree.node_mut(idx).kind.composite_mut() {
            body.cursor = cursor;
        }
        Outcome::Running
    }

    /// Sequence (`stop_on = Failure`) and fallback (`stop_on = Success`).
    fn serial(&mut self, tree: &mut BehaviorTree, idx: NodeIdx, stop_on: Outcome) -> Outcome {
        let (children, mut cursor) = self.enter(tree, idx);

        while cursor < children.len() {
            match self.eval(tree, children[cursor]) {
                Outcome::Running => return Self::suspend(tree, idx, cursor),
                out if out == stop_on => return self.exit(tree, idx, out),
                _ => {
                    cursor += 1;
                    if self.consumed() && cursor < children.len() {
                        return Self::suspend(tree, idx, cursor);
                    }
                }
            }
        }

        let exhausted = match stop_on {
            Outcome::Failure => Outcome::Success,
            _ => Outcome::Failure,
        };
        self.exit(tree, idx, exhausted)
    }

    fn parallel(&mut self, tree: &mut BehaviorTree, idx: NodeIdx) -> Outcome {
        let (children, mut cursor) = self.enter(tree, idx);
        let (threshold, mut successes) = match tree.node(idx).kind {
            NodeKind::Parallel { threshold, successes, .. } => (threshold, successes),
            _ => (0, 0),
        };

        while cursor < children.len() {
            let child = children[cursor];
            match self.eval(tree, child) {
                Outcome::Success => successes += 1,
                Outcome::Running => tree.reset_subtree(child),
                Outcome::Failure => {}
            }
            cursor += 1;
            if self.consumed() && cursor < children.len() {
                if let NodeKind::Parallel { body, successes: stored, .. } = &mut tree.node_mut(idx).kind {
                    body.cursor = cursor;
                    *stored = successes;
                }
                return Outcome::Running;
            }
        }

        self.exit(tree, idx, Outcome::from_bool(successes >= threshold))
    }
}
