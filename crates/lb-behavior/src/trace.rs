//! Trace events emitted while a tree is being ticked.
//!
//! One event per node visit, in visiting order.  Events render as four
//! space-separated fields, `<agent> <node> <name> <status>`:
//!
//! ```text
//! 1 A fallback ENTRY
//! 1 B treeFront FAILURE
//! 1 C move SUCCESS
//! ```

use std::fmt;

use lb_core::AgentId;

use crate::Outcome;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A composite was entered.
    Enter {
        agent: AgentId,
        node:  String,
        kind:  &'static str,
    },
    /// A composite completed.  Composites stopped by the one-action rule
    /// emit nothing.
    Exit {
        agent:   AgentId,
        node:    String,
        kind:    &'static str,
        outcome: Outcome,
    },
    Condition {
        agent:   AgentId,
        node:    String,
        label:   String,
        outcome: Outcome,
    },
    Action {
        agent:   AgentId,
        node:    String,
        label:   String,
        outcome: Outcome,
    },
}

impl TraceEvent {
    pub fn agent(&self) -> AgentId {
        match self {
            TraceEvent::Enter { agent, .. }
            | TraceEvent::Exit { agent, .. }
            | TraceEvent::Condition { agent, .. }
            | TraceEvent::Action { agent, .. } => *agent,
        }
    }

    pub fn node(&self) -> &str {
        match self {
            TraceEvent::Enter { node, .. }
            | TraceEvent::Exit { node, .. }
            | TraceEvent::Condition { node, .. }
            | TraceEvent::Action { node, .. } => node,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Enter { agent, node, kind } => write!(f, "{agent} {node} {kind} ENTRY"),
            TraceEvent::Exit { agent, node, kind, outcome } => {
                write!(f, "{agent} {node} {kind} {outcome}")
            }
            TraceEvent::Condition { agent, node, label, outcome }
            | TraceEvent::Action { agent, node, label, outcome } => {
                write!(f, "{agent} {node} {label} {outcome}")
            }
        }
    }
}

// ── TraceSink ─────────────────────────────────────────────────────────────────

/// Receives every [`TraceEvent`] produced by the tick engine.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// A [`TraceSink`] that discards everything.
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Collects events in order; handy for tests and for replaying a tick.
impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
