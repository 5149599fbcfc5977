//! The seam between the tick engine and whatever the leaves act upon.

use lb_core::AgentId;

use crate::{ActionCommand, Predicate};

/// Concrete effects and predicates invoked by action and condition leaves.
///
/// The engine never touches the board directly; it hands each parsed leaf to
/// an implementor of this trait.  `lb-world` provides the grid-backed
/// implementation; tests use small scripted fakes.
pub trait World {
    /// Carry out `action` for `agent`.  Returns `true` if it took effect.
    fn perform(&mut self, agent: AgentId, action: &ActionCommand) -> bool;

    /// Evaluate `predicate` from `agent`'s point of view.
    fn holds(&self, agent: AgentId, predicate: &Predicate) -> bool;
}
