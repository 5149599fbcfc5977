//! Fluent builder for constructing a [`Sim`].

use lb_agent::{AgentStore, AgentTrees};
use lb_behavior::TickEngine;
use lb_core::SimConfig;
use lb_grid::{BfsReachability, Reachability};

use crate::Sim;

/// Fluent builder for [`Sim<R>`].
///
/// | Method                  | Default            |
/// |-------------------------|--------------------|
/// | `.config(c)`            | `SimConfig::default()` |
/// | `.reachability(r)`      | `BfsReachability`  |
///
/// ```rust
/// use lb_sim::SimBuilder;
///
/// let mut sim = SimBuilder::new().build();
/// sim.load_board(&[">.", ".."]).unwrap();
/// assert_eq!(sim.agents.count, 1);
/// ```
pub struct SimBuilder<R: Reachability = BfsReachability> {
    config: SimConfig,
    reach:  R,
}

impl Default for SimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBuilder {
    pub fn new() -> Self {
        Self { config: SimConfig::default(), reach: BfsReachability }
    }
}

impl<R: Reachability> SimBuilder<R> {
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap the `existsPath` oracle.
    pub fn reachability<R2: Reachability>(self, reach: R2) -> SimBuilder<R2> {
        SimBuilder { config: self.config, reach }
    }

    /// Construct the simulation with no board loaded.
    pub fn build(self) -> Sim<R> {
        Sim {
            engine: TickEngine::new(&self.config),
            config: self.config,
            board:  None,
            agents: AgentStore::empty(),
            trees:  AgentTrees::default(),
            reach:  self.reach,
        }
    }
}
