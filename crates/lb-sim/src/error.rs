use lb_behavior::TreeError;
use lb_core::AgentId;
use lb_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("no board loaded")]
    NoBoard,

    #[error("ladybug {0} not found")]
    AgentNotFound(AgentId),

    #[error("number of trees to load ({trees}) exceeds number of ladybugs on board ({agents})")]
    TooManyTrees {
        trees:  usize,
        agents: usize,
    },

    #[error("behavior tree not initialized for ladybug {0}")]
    Uninitialized(AgentId),

    #[error(transparent)]
    Grid(#[from] GridError),

    /// A tree source failed to parse; `index` is its position in the load
    /// request (0-based).
    #[error("invalid tree source #{}", .index + 1)]
    TreeSource {
        index:  usize,
        #[source]
        source: TreeError,
    },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

pub type SimResult<T> = Result<T, SimError>;
