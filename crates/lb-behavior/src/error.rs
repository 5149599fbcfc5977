use thiserror::Error;

/// Structural errors: tree parsing and tree mutation.
///
/// These always reach the caller.  Bad leaf labels are a different matter;
/// see [`LeafError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node {0} not found in the tree")]
    NodeNotFound(String),

    #[error("a node with id {0} already exists")]
    DuplicateId(String),

    #[error("node {0} has no parent: cannot add a sibling to the root")]
    NoParent(String),

    #[error("could not find a root node in the tree")]
    RootMissing,

    #[error("behavior tree must contain at least one action node")]
    NoActionNodes,

    #[error("node {0} is the child of more than one composite")]
    MultipleParents(String),

    #[error("node {id} declared twice with different labels ({first:?}, {second:?})")]
    ConflictingDeclaration {
        id:     String,
        first:  String,
        second: String,
    },

    #[error("invalid parallel threshold in label {0:?}")]
    InvalidThreshold(String),

    #[error("invalid node definition format: {0}")]
    InvalidDefinition(String),
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Why a leaf label could not be turned into an executable command.
///
/// Stored on the leaf itself; evaluating such a leaf yields FAILURE.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeafError {
    #[error("unknown action {0:?}")]
    UnknownCommand(String),

    #[error("unknown condition {0:?}")]
    UnknownPredicate(String),

    #[error("malformed arguments for {command}: {args:?}")]
    MalformedArguments {
        command: &'static str,
        args:    String,
    },
}
