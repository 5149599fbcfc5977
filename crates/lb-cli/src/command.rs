//! The interactive command language.
//!
//! | Command                                   | Effect                         |
//! |-------------------------------------------|--------------------------------|
//! | `load board <path>`                       | load a board file              |
//! | `load trees <path>...`                    | load one tree per ladybug      |
//! | `list ladybugs`                           | ids of ladybugs with a tree    |
//! | `print board`                             | bordered board                 |
//! | `print position <id>`                     | `(x,y)`                        |
//! | `reset tree <id>`                         | clear tree progress            |
//! | `jump to <id> <node>`                     | move the inspection head       |
//! | `head <id>`                               | node under the head            |
//! | `next action [<id>]`                      | tick all ladybugs (or one)     |
//! | `add sibling <id> [<node>] <definition>`  | splice a node into the tree    |
//! | `quit`                                    | stop reading commands          |

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use lb_core::AgentId;
use regex::Regex;
use thiserror::Error;

static NODE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("node id pattern"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("invalid '{command}' command. Usage: {usage}")]
    Usage {
        command: &'static str,
        usage:   &'static str,
    },

    #[error("invalid ladybug id '{0}'")]
    BadAgentId(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    LoadBoard(PathBuf),
    LoadTrees(Vec<PathBuf>),
    ListLadybugs,
    PrintBoard,
    PrintPosition(AgentId),
    ResetTree(AgentId),
    JumpTo {
        agent: AgentId,
        node:  String,
    },
    Head(AgentId),
    NextAction(Option<AgentId>),
    AddSibling {
        agent:      AgentId,
        target:     Option<String>,
        definition: String,
    },
    Quit,
}

fn agent_id(token: &str) -> Result<AgentId, CommandError> {
    token
        .parse::<u32>()
        .map(AgentId)
        .map_err(|_| CommandError::BadAgentId(token.to_string()))
}

fn usage(command: &'static str, usage: &'static str) -> CommandError {
    CommandError::Usage { command, usage }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&head) = parts.first() else {
            return Err(CommandError::Unknown(String::new()));
        };

        match (head, &parts[1..]) {
            ("quit", []) => Ok(Command::Quit),

            ("load", ["board", path]) => Ok(Command::LoadBoard(PathBuf::from(path))),
            ("load", ["trees", paths @ ..]) if !paths.is_empty() => {
                Ok(Command::LoadTrees(paths.iter().map(PathBuf::from).collect()))
            }
            ("load", _) => Err(usage("load", "load board <path> | load trees <path>...")),

            ("list", ["ladybugs"]) => Ok(Command::ListLadybugs),
            ("list", _) => Err(usage("list", "list ladybugs")),

            ("print", ["board"]) => Ok(Command::PrintBoard),
            ("print", ["position", id]) => Ok(Command::PrintPosition(agent_id(id)?)),
            ("print", _) => Err(usage("print", "print board | print position <ladybug>")),

            ("reset", ["tree", id]) => Ok(Command::ResetTree(agent_id(id)?)),
            ("reset", _) => Err(usage("reset", "reset tree <ladybug>")),

            ("jump", ["to", id, node]) => Ok(Command::JumpTo {
                agent: agent_id(id)?,
                node:  node.to_string(),
            }),
            ("jump", _) => Err(usage("jump", "jump to <ladybug> <node>")),

            ("head", [id]) => Ok(Command::Head(agent_id(id)?)),
            ("head", _) => Err(usage("head", "head <ladybug>")),

            ("next", ["action"]) => Ok(Command::NextAction(None)),
            ("next", ["action", id]) => Ok(Command::NextAction(Some(agent_id(id)?))),
            ("next", _) => Err(usage("next", "next action [<ladybug>]")),

            // A bare id before the definition names the target node.
            ("add", ["sibling", id, first, rest @ ..]) => {
                let agent = agent_id(id)?;
                let (target, definition) = if !rest.is_empty() && NODE_ID_RE.is_match(first) {
                    (Some(first.to_string()), rest.join(" "))
                } else {
                    (None, parts[3..].join(" "))
                };
                Ok(Command::AddSibling { agent, target, definition })
            }
            ("add", _) => Err(usage("add", "add sibling <ladybug> [<node>] <definition>")),

            (other, _) => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
