//! Leaf labels: action commands and condition predicates.
//!
//! A leaf's label is split on whitespace into a command token and its
//! arguments.  Parsing happens once, when the node is created; the result
//! (including any [`LeafError`]) is kept on the node.

use std::fmt;
use std::str::FromStr;

use lb_core::Position;

use crate::LeafError;

const ACTION_WORDS: [&str; 5] = ["turnLeft", "turnRight", "move", "placeLeaf", "takeLeaf"];

/// `true` if `label` names an action rather than a condition.
///
/// Anything starting with `fly` counts, so `fly` with broken arguments is
/// still an action (one that always fails).
pub fn is_action_label(label: &str) -> bool {
    let label = label.trim();
    let first = label.split_whitespace().next().unwrap_or("");
    ACTION_WORDS.contains(&first) || label.starts_with("fly")
}

// ── ActionCommand ─────────────────────────────────────────────────────────────

/// A world-mutating primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionCommand {
    TurnLeft,
    TurnRight,
    Move,
    PlaceLeaf,
    TakeLeaf,
    /// Teleport to the given cell.
    Fly(Position),
}

impl FromStr for ActionCommand {
    type Err = LeafError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut parts = label.split_whitespace();
        let command = parts.next().unwrap_or("");
        match command {
            "turnLeft"  => Ok(ActionCommand::TurnLeft),
            "turnRight" => Ok(ActionCommand::TurnRight),
            "move"      => Ok(ActionCommand::Move),
            "placeLeaf" => Ok(ActionCommand::PlaceLeaf),
            "takeLeaf"  => Ok(ActionCommand::TakeLeaf),
            "fly" => {
                let malformed = || LeafError::MalformedArguments {
                    command: "fly",
                    args:    label.trim().trim_start_matches("fly").trim().to_string(),
                };
                let x = parts.next().and_then(|s| s.parse::<i32>().ok()).ok_or_else(malformed)?;
                let y = parts.next().and_then(|s| s.parse::<i32>().ok()).ok_or_else(malformed)?;
                Ok(ActionCommand::Fly(Position::new(x, y)))
            }
            other => Err(LeafError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for ActionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionCommand::TurnLeft  => write!(f, "turnLeft"),
            ActionCommand::TurnRight => write!(f, "turnRight"),
            ActionCommand::Move      => write!(f, "move"),
            ActionCommand::PlaceLeaf => write!(f, "placeLeaf"),
            ActionCommand::TakeLeaf  => write!(f, "takeLeaf"),
            ActionCommand::Fly(p)    => write!(f, "fly {} {}", p.x, p.y),
        }
    }
}

// ── Predicate ─────────────────────────────────────────────────────────────────

/// A side-effect-free question about the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    LeafFront,
    TreeFront,
    MushroomFront,
    AtEdge,
    /// `existsPath x,y` (`from = None`: start at the asking ladybug) or
    /// `existsPath x1,y1 x2,y2`.
    ExistsPath {
        from: Option<Position>,
        to:   Position,
    },
}

impl FromStr for Predicate {
    type Err = LeafError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = label.split_whitespace().collect();
        match parts.first().copied().unwrap_or("") {
            "leafFront"     => Ok(Predicate::LeafFront),
            "treeFront"     => Ok(Predicate::TreeFront),
            "mushroomFront" => Ok(Predicate::MushroomFront),
            "atEdge"        => Ok(Predicate::AtEdge),
            "existsPath" => {
                let malformed = || LeafError::MalformedArguments {
                    command: "existsPath",
                    args:    parts[1..].join(" "),
                };
                let point = |s: &str| Position::parse_pair(s).map_err(|_| malformed());
                match parts.len() {
                    2 => Ok(Predicate::ExistsPath { from: None, to: point(parts[1])? }),
                    3 => Ok(Predicate::ExistsPath {
                        from: Some(point(parts[1])?),
                        to:   point(parts[2])?,
                    }),
                    _ => Err(malformed()),
                }
            }
            other => Err(LeafError::UnknownPredicate(other.to_string())),
        }
    }
}
