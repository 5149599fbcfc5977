//! Mermaid-flavoured tree sources.
//!
//! ```text
//! flowchart TD
//!     A[?] --> B([treeFront])
//!     A --> C[->]
//!     C --> D[turnLeft]
//!     C --> E[move]
//! ```
//!
//! Declarations (`id[label]`, `id(label)`, `id([label])`) may appear
//! anywhere on a line, including on edge lines.  Edges may be chained
//! (`a --> b --> c`).  `graph TD` / `flowchart TD` headers, `%%` comments
//! and blank lines are skipped.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::{BehaviorTree, Node, TreeBuilder, TreeError, TreeResult};

static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9]+)(?:\[(.+?)\]|\((.+?)\))").expect("declaration pattern")
});

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("id pattern"));

/// Id and label of a declaration match, with the `([label])` form unwrapped.
fn declaration<'h>(caps: &Captures<'h>) -> Option<(&'h str, &'h str)> {
    let id = caps.get(1)?.as_str();
    let label = match (caps.get(2), caps.get(3)) {
        (Some(bracket), _) => bracket.as_str(),
        (None, Some(paren)) => {
            let inner = paren.as_str();
            inner
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .unwrap_or(inner)
        }
        (None, None) => return None,
    };
    Some((id, label))
}

fn is_skipped(line: &str) -> bool {
    line.is_empty()
        || line.starts_with("%%")
        || line.starts_with("graph TD")
        || line.starts_with("flowchart TD")
}

/// Parse a complete tree source.
///
/// # Errors
///
/// Any [`TreeError`] raised while declaring nodes, linking edges or
/// assembling the tree; see [`TreeBuilder`].
pub fn parse_tree(source: &str) -> TreeResult<BehaviorTree> {
    let mut builder = TreeBuilder::new();

    for raw in source.lines() {
        let line = raw.trim();
        if is_skipped(line) {
            continue;
        }

        for caps in DECLARATION_RE.captures_iter(line) {
            if let Some((id, label)) = declaration(&caps) {
                builder.declare(id, label)?;
            }
        }

        if !line.contains("-->") {
            continue;
        }
        // Collapse declarations to bare ids, then read the chain.
        let bare = DECLARATION_RE.replace_all(line, "$1");
        let ids: Vec<&str> = bare.split("-->").map(str::trim).collect();
        for pair in ids.windows(2) {
            let (parent, child) = (pair[0], pair[1]);
            if !ID_RE.is_match(parent) || !ID_RE.is_match(child) {
                return Err(TreeError::InvalidDefinition(line.to_string()));
            }
            builder.edge(parent, child)?;
        }
    }

    let tree = builder.build()?;
    debug!(nodes = tree.len(), "parsed tree source");
    Ok(tree)
}

/// Parse one standalone declaration such as `F[move]` or `I([atEdge])`.
///
/// # Errors
///
/// [`TreeError::InvalidDefinition`] if `definition` is not a declaration;
/// [`TreeError::InvalidThreshold`] for a bad parallel label.
pub fn parse_node_definition(definition: &str) -> TreeResult<Node> {
    let trimmed = definition.trim();
    DECLARATION_RE
        .captures(trimmed)
        .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0 && m.end() == trimmed.len()))
        .as_ref()
        .and_then(declaration)
        .ok_or_else(|| TreeError::InvalidDefinition(definition.to_string()))
        .and_then(|(id, label)| Node::new(id, label))
}
