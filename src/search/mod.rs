//! Key and value search over document trees.
//!
//! The engine walks a tree depth-first, pre-order, and reports every place
//! where a mapping key or a value equals the target, as a `Match` holding
//! the match path and a borrow of the node found there.
//!
//! # Semantics
//!
//! - Key mode: each mapping entry whose key equals the target is reported,
//!   with the entry's value. Keys compare by exact type and value, so the
//!   integer key `1` does not match the text key `"1"`.
//! - Value mode: each mapping value or sequence item equal to the target is
//!   reported. A bare scalar root equal to the target is reported at the
//!   empty path.
//! - A match never stops the walk: the matched node's own children are
//!   searched as well.
//! - Without dedupe, matches come out in pre-order. Mapping entries are
//!   visited in document order and sequence items by ascending index.
//! - A `MultiDoc` root is walked like a sequence of documents.
//!
//! The walk keeps its own stack on the heap, so document depth is limited
//! by memory rather than by the thread's call stack.
//!
//! # Example
//!
//! ```
//! use pathquill::document::parser::parse_yaml;
//! use pathquill::search::find_key_paths;
//!
//! let tree = parse_yaml(
//!     "user:\n  location: {city: Boston}\n  projects: [{city: Miami}]\n",
//! ).unwrap();
//!
//! let matches = find_key_paths(tree.root(), "city").unwrap();
//! let paths: Vec<&str> = matches.iter().map(|m| m.path.as_str()).collect();
//! assert_eq!(paths, vec!["user.location.city", "user.projects[0].city"]);
//! ```

pub mod error;

pub use error::SearchError;

use crate::document::node::{YamlKey, YamlValue};
use crate::path::{child_index, child_key};
use indexmap::IndexSet;
use log::{debug, trace};
use serde::Serialize;

/// What to look for. The two modes never run together.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchTarget {
    /// Match mapping entries whose key equals this key
    Key(YamlKey),
    /// Match mapping values and sequence items equal to this value
    Value(YamlValue),
}

impl SearchTarget {
    /// Checks one position. `key` is `None` for sequence items.
    fn matches(&self, key: Option<&YamlKey>, value: &YamlValue) -> bool {
        match self {
            SearchTarget::Key(target) => key == Some(target),
            SearchTarget::Value(target) => value == target,
        }
    }
}

/// Options for a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Drop repeated `(path, value)` pairs. Ordering is then unspecified.
    pub dedupe: bool,
}

/// A single search hit.
///
/// Matches compare and hash structurally on both fields, which is what
/// dedupe relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Match<'a> {
    /// Match path of the hit; empty for the document root
    pub path: String,
    /// The node found at `path`
    pub value: &'a YamlValue,
}

/// One pending position on the walk stack.
struct Frame<'a> {
    node: &'a YamlValue,
    path: String,
    key: Option<&'a YamlKey>,
}

/// Searches `root` for `target`.
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedNodeKind`] as soon as the walk reaches
/// an `Alias` node or a `MultiDoc` below the root. No partial result is
/// returned in that case.
pub fn search<'a>(
    root: &'a YamlValue,
    target: &SearchTarget,
    options: &SearchOptions,
) -> Result<Vec<Match<'a>>, SearchError> {
    debug!(
        "Searching {} root for {:?} (dedupe: {})",
        root.kind(),
        target,
        options.dedupe
    );

    let mut matches = Vec::new();

    // Only a bare scalar root can match as a whole document
    if let SearchTarget::Value(value) = target {
        if root.is_scalar() && root == value {
            trace!("Match at document root");
            matches.push(Match {
                path: String::new(),
                value: root,
            });
        }
    }

    let mut stack = Vec::new();
    push_children(root, "", true, &mut stack)?;

    while let Some(frame) = stack.pop() {
        if target.matches(frame.key, frame.node) {
            trace!("Match at {}", frame.path);
            matches.push(Match {
                path: frame.path.clone(),
                value: frame.node,
            });
        }
        push_children(frame.node, &frame.path, false, &mut stack)?;
    }

    if options.dedupe {
        let unique: IndexSet<Match<'a>> = matches.into_iter().collect();
        matches = unique.into_iter().collect();
    }

    debug!("Search finished with {} matches", matches.len());
    Ok(matches)
}

/// Pushes the children of `node` so that the first child is popped first.
fn push_children<'a>(
    node: &'a YamlValue,
    path: &str,
    at_root: bool,
    stack: &mut Vec<Frame<'a>>,
) -> Result<(), SearchError> {
    match node {
        YamlValue::Mapping(entries) => {
            for (key, value) in entries.iter().rev() {
                stack.push(Frame {
                    node: value,
                    path: child_key(path, key),
                    key: Some(key),
                });
            }
        }
        YamlValue::Sequence(items) => push_items(items, path, stack),
        YamlValue::MultiDoc(documents) if at_root => push_items(documents, path, stack),
        YamlValue::String(_) | YamlValue::Number(_) | YamlValue::Boolean(_) | YamlValue::Null => {}
        YamlValue::Alias(_) | YamlValue::MultiDoc(_) => {
            return Err(SearchError::UnsupportedNodeKind {
                path: path.to_string(),
                kind: node.kind(),
            })
        }
    }
    Ok(())
}

fn push_items<'a>(items: &'a [YamlValue], path: &str, stack: &mut Vec<Frame<'a>>) {
    for (index, item) in items.iter().enumerate().rev() {
        stack.push(Frame {
            node: item,
            path: child_index(path, index),
            key: None,
        });
    }
}

/// Finds every mapping entry keyed by `key`, in pre-order.
pub fn find_key_paths(
    root: &YamlValue,
    key: impl Into<YamlKey>,
) -> Result<Vec<Match<'_>>, SearchError> {
    search(root, &SearchTarget::Key(key.into()), &SearchOptions::default())
}

/// Finds every position holding `value`, in pre-order.
pub fn find_value_paths(
    root: &YamlValue,
    value: impl Into<YamlValue>,
) -> Result<Vec<Match<'_>>, SearchError> {
    search(
        root,
        &SearchTarget::Value(value.into()),
        &SearchOptions::default(),
    )
}

/// Like [`find_value_paths`], with repeated `(path, value)` pairs removed.
pub fn find_value_paths_deduplicated(
    root: &YamlValue,
    value: impl Into<YamlValue>,
) -> Result<Vec<Match<'_>>, SearchError> {
    search(
        root,
        &SearchTarget::Value(value.into()),
        &SearchOptions { dedupe: true },
    )
}
