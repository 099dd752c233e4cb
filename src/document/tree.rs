//! A loaded document and the queries that run against it.
//!
//! `YamlTree` owns the root of a parsed document together with the text it
//! was parsed from. Searching and path resolution borrow the tree, so any
//! number of queries can share one loaded document.
//!
//! # Example
//!
//! ```
//! use pathquill::document::parser::parse_yaml;
//! use pathquill::search::{SearchOptions, SearchTarget};
//!
//! let tree = parse_yaml("a: {b: 10, c: [10, 20]}\n").unwrap();
//! let matches = tree
//!     .search(&SearchTarget::Value(10_i64.into()), &SearchOptions::default())
//!     .unwrap();
//!
//! let paths: Vec<&str> = matches.iter().map(|m| m.path.as_str()).collect();
//! assert_eq!(paths, vec!["a.b", "a.c[0]"]);
//! ```

use super::node::YamlValue;
use crate::path::{self, PathError};
use crate::search::{self, Match, SearchError, SearchOptions, SearchTarget};

/// A complete document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlTree {
    root: YamlValue,
    /// The text the tree was parsed from, when it came from text
    original_source: Option<String>,
}

impl YamlTree {
    /// Creates a new tree with the given root and no source text.
    pub fn new(root: YamlValue) -> Self {
        Self {
            root,
            original_source: None,
        }
    }

    /// Creates a new tree with the given root and original source.
    pub fn with_source(root: YamlValue, original_source: Option<String>) -> Self {
        Self {
            root,
            original_source,
        }
    }

    /// Returns a reference to the original source, if available.
    pub fn original_source(&self) -> Option<&str> {
        self.original_source.as_deref()
    }

    /// Returns a reference to the root node of the tree.
    pub fn root(&self) -> &YamlValue {
        &self.root
    }

    /// Consumes the tree and returns its root.
    pub fn into_root(self) -> YamlValue {
        self.root
    }

    /// Runs a key or value search over the whole document.
    ///
    /// See [`search::search`] for ordering and error semantics.
    pub fn search(
        &self,
        target: &SearchTarget,
        options: &SearchOptions,
    ) -> Result<Vec<Match<'_>>, SearchError> {
        search::search(&self.root, target, options)
    }

    /// Looks up the node at a match path such as `user.details[2].city`.
    ///
    /// Returns `Ok(None)` when nothing lives at that path.
    pub fn resolve(&self, match_path: &str) -> Result<Option<&YamlValue>, PathError> {
        path::resolve(&self.root, match_path)
    }
}
