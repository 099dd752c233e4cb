//! pathquill - find every path where a key or value occurs in a document.
//!
//! pathquill walks a tree of mappings, sequences and scalars (parsed from
//! YAML, JSON or JSON Lines) and reports each location where a key or a
//! value occurs, as a readable path such as `user.profile.details[2].city`.
//!
//! # Example
//!
//! ```
//! use pathquill::document::parser::parse_yaml;
//! use pathquill::search::find_value_paths;
//!
//! let tree = parse_yaml(r#"
//! a: {b: 10, c: [10, {d: 20, e: 10}]}
//! f: [{g: 10}, {h: 20}]
//! "#).unwrap();
//!
//! let matches = find_value_paths(tree.root(), 10_i64).unwrap();
//! let paths: Vec<&str> = matches.iter().map(|m| m.path.as_str()).collect();
//! assert_eq!(paths, vec!["a.b", "a.c[0]", "a.c[1].e", "f[0].g"]);
//!
//! for m in &matches {
//!     assert_eq!(tree.resolve(&m.path).unwrap(), Some(m.value));
//! }
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod output;
pub mod path;
pub mod search;

pub use document::node::{YamlKey, YamlNumber, YamlValue};
pub use document::tree::YamlTree;
pub use search::{search, Match, SearchError, SearchOptions, SearchTarget};
