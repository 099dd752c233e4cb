//! Document model for pathquill.
//!
//! - [`node`]: the `YamlValue` tree, its keys and numbers
//! - [`parser`]: YAML, JSON and scalar-literal parsing
//! - [`tree`]: a loaded document with its search entry points

pub mod node;
pub mod parser;
pub mod tree;
