//! Match paths: rendering and resolution.
//!
//! A match path is the text the search engine reports for each hit, e.g.
//! `user.profile.details[2].city`. Mapping access is written `.key` and
//! sequence access `[index]`; the leading dot of the first segment is
//! dropped and the document root is the empty string.
//!
//! Keys are written verbatim whatever their type, so `{1: x}` yields the
//! path `1` and `{true: x}` the path `true`. A key whose text contains `.`
//! or `[` therefore produces an ambiguous path; the resolver handles the
//! common cases by preferring the longest key that fits.

pub mod error;
pub mod render;
pub mod resolver;

pub use error::PathError;
pub use render::{child_index, child_key};
pub use resolver::{resolve, Resolver};
