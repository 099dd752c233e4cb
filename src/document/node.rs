//! Document node representation for searchable YAML and JSON trees.
//!
//! This module provides the core data structures for representing parsed
//! documents in pathquill. A document is a tree of `YamlValue`s: mappings
//! keyed by `YamlKey`, sequences, and scalar leaves. Mapping keys are not
//! limited to text, since YAML allows integers, floats and booleans as keys.
//!
//! # Example
//!
//! ```
//! use pathquill::document::node::{YamlKey, YamlNumber, YamlValue};
//! use indexmap::IndexMap;
//!
//! let mut user = IndexMap::new();
//! user.insert(YamlKey::from("name"), YamlValue::from("Alice"));
//! user.insert(YamlKey::Integer(1), YamlValue::Number(YamlNumber::Integer(30)));
//! let root = YamlValue::Mapping(user);
//!
//! assert!(root.is_mapping());
//! assert_eq!(root.get(&YamlKey::Integer(1)), Some(&YamlValue::from(30_i64)));
//! ```

use indexmap::IndexMap;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A mapping key.
///
/// Keys compare by exact variant and value: `Integer(1)` and `String("1")`
/// are different keys, and so are `Integer(1)` and `Float(1.0)`. Float keys
/// compare by bit pattern, which makes `YamlKey` usable in hashed
/// collections.
#[derive(Debug, Clone)]
pub enum YamlKey {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl PartialEq for YamlKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (YamlKey::String(a), YamlKey::String(b)) => a == b,
            (YamlKey::Integer(a), YamlKey::Integer(b)) => a == b,
            (YamlKey::Float(a), YamlKey::Float(b)) => a.to_bits() == b.to_bits(),
            (YamlKey::Boolean(a), YamlKey::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for YamlKey {}

impl Hash for YamlKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            YamlKey::String(s) => s.hash(state),
            YamlKey::Integer(i) => i.hash(state),
            YamlKey::Float(f) => f.to_bits().hash(state),
            YamlKey::Boolean(b) => b.hash(state),
        }
    }
}

/// Renders the key the way it appears in a match path.
///
/// Text is written as-is, never quoted. Floats always carry a fractional
/// part (`1.0`) so they stay distinguishable from integer keys.
impl fmt::Display for YamlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlKey::String(s) => f.write_str(s),
            YamlKey::Integer(i) => write!(f, "{}", i),
            YamlKey::Float(fl) => write!(f, "{:?}", fl),
            YamlKey::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for YamlKey {
    fn from(s: &str) -> Self {
        YamlKey::String(s.to_string())
    }
}

impl From<String> for YamlKey {
    fn from(s: String) -> Self {
        YamlKey::String(s)
    }
}

impl From<i64> for YamlKey {
    fn from(i: i64) -> Self {
        YamlKey::Integer(i)
    }
}

impl From<f64> for YamlKey {
    fn from(f: f64) -> Self {
        YamlKey::Float(f)
    }
}

impl From<bool> for YamlKey {
    fn from(b: bool) -> Self {
        YamlKey::Boolean(b)
    }
}

impl TryFrom<&YamlValue> for YamlKey {
    type Error = anyhow::Error;

    /// Converts a scalar value into a key. Null and collections are not keys.
    fn try_from(value: &YamlValue) -> anyhow::Result<Self> {
        match value {
            YamlValue::String(s) => Ok(YamlKey::String(s.clone())),
            YamlValue::Number(YamlNumber::Integer(i)) => Ok(YamlKey::Integer(*i)),
            YamlValue::Number(YamlNumber::Float(f)) => Ok(YamlKey::Float(*f)),
            YamlValue::Boolean(b) => Ok(YamlKey::Boolean(*b)),
            other => anyhow::bail!("a {} cannot be used as a mapping key", other.kind()),
        }
    }
}

/// Represents YAML numbers (integer or float).
///
/// Integers and floats never compare equal to each other, so `10` and `10.0`
/// are distinct values. Floats compare by bit pattern.
#[derive(Debug, Clone, Copy)]
pub enum YamlNumber {
    Integer(i64),
    Float(f64),
}

impl PartialEq for YamlNumber {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (YamlNumber::Integer(a), YamlNumber::Integer(b)) => a == b,
            (YamlNumber::Float(a), YamlNumber::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for YamlNumber {}

impl Hash for YamlNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            YamlNumber::Integer(i) => i.hash(state),
            YamlNumber::Float(f) => f.to_bits().hash(state),
        }
    }
}

impl fmt::Display for YamlNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlNumber::Integer(i) => write!(f, "{}", i),
            YamlNumber::Float(fl) => write!(f, "{:?}", fl),
        }
    }
}

/// A node of a parsed document.
///
/// `Mapping`, `Sequence` and the scalar variants make up a well-formed tree.
/// `Alias` and `MultiDoc` exist so loaders can hand over what they found
/// without losing information; the search engine refuses an `Alias`
/// anywhere and a `MultiDoc` anywhere but the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlValue {
    /// Key-value pairs in document order
    Mapping(IndexMap<YamlKey, YamlValue>),
    /// Items addressed by index
    Sequence(Vec<YamlValue>),
    String(String),
    Number(YamlNumber),
    Boolean(bool),
    Null,
    /// An alias reference whose anchor was never resolved
    Alias(String),
    /// A multi-document file (each document is a YamlValue)
    MultiDoc(Vec<YamlValue>),
}

impl Hash for YamlValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            // Mapping equality ignores entry order, so only the length may
            // feed the hash.
            YamlValue::Mapping(entries) => entries.len().hash(state),
            YamlValue::Sequence(items) | YamlValue::MultiDoc(items) => items.hash(state),
            YamlValue::String(s) | YamlValue::Alias(s) => s.hash(state),
            YamlValue::Number(n) => n.hash(state),
            YamlValue::Boolean(b) => b.hash(state),
            YamlValue::Null => {}
        }
    }
}

impl YamlValue {
    /// Returns true if this value is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, YamlValue::Mapping(_))
    }

    /// Returns true if this value is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, YamlValue::Sequence(_))
    }

    /// Returns true if this value is a leaf: string, number, boolean or null.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::document::node::YamlValue;
    ///
    /// assert!(YamlValue::Null.is_scalar());
    /// assert!(YamlValue::from("Boston").is_scalar());
    /// assert!(!YamlValue::Sequence(vec![]).is_scalar());
    /// assert!(!YamlValue::Alias("base".to_string()).is_scalar());
    /// ```
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            YamlValue::String(_) | YamlValue::Number(_) | YamlValue::Boolean(_) | YamlValue::Null
        )
    }

    /// A short human-readable name for the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            YamlValue::Mapping(_) => "mapping",
            YamlValue::Sequence(_) => "sequence",
            YamlValue::String(_) => "string",
            YamlValue::Number(_) => "number",
            YamlValue::Boolean(_) => "boolean",
            YamlValue::Null => "null",
            YamlValue::Alias(_) => "alias",
            YamlValue::MultiDoc(_) => "multi-document",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            YamlValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a mapping entry by key. Returns `None` for non-mappings.
    pub fn get(&self, key: &YamlKey) -> Option<&YamlValue> {
        match self {
            YamlValue::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Returns a sequence item, or a document of a multi-doc root.
    pub fn get_index(&self, index: usize) -> Option<&YamlValue> {
        match self {
            YamlValue::Sequence(items) | YamlValue::MultiDoc(items) => items.get(index),
            _ => None,
        }
    }
}

impl From<&str> for YamlValue {
    fn from(s: &str) -> Self {
        YamlValue::String(s.to_string())
    }
}

impl From<String> for YamlValue {
    fn from(s: String) -> Self {
        YamlValue::String(s)
    }
}

impl From<i64> for YamlValue {
    fn from(i: i64) -> Self {
        YamlValue::Number(YamlNumber::Integer(i))
    }
}

impl From<f64> for YamlValue {
    fn from(f: f64) -> Self {
        YamlValue::Number(YamlNumber::Float(f))
    }
}

impl From<bool> for YamlValue {
    fn from(b: bool) -> Self {
        YamlValue::Boolean(b)
    }
}

/// Compact flow-style rendering, e.g. `{name: Alice, tags: [a, b]}`.
impl fmt::Display for YamlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlValue::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            YamlValue::Sequence(items) | YamlValue::MultiDoc(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            YamlValue::String(s) => f.write_str(s),
            YamlValue::Number(n) => write!(f, "{}", n),
            YamlValue::Boolean(b) => write!(f, "{}", b),
            YamlValue::Null => f.write_str("null"),
            YamlValue::Alias(name) => write!(f, "*{}", name),
        }
    }
}

impl Serialize for YamlValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            YamlValue::Mapping(entries) => {
                // Keys go out as their path text so JSON output stays valid
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(&key.to_string(), value)?;
                }
                map.end()
            }
            YamlValue::Sequence(items) | YamlValue::MultiDoc(items) => serializer.collect_seq(items),
            YamlValue::String(s) => serializer.serialize_str(s),
            YamlValue::Number(YamlNumber::Integer(i)) => serializer.serialize_i64(*i),
            YamlValue::Number(YamlNumber::Float(fl)) => serializer.serialize_f64(*fl),
            YamlValue::Boolean(b) => serializer.serialize_bool(*b),
            YamlValue::Null => serializer.serialize_unit(),
            YamlValue::Alias(name) => Err(S::Error::custom(format!(
                "cannot serialize unresolved alias '*{}'",
                name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_display_matches_path_text() {
        assert_eq!(YamlKey::from("city").to_string(), "city");
        assert_eq!(YamlKey::Integer(1).to_string(), "1");
        assert_eq!(YamlKey::Integer(-7).to_string(), "-7");
        assert_eq!(YamlKey::Float(1.0).to_string(), "1.0");
        assert_eq!(YamlKey::Float(2.5).to_string(), "2.5");
        assert_eq!(YamlKey::Boolean(true).to_string(), "true");
    }

    #[test]
    fn test_key_equality_is_variant_exact() {
        assert_eq!(YamlKey::Integer(1), YamlKey::Integer(1));
        assert_ne!(YamlKey::Integer(1), YamlKey::from("1"));
        assert_ne!(YamlKey::Integer(1), YamlKey::Float(1.0));
        assert_ne!(YamlKey::Boolean(true), YamlKey::Integer(1));
    }

    #[test]
    fn test_float_keys_are_hashable() {
        let mut keys = HashSet::new();
        keys.insert(YamlKey::Float(1.5));
        keys.insert(YamlKey::Float(1.5));
        keys.insert(YamlKey::Float(f64::NAN));
        keys.insert(YamlKey::Float(f64::NAN));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_number_equality_is_type_exact() {
        assert_eq!(YamlNumber::Integer(10), YamlNumber::Integer(10));
        assert_ne!(YamlNumber::Integer(10), YamlNumber::Float(10.0));
        assert_eq!(YamlNumber::Float(0.5), YamlNumber::Float(0.5));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(YamlNumber::Integer(42).to_string(), "42");
        assert_eq!(YamlNumber::Float(42.5).to_string(), "42.5");
        assert_eq!(YamlNumber::Float(42.0).to_string(), "42.0");
    }

    #[test]
    fn test_key_from_scalar_value() {
        assert_eq!(
            YamlKey::try_from(&YamlValue::from(3_i64)).unwrap(),
            YamlKey::Integer(3)
        );
        assert_eq!(
            YamlKey::try_from(&YamlValue::from("x")).unwrap(),
            YamlKey::from("x")
        );
        assert!(YamlKey::try_from(&YamlValue::Null).is_err());
        assert!(YamlKey::try_from(&YamlValue::Sequence(vec![])).is_err());
    }

    #[test]
    fn test_mapping_equality_ignores_order_and_hash_agrees() {
        let mut a = IndexMap::new();
        a.insert(YamlKey::from("x"), YamlValue::from(1_i64));
        a.insert(YamlKey::from("y"), YamlValue::from(2_i64));
        let mut b = IndexMap::new();
        b.insert(YamlKey::from("y"), YamlValue::from(2_i64));
        b.insert(YamlKey::from("x"), YamlValue::from(1_i64));

        let a = YamlValue::Mapping(a);
        let b = YamlValue::Mapping(b);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_display_flow_style() {
        let mut entries = IndexMap::new();
        entries.insert(YamlKey::from("name"), YamlValue::from("Alice"));
        entries.insert(
            YamlKey::Integer(1),
            YamlValue::Sequence(vec![YamlValue::from(true), YamlValue::Null]),
        );
        let value = YamlValue::Mapping(entries);
        assert_eq!(value.to_string(), "{name: Alice, 1: [true, null]}");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(YamlValue::Null.kind(), "null");
        assert_eq!(YamlValue::Alias("a".to_string()).kind(), "alias");
        assert_eq!(YamlValue::MultiDoc(vec![]).kind(), "multi-document");
    }

    #[test]
    fn test_serialize_alias_fails() {
        let value = YamlValue::Sequence(vec![YamlValue::Alias("base".to_string())]);
        assert!(serde_json::to_string(&value).is_err());
    }

    #[test]
    fn test_serialize_non_text_keys_as_strings() {
        let mut entries = IndexMap::new();
        entries.insert(YamlKey::Integer(1), YamlValue::from("number_here"));
        entries.insert(YamlKey::Boolean(false), YamlValue::from(2.5));
        let json = serde_json::to_string(&YamlValue::Mapping(entries)).unwrap();
        assert_eq!(json, r#"{"1":"number_here","false":2.5}"#);
    }
}
