//! Parsing YAML and JSON text into document trees.
//!
//! YAML goes through `yaml-rust2`, which keeps mapping order and accepts
//! integer, float and boolean keys. JSON goes through `serde_json` with key
//! order preserved. Both produce the same `YamlValue` model, so the search
//! engine never needs to know where a tree came from.
//!
//! # Example
//!
//! ```
//! use pathquill::document::parser::parse_yaml;
//! use pathquill::document::node::{YamlKey, YamlValue};
//!
//! let tree = parse_yaml("user:\n  1: number_here\n").unwrap();
//! let user = tree.root().get(&YamlKey::from("user")).unwrap();
//! assert_eq!(user.get(&YamlKey::Integer(1)), Some(&YamlValue::from("number_here")));
//! ```

use super::node::{YamlKey, YamlNumber, YamlValue};
use super::tree::YamlTree;
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde_json::Value as SerdeValue;
use yaml_rust2::{Yaml, YamlLoader};

/// Parses a YAML string into a `YamlTree`.
///
/// An empty stream yields a `Null` root, a single document becomes the
/// root, and several documents are collected under a `MultiDoc` root.
/// Aliases are replaced by copies of their anchored node.
///
/// # Errors
///
/// This function will return an error if:
/// - The input is not valid YAML
/// - A mapping key is null or a collection
pub fn parse_yaml(yaml_str: &str) -> Result<YamlTree> {
    let documents = YamlLoader::load_from_str(yaml_str).context("Failed to parse YAML")?;

    let mut converted = documents
        .iter()
        .map(convert_yaml)
        .collect::<Result<Vec<_>>>()?;

    let root = match converted.len() {
        0 => YamlValue::Null,
        1 => converted.remove(0),
        _ => YamlValue::MultiDoc(converted),
    };

    Ok(YamlTree::with_source(root, Some(yaml_str.to_string())))
}

fn convert_yaml(yaml: &Yaml) -> Result<YamlValue> {
    let value = match yaml {
        Yaml::Hash(hash) => {
            let mut entries = IndexMap::with_capacity(hash.len());
            for (key, value) in hash.iter() {
                entries.insert(convert_key(key)?, convert_yaml(value)?);
            }
            YamlValue::Mapping(entries)
        }
        Yaml::Array(items) => YamlValue::Sequence(
            items
                .iter()
                .map(convert_yaml)
                .collect::<Result<Vec<_>>>()?,
        ),
        Yaml::String(s) => YamlValue::String(s.clone()),
        Yaml::Integer(i) => YamlValue::Number(YamlNumber::Integer(*i)),
        Yaml::Real(text) => YamlValue::Number(YamlNumber::Float(
            yaml.as_f64()
                .with_context(|| format!("Invalid YAML float '{}'", text))?,
        )),
        Yaml::Boolean(b) => YamlValue::Boolean(*b),
        Yaml::Null => YamlValue::Null,
        // The loader substitutes anchors itself; an alias that survives is
        // left for the search engine to reject.
        Yaml::Alias(id) => YamlValue::Alias(id.to_string()),
        Yaml::BadValue => bail!("Invalid YAML value"),
    };
    Ok(value)
}

fn convert_key(key: &Yaml) -> Result<YamlKey> {
    match key {
        Yaml::String(s) => Ok(YamlKey::String(s.clone())),
        Yaml::Integer(i) => Ok(YamlKey::Integer(*i)),
        Yaml::Real(text) => Ok(YamlKey::Float(
            key.as_f64()
                .with_context(|| format!("Invalid YAML float key '{}'", text))?,
        )),
        Yaml::Boolean(b) => Ok(YamlKey::Boolean(*b)),
        Yaml::Null => bail!("Unsupported null mapping key"),
        Yaml::Hash(_) | Yaml::Array(_) => {
            bail!("Unsupported collection mapping key: keys must be text, integer, float or boolean")
        }
        Yaml::Alias(_) | Yaml::BadValue => bail!("Invalid YAML mapping key"),
    }
}

/// Parses a JSON string into a `YamlTree`.
///
/// Object key order is preserved. Integers that fit in `i64` stay integers;
/// every other number becomes a float.
///
/// # Examples
///
/// ```
/// use pathquill::document::parser::parse_json;
///
/// let tree = parse_json(r#"{"b": 1, "a": 2}"#).unwrap();
/// assert!(tree.root().is_mapping());
///
/// assert!(parse_json(r#"{"unclosed": "#).is_err());
/// ```
pub fn parse_json(json_str: &str) -> Result<YamlTree> {
    let serde_value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(YamlTree::with_source(
        parse_value(&serde_value),
        Some(json_str.to_string()),
    ))
}

/// Converts a `serde_json::Value` into a `YamlValue`.
pub fn parse_value(value: &SerdeValue) -> YamlValue {
    match value {
        SerdeValue::Object(map) => YamlValue::Mapping(
            map.iter()
                .map(|(k, v)| (YamlKey::String(k.clone()), parse_value(v)))
                .collect(),
        ),
        SerdeValue::Array(arr) => YamlValue::Sequence(arr.iter().map(parse_value).collect()),
        SerdeValue::String(s) => YamlValue::String(s.clone()),
        SerdeValue::Number(n) => match n.as_i64() {
            Some(i) => YamlValue::Number(YamlNumber::Integer(i)),
            None => YamlValue::Number(YamlNumber::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        SerdeValue::Bool(b) => YamlValue::Boolean(*b),
        SerdeValue::Null => YamlValue::Null,
    }
}

/// Reads a single scalar literal, as typed on a command line.
///
/// YAML scalar rules apply: `1` is an integer, `1.5` a float, `true` a
/// boolean, `null` or `~` null, and anything else text. Blank input is the
/// text itself.
///
/// ```
/// use pathquill::document::parser::parse_scalar;
/// use pathquill::document::node::YamlValue;
///
/// assert_eq!(parse_scalar("10").unwrap(), YamlValue::from(10_i64));
/// assert_eq!(parse_scalar("Boston").unwrap(), YamlValue::from("Boston"));
/// assert!(parse_scalar("[1, 2]").is_err());
/// ```
pub fn parse_scalar(text: &str) -> Result<YamlValue> {
    if text.trim().is_empty() {
        return Ok(YamlValue::String(text.to_string()));
    }

    let value = parse_yaml(text)
        .with_context(|| format!("Invalid literal '{}'", text))?
        .into_root();
    if !value.is_scalar() {
        bail!(
            "'{}' reads as a {}, expected a scalar (use --text to search for it literally)",
            text,
            value.kind()
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_root() {
        let tree = parse_yaml("Boston").unwrap();
        assert_eq!(tree.root(), &YamlValue::from("Boston"));
    }

    #[test]
    fn test_parse_empty_stream_is_null() {
        let tree = parse_yaml("").unwrap();
        assert_eq!(tree.root(), &YamlValue::Null);
    }

    #[test]
    fn test_parse_mixed_key_types() {
        let tree = parse_yaml("1: int\n2.5: float\ntrue: bool\nname: text\n").unwrap();
        let YamlValue::Mapping(entries) = tree.root() else {
            panic!("Expected mapping");
        };
        let keys: Vec<&YamlKey> = entries.keys().collect();
        assert_eq!(
            keys,
            vec![
                &YamlKey::Integer(1),
                &YamlKey::Float(2.5),
                &YamlKey::Boolean(true),
                &YamlKey::from("name"),
            ]
        );
    }

    #[test]
    fn test_quoted_number_key_is_text() {
        let tree = parse_yaml("\"1\": quoted\n").unwrap();
        assert!(tree.root().get(&YamlKey::from("1")).is_some());
        assert!(tree.root().get(&YamlKey::Integer(1)).is_none());
    }

    #[test]
    fn test_null_key_is_rejected() {
        assert!(parse_yaml("~: nothing\n").is_err());
    }

    #[test]
    fn test_collection_key_is_rejected() {
        assert!(parse_yaml("? [a, b]\n: pair\n").is_err());
    }

    #[test]
    fn test_aliases_are_expanded() {
        let tree = parse_yaml("base: &b {x: 1}\ncopy: *b\n").unwrap();
        let root = tree.root();
        assert_eq!(
            root.get(&YamlKey::from("base")),
            root.get(&YamlKey::from("copy"))
        );
    }

    #[test]
    fn test_multiple_documents() {
        let tree = parse_yaml("a: 1\n---\nb: 2\n").unwrap();
        match tree.root() {
            YamlValue::MultiDoc(docs) => assert_eq!(docs.len(), 2),
            other => panic!("Expected MultiDoc, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_floats() {
        let tree = parse_yaml("[1.5, .inf, 10]").unwrap();
        assert_eq!(
            tree.root(),
            &YamlValue::Sequence(vec![
                YamlValue::from(1.5),
                YamlValue::from(f64::INFINITY),
                YamlValue::from(10_i64),
            ])
        );
    }

    #[test]
    fn test_parse_json_preserves_order() {
        let tree = parse_json(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let YamlValue::Mapping(entries) = tree.root() else {
            panic!("Expected mapping");
        };
        let keys: Vec<String> = entries.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_json_numbers() {
        let tree = parse_json("[10, 10.0, 18446744073709551615]").unwrap();
        let items = match tree.root() {
            YamlValue::Sequence(items) => items,
            other => panic!("Expected sequence, got {:?}", other),
        };
        assert_eq!(items[0], YamlValue::from(10_i64));
        assert_eq!(items[1], YamlValue::from(10.0));
        assert!(matches!(items[2], YamlValue::Number(YamlNumber::Float(_))));
    }

    #[test]
    fn test_parse_json_keeps_source() {
        let tree = parse_json("[]").unwrap();
        assert_eq!(tree.original_source(), Some("[]"));
    }

    #[test]
    fn test_parse_scalar_literals() {
        assert_eq!(parse_scalar("1").unwrap(), YamlValue::from(1_i64));
        assert_eq!(parse_scalar("1.5").unwrap(), YamlValue::from(1.5));
        assert_eq!(parse_scalar("true").unwrap(), YamlValue::from(true));
        assert_eq!(parse_scalar("null").unwrap(), YamlValue::Null);
        assert_eq!(parse_scalar("'1'").unwrap(), YamlValue::from("1"));
        assert_eq!(parse_scalar("  ").unwrap(), YamlValue::from("  "));
    }

    #[test]
    fn test_parse_scalar_rejects_collections() {
        assert!(parse_scalar("{a: 1}").is_err());
        assert!(parse_scalar("a: 1").is_err());
    }
}
