use pathquill::document::node::{YamlKey, YamlNumber, YamlValue};
use pathquill::document::parser::{parse_json, parse_scalar, parse_yaml};
use pathquill::document::tree::YamlTree;

#[test]
fn test_parse_simple_yaml() {
    let yaml = r#"
name: Test
count: 42
enabled: true
"#;

    let tree = parse_yaml(yaml).expect("Failed to parse YAML");

    match tree.root() {
        YamlValue::Mapping(obj) => {
            assert_eq!(obj.len(), 3);
            assert_eq!(obj.get(&YamlKey::from("name")), Some(&YamlValue::from("Test")));
            assert_eq!(
                obj.get(&YamlKey::from("count")),
                Some(&YamlValue::Number(YamlNumber::Integer(42)))
            );
            assert_eq!(obj.get(&YamlKey::from("enabled")), Some(&YamlValue::Boolean(true)));
        }
        other => panic!("Root should be mapping, got {:?}", other),
    }
}

#[test]
fn test_parse_array() {
    let yaml = r#"
- Alice
- Bob
- Carol
"#;

    let tree = parse_yaml(yaml).unwrap();
    assert_eq!(
        tree.root(),
        &YamlValue::Sequence(vec!["Alice".into(), "Bob".into(), "Carol".into()])
    );
}

#[test]
fn test_parse_single_document_is_not_wrapped() {
    let tree = parse_yaml("key: value").unwrap();
    assert!(tree.root().is_mapping());
}

#[test]
fn test_parse_multi_document() {
    let yaml = r#"---
name: first
---
name: second
---
name: third
"#;

    let tree = parse_yaml(yaml).unwrap();
    match tree.root() {
        YamlValue::MultiDoc(docs) => {
            assert_eq!(docs.len(), 3);
            assert_eq!(docs[2].get(&YamlKey::from("name")), Some(&YamlValue::from("third")));
        }
        other => panic!("Expected MultiDoc, got {:?}", other),
    }
}

#[test]
fn test_yaml_and_json_build_the_same_tree() {
    let from_yaml = parse_yaml("a: [1, 2.5, x, null, false]\n").unwrap();
    let from_json = parse_json(r#"{"a": [1, 2.5, "x", null, false]}"#).unwrap();
    assert_eq!(from_yaml.root(), from_json.root());
}

#[test]
fn test_tree_resolve() {
    let tree = parse_yaml("a: {b: [x, y]}\n").unwrap();
    assert_eq!(tree.resolve("a.b[1]").unwrap(), Some(&YamlValue::from("y")));
    assert_eq!(tree.resolve("a.c").unwrap(), None);
    assert!(tree.resolve("a.b[").is_err());
}

#[test]
fn test_tree_without_source() {
    let tree = YamlTree::new(YamlValue::from("Boston"));
    assert!(tree.original_source().is_none());
    assert_eq!(tree.resolve("").unwrap(), Some(&YamlValue::from("Boston")));
}

#[test]
fn test_scalar_literals_pick_their_type() {
    assert_eq!(parse_scalar("10").unwrap(), YamlValue::from(10_i64));
    assert_eq!(parse_scalar("10.0").unwrap(), YamlValue::from(10.0));
    assert_eq!(parse_scalar("false").unwrap(), YamlValue::from(false));
    assert_eq!(parse_scalar("~").unwrap(), YamlValue::Null);
    assert_eq!(parse_scalar("Mastercard").unwrap(), YamlValue::from("Mastercard"));
    assert_eq!(parse_scalar("\"true\"").unwrap(), YamlValue::from("true"));
}
