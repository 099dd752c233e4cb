//! Building match paths one segment at a time.

use crate::document::node::YamlKey;
use std::fmt::Write;

/// Path of the entry `key` inside the mapping at `parent`.
///
/// ```
/// use pathquill::document::node::YamlKey;
/// use pathquill::path::child_key;
///
/// assert_eq!(child_key("", &YamlKey::from("user")), "user");
/// assert_eq!(child_key("user", &YamlKey::Integer(1)), "user.1");
/// ```
pub fn child_key(parent: &str, key: &YamlKey) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        let mut path = String::with_capacity(parent.len() + 8);
        path.push_str(parent);
        path.push('.');
        // Writing into a String cannot fail
        let _ = write!(path, "{}", key);
        path
    }
}

/// Path of item `index` inside the sequence at `parent`.
///
/// ```
/// use pathquill::path::child_index;
///
/// assert_eq!(child_index("", 0), "[0]");
/// assert_eq!(child_index("a.c", 1), "a.c[1]");
/// ```
pub fn child_index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
