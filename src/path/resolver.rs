//! Resolves match path text against a document tree.

use super::error::PathError;
use crate::document::node::YamlValue;
use std::collections::HashSet;

/// Walks a match path against a tree.
///
/// Key segments are matched against the rendered text of the mapping keys
/// actually present, so `1` finds an integer key `1` as readily as a text
/// key `"1"`. Keys may themselves contain `.` or `[`, so a segment can have
/// several readings: with keys `a` and `a.b`, the path `a.b.c` may mean
/// `"a.b"` then `c`, or `a`, `b`, `c`. Readings are tried longest key first,
/// then in document order, and an index reading after the key readings; a
/// reading that dead-ends falls back to the next one.
pub struct Resolver<'a> {
    root: &'a YamlValue,
    input: String,
}

/// A node reached after consuming the path up to `position`.
#[derive(Clone, Copy)]
struct Step<'a> {
    node: &'a YamlValue,
    position: usize,
    /// No segment consumed yet, so a key needs no leading `.`
    at_start: bool,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver for `path` over `root`.
    pub fn new(root: &'a YamlValue, path: &str) -> Self {
        Self {
            root,
            input: path.to_string(),
        }
    }

    /// Resolves the whole path.
    ///
    /// Returns `Ok(None)` when the path is well formed but leads nowhere,
    /// and an error when no reading of the path text is well formed.
    pub fn resolve(self) -> Result<Option<&'a YamlValue>, PathError> {
        let mut stack = vec![Step {
            node: self.root,
            position: 0,
            at_start: true,
        }];
        let mut seen = HashSet::new();
        let mut first_error = None;

        while let Some(step) = stack.pop() {
            if step.position == self.input.len() {
                return Ok(Some(step.node));
            }
            if !seen.insert((step.node as *const YamlValue, step.position, step.at_start)) {
                continue;
            }
            if let Err(e) = self.expand(step, &mut stack) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }

    /// Pushes every reading of the segment at `step`, best reading last.
    fn expand(&self, step: Step<'a>, stack: &mut Vec<Step<'a>>) -> Result<(), PathError> {
        let rest = &self.input[step.position..];

        let key_start = if step.at_start {
            Some(step.position)
        } else if rest.starts_with('.') {
            Some(step.position + 1)
        } else {
            None
        };

        let mut index_error = None;
        if rest.starts_with('[') {
            match self.parse_index(step.position) {
                Ok((index, end)) => {
                    if let Some(node) = step.node.get_index(index) {
                        stack.push(Step {
                            node,
                            position: end,
                            at_start: false,
                        });
                    }
                }
                Err(e) => index_error = Some(e),
            }
        }

        if let Some(start) = key_start {
            let mut fits = self.fitting_keys(step.node, start);
            // Popped in reverse: longest first, ties in document order
            fits.reverse();
            fits.sort_by_key(|(len, _)| *len);
            for (len, node) in fits {
                stack.push(Step {
                    node,
                    position: start + len,
                    at_start: false,
                });
            }
        }

        match index_error {
            Some(e) => Err(e),
            None if key_start.is_none() && !rest.starts_with('[') => {
                Err(PathError::UnexpectedToken {
                    position: step.position,
                    found: rest.chars().next().map(String::from).unwrap_or_default(),
                    expected: "'.' or '['".to_string(),
                })
            }
            None => Ok(()),
        }
    }

    /// Parses `[digits]` starting at `position`, returning the index and the
    /// position just past `]`.
    fn parse_index(&self, position: usize) -> Result<(usize, usize), PathError> {
        let start = position + 1;
        let Some(len) = self.input[start..].find(']') else {
            return Err(PathError::UnexpectedEnd {
                expected: "']'".to_string(),
            });
        };

        let text = &self.input[start..start + len];
        let invalid = || PathError::InvalidIndex {
            position: start,
            text: text.to_string(),
        };
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let index = text.parse().map_err(|_| invalid())?;

        Ok((index, start + len + 1))
    }

    /// Keys of `node` whose text fits at `start` and ends at a segment
    /// boundary, in document order, with their text lengths.
    fn fitting_keys(&self, node: &'a YamlValue, start: usize) -> Vec<(usize, &'a YamlValue)> {
        let YamlValue::Mapping(entries) = node else {
            return Vec::new();
        };

        let rest = &self.input[start..];
        entries
            .iter()
            .filter_map(|(key, value)| {
                let text = key.to_string();
                let tail = rest.strip_prefix(text.as_str())?;
                matches!(tail.chars().next(), None | Some('.') | Some('['))
                    .then_some((text.len(), value))
            })
            .collect()
    }
}

/// Resolves `path` against `root`.
///
/// # Example
///
/// ```
/// use pathquill::document::parser::parse_yaml;
/// use pathquill::path::resolve;
///
/// let tree = parse_yaml("user:\n  1: number_here\n  tags: [a, b]\n").unwrap();
/// let root = tree.root();
///
/// assert_eq!(resolve(root, "user.1").unwrap().and_then(|v| v.as_str()), Some("number_here"));
/// assert_eq!(resolve(root, "user.tags[1]").unwrap().and_then(|v| v.as_str()), Some("b"));
/// assert!(resolve(root, "user.missing").unwrap().is_none());
/// assert!(resolve(root, "user.tags[x]").is_err());
/// ```
pub fn resolve<'a>(root: &'a YamlValue, path: &str) -> Result<Option<&'a YamlValue>, PathError> {
    Resolver::new(root, path).resolve()
}
