//! Output formatting module
//!
//! Renders search matches as plain text, JSON, or YAML. Formatting is kept
//! apart from the search engine, which never prints.

use crate::document::node::YamlValue;
use crate::search::Match;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `path = value` line per match
    #[default]
    Plain,
    /// JSON array of `{path, value}` objects
    Json,
    /// YAML list of `{path, value}` mappings
    Yaml,
}

/// Format search matches in the specified format
pub fn format_matches(matches: &[Match<'_>], format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Plain => Ok(format_plain(matches)),
        OutputFormat::Json => serde_json::to_string_pretty(matches).map_err(FormatError::from),
        OutputFormat::Yaml => serde_yaml::to_string(matches).map_err(FormatError::from),
    }
}

/// Format a single node, as printed for a path lookup
pub fn format_value(value: &YamlValue, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Plain => Ok(value.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(FormatError::from),
        OutputFormat::Yaml => serde_yaml::to_string(value).map_err(FormatError::from),
    }
}

fn format_plain(matches: &[Match<'_>]) -> String {
    let mut output = String::new();
    for m in matches {
        // The document root has an empty path
        let path = if m.path.is_empty() { "$" } else { m.path.as_str() };
        output.push_str(&format!("{} = {}\n", path, m.value));
    }
    output
}
