//! Document loading functionality.
//!
//! This module provides functions to load YAML, JSON and JSON Lines
//! documents from files or stdin, decompressing gzip input on the way, and
//! parsing them into `YamlTree` structures ready to be searched.

use crate::document::node::YamlValue;
use crate::document::parser::{parse_json, parse_value, parse_yaml};
use crate::document::tree::YamlTree;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// The text formats a document can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    /// One JSON value per line
    JsonLines,
}

/// Loads and parses a document from the filesystem.
///
/// The format comes from the file name: `.json` is JSON, `.jsonl` and
/// `.ndjson` are JSON Lines, and everything else is read as YAML. A trailing
/// `.gz` is decompressed first and ignored when picking the format.
///
/// # Examples
///
/// ```no_run
/// use pathquill::file::loader::load_file;
///
/// let tree = load_file("users.json.gz").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The file contents are not valid for the detected format
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<YamlTree> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    // Read content (decompress if needed)
    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let format = detect_format(path_ref);
    debug!(
        "Loading {} as {:?} ({} bytes)",
        path_ref.display(),
        format,
        content.len()
    );
    parse_content(&content, format)
        .with_context(|| format!("Failed to load {}", path_ref.display()))
}

/// Parses already-read text in the given format.
pub fn parse_content(content: &str, format: DocumentFormat) -> Result<YamlTree> {
    match format {
        DocumentFormat::Yaml => parse_yaml(content),
        DocumentFormat::Json => parse_json(content),
        DocumentFormat::JsonLines => parse_jsonl_content(content),
    }
}

/// Helper function to parse JSONL content (newline-delimited JSON).
///
/// Each line must be a valid JSON value. Blank lines are skipped. The lines
/// are collected under a `MultiDoc` root, so line `n` is addressed `[n]`
/// (counting non-blank lines from zero).
pub fn parse_jsonl_content(content: &str) -> Result<YamlTree> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(parse_value(&value));
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(YamlTree::with_source(
        YamlValue::MultiDoc(lines),
        Some(content.to_string()),
    ))
}

/// Loads and parses a document from standard input.
///
/// Gzip input is recognised by its magic bytes. The content is tried as
/// JSON first, then as JSON Lines, and finally as YAML, which also covers
/// multi-document streams.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is not valid JSON, JSON Lines or YAML
pub fn load_from_stdin() -> Result<YamlTree> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_from_bytes(buffer)
}

/// Decodes raw bytes the way `load_from_stdin` does.
pub fn load_from_bytes(bytes: Vec<u8>) -> Result<YamlTree> {
    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&bytes)?
    } else {
        String::from_utf8(bytes).context("Invalid UTF-8 in input")?
    };

    if let Ok(tree) = parse_json(&content) {
        debug!("Input parsed as JSON");
        return Ok(tree);
    }

    if let Ok(tree) = parse_jsonl_content(&content) {
        debug!("Input parsed as JSON Lines");
        return Ok(tree);
    }

    parse_yaml(&content)
        .context("Failed to parse input: it is neither valid JSON, JSON Lines nor YAML")
}

/// Determines the document format from a file name.
///
/// Examples:
/// - `data.jsonl` → JsonLines
/// - `data.json.gz` → Json
/// - `config.yml` → Yaml
pub fn detect_format<P: AsRef<Path>>(path: P) -> DocumentFormat {
    let path_str = path.as_ref().to_string_lossy().to_lowercase();

    // Remove .gz suffix if present
    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    if base.ends_with(".jsonl") || base.ends_with(".ndjson") {
        DocumentFormat::JsonLines
    } else if base.ends_with(".json") {
        DocumentFormat::Json
    } else {
        DocumentFormat::Yaml
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
