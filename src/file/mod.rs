//! File I/O operations for documents.
//!
//! This module provides functionality to load YAML and JSON documents from
//! disk or stdin, including gzip-compressed input.

pub mod loader;
