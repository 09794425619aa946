//! Loading grid rows and query words from text sources for the command line.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Split text into grid rows, one per line, dropping blank lines.
///
/// Rows are passed through untrimmed; [`GridIndex`](crate::GridIndex)
/// trims them itself.
pub fn parse_grid_rows(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into whitespace-separated query words.
pub fn parse_query_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Read grid rows from a file
pub fn read_grid_rows(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid file: {}", path.display()))?;
    let rows = parse_grid_rows(&text);
    tracing::debug!("Read {} grid rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read query words from a file
pub fn read_query_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read words file: {}", path.display()))?;
    let words = parse_query_words(&text);
    tracing::debug!("Read {} query words from {}", words.len(), path.display());
    Ok(words)
}

/// Read query words from any reader, typically stdin
pub fn read_query_words_from(mut reader: impl Read) -> Result<Vec<String>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read query words")?;
    Ok(parse_query_words(&text))
}
