//! Output types for search results
//!
//! These types are what the command line prints with `--json`. They can be
//! deserialized again in tests for type-safe validation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A normalized word and how often it occurs in the grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct WordCount {
    /// Lower-cased word
    pub word: String,
    /// Horizontal plus vertical occurrences
    pub occurrences: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, occurrences: usize) -> Self {
        Self {
            word: word.into(),
            occurrences,
        }
    }
}

/// Output from a ranked search
#[derive(Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct FindOutput {
    pub results: Vec<WordCount>,
    pub total_results: usize,
    pub grid_rows: usize,
    pub grid_columns: usize,
}

impl FindOutput {
    pub fn new(results: Vec<WordCount>, grid_rows: usize, grid_columns: usize) -> Self {
        Self {
            total_results: results.len(),
            results,
            grid_rows,
            grid_columns,
        }
    }

    /// Convert to a pretty JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response"}"#.to_string())
    }

    /// Check if there are any results
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// The ranked words without their counts
    pub fn words(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.word.as_str()).collect()
    }
}

/// Error output for a failed search
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FindErrorOutput {
    pub error: String,
}

impl FindErrorOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize error"}"#.to_string())
    }
}
