//! # word-finder
//!
//! Counts how often candidate words appear in a character grid of at most
//! 64 x 64 cells, reading rows left-to-right and columns top-to-bottom, and
//! reports the most frequent ones.
//!
//! ```
//! use word_finder::WordSearchEngine;
//!
//! let engine = WordSearchEngine::from_rows(["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"])?;
//! let found = engine.find(["cold", "wind", "snow", "chill"])?;
//! assert_eq!(found, vec!["cold", "wind", "chill"]);
//! # Ok::<(), word_finder::WordFinderError>(())
//! ```

pub mod error;
pub mod grid;
pub mod input;
pub mod search;

pub use error::{InputKind, WordFinderError};
pub use grid::{GridIndex, Orientation};
pub use search::{QueryWord, SearchOptions, WordCount, WordSearchEngine};
