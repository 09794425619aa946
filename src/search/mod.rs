//! # Search Module
//!
//! Counts how often each query word runs along a grid row or column and ranks
//! the words by frequency.
//!
//! ## Key Components
//!
//! - [`engine`] - [`WordSearchEngine`], occurrence counting and ranking
//! - [`query`] - [`QueryWord`] inputs and their normalization
//! - [`outputs`] - serializable result types
//! - [`config`] - grid and result limits

pub mod config;
pub mod engine;
pub mod outputs;
pub mod query;

pub use engine::{SearchOptions, WordSearchEngine};
pub use outputs::WordCount;
pub use query::QueryWord;
