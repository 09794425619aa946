//! # Search Configuration Module
//!
//! Limits on grid size and result count.

/// Maximum number of rows a grid may have
pub const MAX_GRID_ROWS: usize = 64;

/// Maximum number of columns a grid may have
pub const MAX_GRID_COLUMNS: usize = 64;

/// Default and maximum number of words a search returns
pub const DEFAULT_MAX_RESULTS: usize = 10;
