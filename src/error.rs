//! Error types for grid construction and word search.

use std::fmt;

use thiserror::Error;

use crate::grid::Orientation;

/// Which caller-supplied sequence was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// The grid rows handed to [`GridIndex`](crate::GridIndex) construction.
    Matrix,
    /// The query words handed to a search.
    Wordstream,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Matrix => f.write_str("Matrix"),
            InputKind::Wordstream => f.write_str("Wordstream"),
        }
    }
}

/// Failures raised while building a grid or running a search.
///
/// Every variant is a validation failure reported straight to the caller;
/// nothing is retried or partially returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordFinderError {
    /// The row sequence or query sequence was absent.
    #[error("{0} must be provided")]
    NullInput(InputKind),

    /// The row sequence had no rows, or no row had any characters.
    #[error("Matrix can't be empty")]
    EmptyMatrix,

    /// More rows than the grid can hold.
    #[error("Matrix rows can't be more than {max} (got {rows})")]
    TooManyRows { rows: usize, max: usize },

    /// A trimmed row differs in length from the first trimmed row.
    #[error(
        "All matrix rows must have the same length: row {row} has {found} characters, expected {expected}"
    )]
    InconsistentRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Rows are wider than the grid can hold.
    #[error("Matrix columns can't be more than {max} (got {columns})")]
    TooManyColumns { columns: usize, max: usize },

    /// The query sequence had no elements.
    #[error("Wordstream can't be empty")]
    EmptyQuery,

    /// A lookup addressed a cell outside the grid.
    #[error("Position ({row}, {col}) is outside the grid for {orientation} lookup")]
    PositionOutOfBounds {
        row: usize,
        col: usize,
        orientation: Orientation,
    },
}
