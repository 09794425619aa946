use std::fmt;

use crate::error::{InputKind, WordFinderError};
use crate::grid::{Orientation, fold_char};
use crate::search::config::{MAX_GRID_COLUMNS, MAX_GRID_ROWS};

/// Immutable, lower-cased character grid.
///
/// Cells live in one contiguous buffer addressed by `row * columns + col`.
/// Dimensions are fixed at construction; nothing mutates the grid afterwards,
/// so it can be shared freely between searches and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridIndex {
    rows: usize,
    columns: usize,
    cells: Vec<char>,
}

impl GridIndex {
    /// Build a grid from row strings.
    ///
    /// Rows are trimmed before their lengths are compared, and every character
    /// is stored lower-cased. Checks run in a fixed order: empty input, row
    /// count, consistent trimmed length, column count.
    pub fn new<I, S>(rows: I) -> Result<Self, WordFinderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<S> = rows.into_iter().collect();

        if rows.len() > MAX_GRID_ROWS {
            return Err(WordFinderError::TooManyRows {
                rows: rows.len(),
                max: MAX_GRID_ROWS,
            });
        }

        let trimmed: Vec<&str> = rows.iter().map(|row| row.as_ref().trim()).collect();
        let Some(first) = trimmed.first() else {
            return Err(WordFinderError::EmptyMatrix);
        };

        let columns = first.chars().count();
        for (index, row) in trimmed.iter().enumerate().skip(1) {
            let found = row.chars().count();
            if found != columns {
                return Err(WordFinderError::InconsistentRowLength {
                    row: index,
                    expected: columns,
                    found,
                });
            }
        }

        if columns > MAX_GRID_COLUMNS {
            return Err(WordFinderError::TooManyColumns {
                columns,
                max: MAX_GRID_COLUMNS,
            });
        }

        // Every row trimmed down to nothing: there are no cells to search.
        if columns == 0 {
            return Err(WordFinderError::EmptyMatrix);
        }

        let cells: Vec<char> = trimmed
            .iter()
            .flat_map(|row| row.chars())
            .map(fold_char)
            .collect();

        tracing::debug!("Built {}x{} grid", trimmed.len(), columns);

        Ok(Self {
            rows: trimmed.len(),
            columns,
            cells,
        })
    }

    /// Build a grid from rows that may be absent altogether.
    pub fn from_optional<I, S>(rows: Option<I>) -> Result<Self, WordFinderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match rows {
            Some(rows) => Self::new(rows),
            None => Err(WordFinderError::NullInput(InputKind::Matrix)),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells a word can advance through in one lane.
    pub fn scan_length(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.columns,
            Orientation::Vertical => self.rows,
        }
    }

    /// Number of independent lanes a scan starts from.
    pub fn lane_count(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.rows,
            Orientation::Vertical => self.columns,
        }
    }

    /// Look up a cell with the axes read in `orientation`.
    ///
    /// Horizontal reads `[row, col]`; vertical reads `[col, row]`, so one
    /// scanning routine serves both directions.
    pub fn char_at(
        &self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<char, WordFinderError> {
        let (r, c) = match orientation {
            Orientation::Horizontal => (row, col),
            Orientation::Vertical => (col, row),
        };

        if r >= self.rows || c >= self.columns {
            return Err(WordFinderError::PositionOutOfBounds {
                row,
                col,
                orientation,
            });
        }

        Ok(self.cells[r * self.columns + c])
    }

    /// The lower-cased contents of row `index`.
    pub fn row(&self, index: usize) -> Option<String> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.columns;
        Some(self.cells[start..start + self.columns].iter().collect())
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.chunks(self.columns).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
