//! # Grid Module
//!
//! Validated, lower-cased character grid and the orientation-aware lookup the
//! search scans through.
//!
//! - [`index`] - [`GridIndex`] construction, validation and cell lookup
//! - [`orientation`] - [`Orientation`] of a scan

pub mod index;
pub mod orientation;

pub use index::GridIndex;
pub use orientation::Orientation;

/// Simple lower-case mapping applied to both grid cells and query words.
///
/// Takes the first char of the full lower-case mapping so every cell stays a
/// single character.
pub(crate) fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
