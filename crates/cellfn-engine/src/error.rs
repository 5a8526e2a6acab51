//! Error types for the cellfn engine.

use thiserror::Error;

/// Errors that can escape an alignment.
///
/// Degenerate input (empty strings, a threshold below 1) is not an error; it
/// yields an empty result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error(
        "input too large to align: {len1} x {len2} characters exceeds the limit of {max_cells} table cells"
    )]
    TableTooLarge {
        len1: usize,
        len2: usize,
        max_cells: usize,
    },
}

pub type Result<T> = std::result::Result<T, AlignError>;
