//! Size bound on the alignment table.
//!
//! Every call allocates a `(len1 + 1) x (len2 + 1)` table, so a formula copied
//! down a few thousand rows with long inputs can eat memory quickly. The limit
//! is checked before anything is allocated.

use serde::Deserialize;
use tracing::warn;

use crate::error::{AlignError, Result};

pub const DEFAULT_MAX_TABLE_CELLS: usize = 4_000_000;

/// Operational bounds for a single alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlignLimits {
    /// Maximum number of cells in the length table, `(len1 + 1) * (len2 + 1)`.
    pub max_table_cells: usize,
}

impl Default for AlignLimits {
    fn default() -> Self {
        AlignLimits {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl AlignLimits {
    pub fn new(max_table_cells: usize) -> Self {
        AlignLimits { max_table_cells }
    }

    /// Fail fast if a table for inputs of these lengths would exceed the limit.
    pub fn check(&self, len1: usize, len2: usize) -> Result<()> {
        let cells = (len1 + 1).checked_mul(len2 + 1);
        match cells {
            Some(cells) if cells <= self.max_table_cells => Ok(()),
            _ => {
                warn!(
                    len1,
                    len2,
                    max_cells = self.max_table_cells,
                    "refusing to build alignment table"
                );
                Err(AlignError::TableTooLarge {
                    len1,
                    len2,
                    max_cells: self.max_table_cells,
                })
            }
        }
    }
}
