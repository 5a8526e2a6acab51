//! String alignment.
//!
//! Powers the `STRING_COMMON` and `STRING_DIFF` worksheet functions:
//!
//! - [`AlignTable`] - LCS length table for two character sequences
//! - [`backtrack`] - Recover one LCS as an ascending list of [`Match`]es
//! - [`extract_runs`] - Merge lockstep matches into maximal [`Run`]s
//! - [`Alignment`] - Runs over the first input, plus the gaps between them
//! - [`common_substrings`], [`differing_substrings`] - The two filtered views
//! - [`AlignLimits`] - Upper bound on table size, checked before allocating
//!
//! Positions and lengths are counted in `char`s, not bytes.

mod backtrack;
mod limits;
mod runs;
mod substrings;
mod table;

pub use backtrack::{Match, backtrack};
pub use limits::{AlignLimits, DEFAULT_MAX_TABLE_CELLS};
pub use runs::{Run, extract_runs};
pub use substrings::{
    Alignment, Segment, SegmentKind, align, common_substrings, differing_substrings,
};
pub use table::AlignTable;
