//! Recover one LCS match path from a filled [`AlignTable`].

use super::AlignTable;

/// A pair of character positions with `a[i1] == b[i2]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub i1: usize,
    pub i2: usize,
}

impl Match {
    pub fn new(i1: usize, i2: usize) -> Match {
        Match { i1, i2 }
    }
}

/// Walk the table from its bottom-right corner and return the matched pairs
/// in ascending order.
///
/// On a mismatch the walk moves up when `table[i-1][j] >= table[i][j-1]` and
/// left otherwise. When several alignments are optimal this tie-break picks
/// which one is reported, so callers depend on it staying exactly as is.
pub fn backtrack(table: &AlignTable, a: &[char], b: &[char]) -> Vec<Match> {
    debug_assert_eq!(table.rows(), a.len() + 1);
    debug_assert_eq!(table.cols(), b.len() + 1);

    let mut matches = Vec::with_capacity(table.lcs_len());
    let mut i = a.len();
    let mut j = b.len();

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            matches.push(Match::new(i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    matches.reverse();
    matches
}
