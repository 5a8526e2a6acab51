//! LCS length table.
//!
//! `get(i, j)` is the length of the longest common subsequence of the first
//! `i` characters of `a` and the first `j` characters of `b`. Row 0 and
//! column 0 are zero.

/// Dynamic-programming table of LCS lengths, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl AlignTable {
    /// Fill the table for `a` against `b`.
    ///
    /// Callers are expected to have checked the size against
    /// [`AlignLimits`](super::AlignLimits) first.
    pub fn build(a: &[char], b: &[char]) -> AlignTable {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                let value = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    let up = cells[(i - 1) * cols + j];
                    let left = cells[i * cols + (j - 1)];
                    up.max(left)
                };
                cells[i * cols + j] = value;
            }
        }

        AlignTable { rows, cols, cells }
    }

    /// Number of rows, `len(a) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(b) + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Length of the LCS of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}
