//! Row runs over a coordinate-ordered entry list
//!
//! Because entries are sorted by `(row, col)`, all entries of a row form a
//! contiguous run. `RowIndex` records one `(row, start..end)` run per
//! non-empty row, so the multiply kernel can jump straight to row `k` of the
//! right-hand operand instead of scanning every entry. The index grows with
//! the number of entries, never with the row count.

use std::ops::Range;

use crate::matrix::{Entry, SparseMatrix};

/// Runs of entry positions, one per non-empty row, in ascending row order
#[derive(Debug, Clone)]
pub struct RowIndex {
    runs: Vec<(usize, Range<usize>)>,
}

impl RowIndex {
    /// Builds the index with one pass over the entries
    pub fn build<T>(matrix: &SparseMatrix<T>) -> Self {
        let mut runs: Vec<(usize, Range<usize>)> = Vec::new();
        for (pos, entry) in matrix.iter().enumerate() {
            if let Some((row, range)) = runs.last_mut() {
                if *row == entry.row {
                    range.end = pos + 1;
                    continue;
                }
            }
            runs.push((entry.row, pos..pos + 1));
        }

        Self { runs }
    }

    /// Number of rows holding at least one entry
    pub fn n_runs(&self) -> usize {
        self.runs.len()
    }

    /// The range of entry positions belonging to `row`, empty if the row
    /// has no entries
    pub fn range(&self, row: usize) -> Range<usize> {
        match self.runs.binary_search_by_key(&row, |(r, _)| *r) {
            Ok(idx) => self.runs[idx].1.clone(),
            Err(_) => 0..0,
        }
    }

    /// The entries of `row` within `matrix`
    ///
    /// `matrix` must be the matrix this index was built from.
    #[inline]
    pub fn row<'a, T>(&self, matrix: &'a SparseMatrix<T>, row: usize) -> &'a [Entry<T>] {
        &matrix.entries()[self.range(row)]
    }

    /// Iterates over the non-empty rows as `(row, entries)`
    pub fn non_empty_rows<'a, T>(
        &'a self,
        matrix: &'a SparseMatrix<T>,
    ) -> impl Iterator<Item = (usize, &'a [Entry<T>])> + 'a {
        self.runs
            .iter()
            .map(move |(row, range)| (*row, &matrix.entries()[range.clone()]))
    }
}
