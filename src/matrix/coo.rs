//! Coordinate-ordered sparse matrix (the entry store)

use std::fmt;

use num_traits::Num;

use crate::error::{MatrixError, Result};
use crate::matrix::Entry;
use crate::scalar::Scalar;

/// A sparse matrix stored as an ordered list of non-zero entries
///
/// The store keeps the following invariants at all times:
/// - every entry lies inside `rows × cols`
/// - entries are strictly ascending by `(row, col)`, so coordinates are unique
/// - no stored value is zero
///
/// The arithmetic routines in [`crate::ops`] rely on the ordering to run as
/// linear merges. No dense representation is ever built.
#[derive(Clone, PartialEq)]
pub struct SparseMatrix<T> {
    rows: usize,
    cols: usize,
    entries: Vec<Entry<T>>,
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix with the given dimensions
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            entries: Vec::new(),
        })
    }

    /// Creates an `n × n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        let mut matrix = Self::new(n, n)?;
        matrix.entries = (0..n).map(|i| Entry::new(i, i, T::one())).collect();
        Ok(matrix)
    }

    /// Builds a matrix from triplets given in any order
    ///
    /// Zero values are skipped, the remaining entries are sorted by coordinate.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::InvalidDimension`] for a zero dimension
    /// - [`MatrixError::OutOfBounds`] if a triplet lies outside the extent
    /// - [`MatrixError::DuplicateEntry`] if two non-zero triplets share a coordinate
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols)?;

        let mut entries = Vec::new();
        for (row, col, value) in triplets {
            if value.is_zero() {
                continue;
            }
            matrix.check_bounds(row, col)?;
            entries.push(Entry::new(row, col, value));
        }

        entries.sort_by(|a, b| a.cmp_coord(b));

        if let Some(pair) = entries.windows(2).find(|w| w[0].coord() == w[1].coord()) {
            return Err(MatrixError::DuplicateEntry {
                row: pair[1].row,
                col: pair[1].col,
            });
        }

        matrix.entries = entries;
        Ok(matrix)
    }

    /// Wraps an entry list that already satisfies the store invariants
    ///
    /// Used by the arithmetic routines, whose merges emit ordered non-zero
    /// entries by construction.
    pub(crate) fn from_sorted_entries(rows: usize, cols: usize, entries: Vec<Entry<T>>) -> Self {
        debug_assert!(entries
            .windows(2)
            .all(|w| w[0].coord() < w[1].coord()));
        debug_assert!(entries
            .iter()
            .all(|e| e.row < rows && e.col < cols && !e.value.is_zero()));

        Self {
            rows,
            cols,
            entries,
        }
    }

    /// Appends an entry after the last stored coordinate
    ///
    /// Inserting a zero value is a no-op.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::OutOfBounds`] if the coordinate is outside the matrix
    /// - [`MatrixError::Unordered`] if the coordinate does not come strictly
    ///   after the last stored one (this includes duplicates)
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if value.is_zero() {
            return Ok(());
        }
        self.check_bounds(row, col)?;

        if let Some(last) = self.entries.last() {
            if (row, col) <= last.coord() {
                return Err(MatrixError::Unordered {
                    row,
                    col,
                    last_row: last.row,
                    last_col: last.col,
                });
            }
        }

        self.entries.push(Entry::new(row, col, value));
        Ok(())
    }

    /// Writes a value at its sorted position
    ///
    /// Overwrites an existing entry at the same coordinate; a zero value
    /// removes it.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;

        match self.position(row, col) {
            Ok(idx) if value.is_zero() => {
                self.entries.remove(idx);
            }
            Ok(idx) => self.entries[idx].value = value,
            Err(_) if value.is_zero() => {}
            Err(idx) => self.entries.insert(idx, Entry::new(row, col, value)),
        }
        Ok(())
    }

    /// Returns the value at `(row, col)`, zero when no entry is stored
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;

        Ok(self
            .position(row, col)
            .map(|idx| self.entries[idx].value)
            .unwrap_or_else(|_| T::zero()))
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn position(&self, row: usize, col: usize) -> std::result::Result<usize, usize> {
        self.entries.binary_search_by(|e| e.coord().cmp(&(row, col)))
    }
}

impl<T> SparseMatrix<T> {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored entries in ascending coordinate order
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Iterates over the stored entries in ascending coordinate order
    ///
    /// The iterator borrows the matrix; calling `iter` again restarts from the
    /// first entry.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }
}

impl<T: Scalar> SparseMatrix<T> {
    /// Returns a new matrix with every value's sign flipped
    ///
    /// # Errors
    ///
    /// [`MatrixError::Overflow`] if a value has no negation in `T`
    /// (e.g. `i64::MIN`).
    pub fn negate(&self) -> Result<Self> {
        let entries = self
            .entries
            .iter()
            .map(|e| {
                e.value
                    .neg_checked()
                    .map(|v| Entry::new(e.row, e.col, v))
                    .ok_or(MatrixError::Overflow {
                        op: "negate",
                        row: e.row,
                        col: e.col,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            entries,
        })
    }
}

impl<'a, T> IntoIterator for &'a SparseMatrix<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Renders entries as `(row, col, value)`, one per line, in stored order
impl<T: fmt::Display> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.rows, self.cols)?;
        writeln!(f, "  nnz: {}", self.entries.len())?;

        // Print a sample of the entries
        let max_entries = 8.min(self.entries.len());
        for e in &self.entries[..max_entries] {
            writeln!(f, "    ({}, {}, {:?})", e.row, e.col, e.value)?;
        }
        if self.entries.len() > max_entries {
            writeln!(f, "    ... ({} more)", self.entries.len() - max_entries)?;
        }

        write!(f, "}}")
    }
}
