//! A single non-zero cell of a sparse matrix

use std::cmp::Ordering;
use std::fmt;

/// A non-zero matrix cell stored as a `(row, col, value)` triple
///
/// Entries compare by coordinate only. Two entries at the same `(row, col)`
/// are equal under [`Entry::cmp_coord`] regardless of their values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<T> {
    /// Row index
    pub row: usize,

    /// Column index
    pub col: usize,

    /// Stored value (never zero inside a matrix)
    pub value: T,
}

impl<T> Entry<T> {
    /// Creates an entry
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Returns the `(row, col)` coordinate used as the ordering key
    #[inline]
    pub fn coord(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Lexicographic comparison of coordinates
    #[inline]
    pub fn cmp_coord(&self, other: &Self) -> Ordering {
        self.coord().cmp(&other.coord())
    }
}

impl<T> From<(usize, usize, T)> for Entry<T> {
    fn from((row, col, value): (usize, usize, T)) -> Self {
        Self { row, col, value }
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}
