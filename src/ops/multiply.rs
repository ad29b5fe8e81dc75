//! Sparse matrix multiplication over coordinate-ordered entries
//!
//! A is walked one row at a time. For every entry `A(i, k)` the entries of
//! row `k` of B are found through a [`RowIndex`], and each product
//! `A(i, k) * B(k, j)` is fed to an accumulator keyed by `j`. When row `i`
//! is finished the accumulator emits its summed, column-sorted entries, so
//! the result comes out in ascending `(row, col)` order without a final sort.

use tracing::debug;

use crate::config::EngineConfig;
use crate::constants::MAX_ACCUMULATOR_PREALLOC;
use crate::error::{MatrixError, Result};
use crate::matrix::{RowIndex, SparseMatrix};
use crate::ops::accumulator::create_accumulator;
use crate::scalar::Scalar;

/// Multiplies `a × b` with the default [`EngineConfig`]
///
/// # Errors
///
/// - [`MatrixError::DimensionMismatch`] unless `a.cols() == b.rows()`
/// - [`MatrixError::Overflow`] if a product or a cell's sum is not
///   representable in `T`
///
/// # Examples
///
/// ```
/// use coo_arith::{multiply, SparseMatrix};
///
/// let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (1, 1, 2)]).unwrap();
/// let b = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 3), (0, 1, 4)]).unwrap();
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.to_string(), "(0, 0, 3)\n(0, 1, 4)");
/// ```
pub fn multiply<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>>
where
    T: Scalar,
{
    multiply_with(a, b, &EngineConfig::default())
}

/// Multiplies `a × b` using the accumulator chosen in `config`
///
/// Contributions that land on the same output cell are summed; cells whose
/// sum is zero are not stored. The result has shape `(a.rows(), b.cols())`.
pub fn multiply_with<T>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &EngineConfig,
) -> Result<SparseMatrix<T>>
where
    T: Scalar,
{
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }

    let a_rows = RowIndex::build(a);
    let b_rows = RowIndex::build(b);

    let capacity = b.nnz().min(MAX_ACCUMULATOR_PREALLOC);
    let mut accumulator = create_accumulator::<T>(config.accumulator, capacity);
    let mut entries = Vec::new();
    let mut products = 0usize;

    let overflow = |row: usize, col: usize| MatrixError::Overflow {
        op: "multiply",
        row,
        col,
    };

    for (i, a_row) in a_rows.non_empty_rows(a) {
        for a_entry in a_row {
            for b_entry in b_rows.row(b, a_entry.col) {
                let product = a_entry
                    .value
                    .mul_checked(b_entry.value)
                    .ok_or_else(|| overflow(i, b_entry.col))?;
                accumulator
                    .accumulate(b_entry.col, product)
                    .map_err(|col| overflow(i, col))?;
                products += 1;
            }
        }
        accumulator
            .drain_row(i, &mut entries)
            .map_err(|col| overflow(i, col))?;
    }

    let result = SparseMatrix::from_sorted_entries(a.rows(), b.cols(), entries);
    debug!(
        lhs_nnz = a.nnz(),
        rhs_nnz = b.nnz(),
        products,
        result_nnz = result.nnz(),
        accumulator = ?config.accumulator,
        "multiply"
    );
    Ok(result)
}
