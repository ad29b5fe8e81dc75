//! Element-wise addition and subtraction by merging sorted entry lists

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::{Entry, SparseMatrix};
use crate::scalar::Scalar;

/// Adds two matrices of the same shape
///
/// # Errors
///
/// - [`MatrixError::DimensionMismatch`] if the shapes differ
/// - [`MatrixError::Overflow`] if a sum is not representable in `T`
///
/// # Examples
///
/// ```
/// use coo_arith::{add, SparseMatrix};
///
/// let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (1, 1, 2)]).unwrap();
/// let b = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 3), (0, 1, 4)]).unwrap();
/// let c = add(&a, &b).unwrap();
/// assert_eq!(c.to_string(), "(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)");
/// ```
pub fn add<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>>
where
    T: Scalar,
{
    check_same_shape("add", a, b)?;
    let result = merge("add", a, b, Some, Some, T::add_checked)?;
    debug!(
        lhs_nnz = a.nnz(),
        rhs_nnz = b.nnz(),
        result_nnz = result.nnz(),
        "add"
    );
    Ok(result)
}

/// Subtracts `b` from `a`; both must have the same shape
///
/// Entries present only in `b` are emitted negated. Fails like [`add`].
pub fn subtract<T>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>>
where
    T: Scalar,
{
    check_same_shape("subtract", a, b)?;
    let result = merge("subtract", a, b, Some, T::neg_checked, T::sub_checked)?;
    debug!(
        lhs_nnz = a.nnz(),
        rhs_nnz = b.nnz(),
        result_nnz = result.nnz(),
        "subtract"
    );
    Ok(result)
}

fn check_same_shape<T>(
    op: &'static str,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            op,
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// Two-pointer merge over the sorted entries of `a` and `b`
///
/// At each step the smaller coordinate is emitted through `left` or `right`;
/// on equal coordinates `both` combines the values and both cursors advance.
/// An exhausted side compares as larger than anything. Zero results are
/// dropped, and since both inputs are ascending the output is too. A combiner
/// returning `None` aborts the merge with [`MatrixError::Overflow`].
fn merge<T, L, R, B>(
    op: &'static str,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    left: L,
    right: R,
    both: B,
) -> Result<SparseMatrix<T>>
where
    T: Scalar,
    L: Fn(T) -> Option<T>,
    R: Fn(T) -> Option<T>,
    B: Fn(T, T) -> Option<T>,
{
    let (xs, ys) = (a.entries(), b.entries());
    let mut out = Vec::with_capacity(xs.len() + ys.len());
    let (mut i, mut j) = (0, 0);

    let mut emit = |row: usize, col: usize, value: Option<T>| -> Result<()> {
        let value = value.ok_or(MatrixError::Overflow { op, row, col })?;
        if !value.is_zero() {
            out.push(Entry::new(row, col, value));
        }
        Ok(())
    };

    while i < xs.len() || j < ys.len() {
        let order = match (xs.get(i), ys.get(j)) {
            (Some(x), Some(y)) => x.cmp_coord(y),
            (Some(_), None) => Ordering::Less,
            (None, _) => Ordering::Greater,
        };

        match order {
            Ordering::Less => {
                let x = &xs[i];
                emit(x.row, x.col, left(x.value))?;
                i += 1;
            }
            Ordering::Greater => {
                let y = &ys[j];
                emit(y.row, y.col, right(y.value))?;
                j += 1;
            }
            Ordering::Equal => {
                let (x, y) = (&xs[i], &ys[j]);
                emit(x.row, x.col, both(x.value, y.value))?;
                i += 1;
                j += 1;
            }
        }
    }

    Ok(SparseMatrix::from_sorted_entries(a.rows(), a.cols(), out))
}
