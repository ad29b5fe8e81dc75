//! Utilities for converting between our entry store and `sprs`

use num_traits::Num;
use sprs::CsMat;

use crate::error::Result;
use crate::matrix::SparseMatrix;
use crate::utils::exclusive_scan;

/// Converts a matrix to sprs CsMat in CSR format
///
/// The entry store is already row-major sorted, so the CSR arrays are read
/// off directly: per-row counts scanned into `indptr`, the entries supply
/// `indices` and `data` in order. Unlike the entry store, CSR needs one
/// pointer per row.
pub fn to_sprs<T>(matrix: &SparseMatrix<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    let mut counts = vec![0usize; matrix.rows()];
    for entry in matrix.iter() {
        counts[entry.row] += 1;
    }
    let indptr = exclusive_scan(&counts);
    let indices = matrix.iter().map(|e| e.col).collect();
    let data = matrix.iter().map(|e| e.value).collect();

    CsMat::new((matrix.rows(), matrix.cols()), indptr, indices, data)
}

/// Converts a sprs matrix (CSR or CSC) to our entry store
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: &CsMat<T>) -> Result<SparseMatrix<T>>
where
    T: Copy + Num,
{
    let (rows, cols) = matrix.shape();
    SparseMatrix::from_triplets(
        rows,
        cols,
        matrix.iter().map(|(&val, (row, col))| (row, col, val)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprs_roundtrip() {
        // [1 2 0]
        // [0 0 0]
        // [4 0 5]
        let original = SparseMatrix::from_triplets(
            3,
            3,
            vec![(0, 0, 1.0f64), (0, 1, 2.0), (2, 0, 4.0), (2, 2, 5.0)],
        )
        .unwrap();

        let sprs_mat = to_sprs(&original);
        assert!(sprs_mat.is_csr());
        assert_eq!(sprs_mat.indptr().as_slice().unwrap(), &[0, 2, 2, 4]);
        assert_eq!(sprs_mat.indices(), &[0, 1, 0, 2]);
        assert_eq!(sprs_mat.data(), &[1.0, 2.0, 4.0, 5.0]);

        let roundtrip = from_sprs(&sprs_mat).unwrap();
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_from_sprs_csc() {
        // Same matrix as above in CSC layout
        let csc = CsMat::new_csc(
            (3, 3),
            vec![0, 2, 3, 4],
            vec![0, 2, 0, 2],
            vec![1.0f64, 4.0, 2.0, 5.0],
        );

        let matrix = from_sprs(&csc).unwrap();
        let triplets: Vec<_> = matrix.iter().map(|e| (e.row, e.col, e.value)).collect();
        assert_eq!(
            triplets,
            vec![(0, 0, 1.0), (0, 1, 2.0), (2, 0, 4.0), (2, 2, 5.0)]
        );
    }

    #[test]
    fn test_from_sprs_drops_explicit_zeros() {
        let csr = CsMat::new((2, 2), vec![0, 2, 3], vec![0, 1, 1], vec![1, 0, 3]);
        let matrix = from_sprs(&csr).unwrap();
        assert_eq!(matrix.nnz(), 2);
        assert_eq!(matrix.get(0, 1).unwrap(), 0);
    }
}
