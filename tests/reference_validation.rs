//! Validate our arithmetic against sprs (standard Rust library)

use coo_arith::{add, from_sprs, multiply, subtract, to_sprs, SparseMatrix};

/// Create a simple test matrix
fn create_test_matrix() -> SparseMatrix<f64> {
    // Create a 4x4 matrix:
    // [1 2 0 0]
    // [0 3 4 0]
    // [0 0 5 6]
    // [7 0 0 8]
    SparseMatrix::from_triplets(
        4,
        4,
        vec![
            (0, 0, 1.0),
            (0, 1, 2.0),
            (1, 1, 3.0),
            (1, 2, 4.0),
            (2, 2, 5.0),
            (2, 3, 6.0),
            (3, 0, 7.0),
            (3, 3, 8.0),
        ],
    )
    .unwrap()
}

/// A banded matrix with a few off-band entries
fn create_banded_matrix(n: usize) -> SparseMatrix<f64> {
    let mut triplets = Vec::new();
    for i in 0..n {
        triplets.push((i, i, 2.0));
        if i + 1 < n {
            triplets.push((i, i + 1, -1.0));
            triplets.push((i + 1, i, -1.0));
        }
    }
    triplets.push((0, n - 1, 3.0));
    SparseMatrix::from_triplets(n, n, triplets).unwrap()
}

fn assert_same_entries(ours: &SparseMatrix<f64>, theirs: &SparseMatrix<f64>) {
    assert_eq!(ours.shape(), theirs.shape(), "shape mismatch");
    assert_eq!(ours.nnz(), theirs.nnz(), "nnz mismatch");

    for (x, y) in ours.iter().zip(theirs.iter()) {
        assert_eq!(x.coord(), y.coord(), "coordinate mismatch");
        assert!(
            (x.value - y.value).abs() < 1e-10,
            "Value mismatch at {:?}: {} vs {}",
            x.coord(),
            x.value,
            y.value
        );
    }
}

#[test]
fn test_multiply_vs_sprs() {
    let a = create_test_matrix();
    let b = create_test_matrix();

    let result = multiply(&a, &b).unwrap();

    let result_sprs = &to_sprs(&a) * &to_sprs(&b);
    let expected = from_sprs(&result_sprs).unwrap();

    assert_same_entries(&result, &expected);
}

#[test]
fn test_multiply_banded_vs_sprs() {
    let a = create_banded_matrix(32);
    let b = create_banded_matrix(32);

    let result = multiply(&a, &b).unwrap();
    let expected = from_sprs(&(&to_sprs(&a) * &to_sprs(&b))).unwrap();

    assert_same_entries(&result, &expected);
}

#[test]
fn test_add_subtract_vs_sprs() {
    let a = create_test_matrix();
    let b = create_banded_matrix(4);

    let sum = add(&a, &b).unwrap();
    let expected_sum = from_sprs(&(&to_sprs(&a) + &to_sprs(&b))).unwrap();
    assert_same_entries(&sum, &expected_sum);

    let diff = subtract(&a, &b).unwrap();
    let expected_diff = from_sprs(&(&to_sprs(&a) - &to_sprs(&b))).unwrap();
    assert_same_entries(&diff, &expected_diff);
}
