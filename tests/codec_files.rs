//! Reading and writing matrix files

use std::fs;

use coo_arith::codec::{load, read_matrix, save, write_matrix};
use coo_arith::{multiply, MatrixError, OutputConfig, SparseMatrix};
use tempfile::tempdir;

const MATRIX_FILE: &str = "rows=3
cols=4
(0, 1, 5)
(1, 0, -2)
(1, 3, 7)
(2, 2, 1)
";

#[test]
fn test_read_matrix_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("matrixfile1.txt");
    fs::write(&path, MATRIX_FILE).unwrap();

    let m: SparseMatrix<i64> = read_matrix(&path).unwrap();
    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.nnz(), 4);
    assert_eq!(m.get(1, 3).unwrap(), 7);
    assert_eq!(m.get(2, 3).unwrap(), 0);
}

#[test]
fn test_write_creates_output_directory() {
    let dir = tempdir().unwrap();
    let output = OutputConfig {
        dir: dir.path().join("sample_outputs").join("nested"),
        file_name: "result.txt".to_string(),
    };

    let m: SparseMatrix<i64> = load(MATRIX_FILE).unwrap();
    write_matrix(output.path(), &m).unwrap();

    assert_eq!(fs::read_to_string(output.path()).unwrap(), MATRIX_FILE);

    let back: SparseMatrix<i64> = read_matrix(output.path()).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_load_compute_save() {
    let dir = tempdir().unwrap();
    let left = dir.path().join("left.txt");
    let right = dir.path().join("right.txt");
    fs::write(&left, "rows=2\ncols=3\n(0, 0, 1.5)\n(1, 2, 2)\n").unwrap();
    fs::write(&right, "rows=3\ncols=1\n(0, 0, 2)\n(2, 0, -1)\n").unwrap();

    let a: SparseMatrix<f64> = read_matrix(&left).unwrap();
    let b: SparseMatrix<f64> = read_matrix(&right).unwrap();
    let c = multiply(&a, &b).unwrap();

    let out = dir.path().join("result.txt");
    write_matrix(&out, &c).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "rows=2\ncols=1\n(0, 0, 3)\n(1, 0, -2)\n"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = read_matrix::<i64, _>(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(MatrixError::Io(_))));
}

#[test]
fn test_malformed_file_reports_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "rows=2\ncols=2\n(0, 0, 1)\n[1, 1, 2]\n").unwrap();

    match read_matrix::<i64, _>(&path) {
        Err(MatrixError::Parse { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_save_is_stable() {
    let m: SparseMatrix<i64> = load(MATRIX_FILE).unwrap();
    assert_eq!(save(&m), MATRIX_FILE);
    assert_eq!(save(&load::<i64>(&save(&m)).unwrap()), MATRIX_FILE);
}
