//! Text format for persisting matrices
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Absent coordinates are implicitly zero. Entry lines are parsed as exactly
//! three comma-separated numeric literals inside parentheses; nothing else is
//! accepted. A value literal is an optional sign, digits with an optional
//! fraction, and an optional exponent, so `NaN` and `inf` are rejected.

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use num_traits::Num;
use tracing::trace;

use crate::constants::{COLS_KEY, ROWS_KEY};
use crate::error::{MatrixError, Result};
use crate::matrix::{Entry, SparseMatrix};

/// Parses a matrix from its text form
///
/// Blank lines after the header are ignored. Entries may be listed in any
/// order; they are stored sorted by coordinate. Zero values are not stored,
/// but they are still checked against the declared shape and for duplicate
/// coordinates like any other entry.
///
/// # Errors
///
/// - [`MatrixError::Parse`] for a malformed header or entry line, or when two
///   entries share a coordinate
/// - [`MatrixError::InvalidDimension`] when a dimension is zero
/// - [`MatrixError::OutOfBounds`] when an entry lies outside the declared shape
///
/// # Examples
///
/// ```
/// use coo_arith::codec::load;
///
/// let m = load::<i64>("rows=2\ncols=3\n(0, 2, 5)\n(1, 0, -1)\n").unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.nnz(), 2);
/// ```
pub fn load<T>(text: &str) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + FromStr,
{
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let rows = parse_header(lines.next(), 1, ROWS_KEY)?;
    let cols = parse_header(lines.next(), 2, COLS_KEY)?;
    let mut matrix = SparseMatrix::new(rows, cols)?;

    let mut parsed: Vec<(usize, Entry<T>)> = Vec::new();
    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let entry = parse_entry::<T>(line_no, line)?;
        if entry.row >= rows || entry.col >= cols {
            return Err(MatrixError::OutOfBounds {
                row: entry.row,
                col: entry.col,
                rows,
                cols,
            });
        }
        parsed.push((line_no, entry));
    }

    // Stable, so the later of two duplicates is the one reported
    parsed.sort_by(|(_, a), (_, b)| a.cmp_coord(b));
    if let Some(pair) = parsed
        .windows(2)
        .find(|w| w[0].1.coord() == w[1].1.coord())
    {
        let (line_no, dup) = &pair[1];
        return Err(MatrixError::parse(
            *line_no,
            format!("duplicate entry at ({}, {})", dup.row, dup.col),
        ));
    }

    for (_, entry) in parsed {
        // Zero values are a no-op insert
        matrix.insert(entry.row, entry.col, entry.value)?;
    }
    trace!(rows, cols, nnz = matrix.nnz(), "loaded matrix");
    Ok(matrix)
}

/// Renders a matrix in the text form read by [`load`]
///
/// Every line, including the last, is newline-terminated.
pub fn save<T: Display>(matrix: &SparseMatrix<T>) -> String {
    let mut out = format!(
        "{}={}\n{}={}\n",
        ROWS_KEY,
        matrix.rows(),
        COLS_KEY,
        matrix.cols()
    );
    for entry in matrix.iter() {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

/// Reads and parses a matrix file
pub fn read_matrix<T, P>(path: P) -> Result<SparseMatrix<T>>
where
    T: Copy + Num + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    trace!(path = %path.display(), bytes = text.len(), "read matrix file");
    load(&text)
}

/// Writes a matrix file, creating missing parent directories
pub fn write_matrix<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
where
    T: Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, save(matrix))?;
    trace!(path = %path.display(), nnz = matrix.nnz(), "wrote matrix file");
    Ok(())
}

impl<T> FromStr for SparseMatrix<T>
where
    T: Copy + Num + FromStr,
{
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        load(s)
    }
}

/// Parses a `key=<int>` header line
fn parse_header(line: Option<(usize, &str)>, expected_line: usize, key: &str) -> Result<usize> {
    let (line_no, line) = line.ok_or_else(|| {
        MatrixError::parse(expected_line, format!("missing '{}=<int>' header", key))
    })?;

    let (found_key, value) = line
        .split_once('=')
        .ok_or_else(|| MatrixError::parse(line_no, format!("expected '{}=<int>'", key)))?;

    if found_key.trim() != key {
        return Err(MatrixError::parse(
            line_no,
            format!("expected '{}' header, found '{}'", key, found_key.trim()),
        ));
    }

    value.trim().parse::<usize>().map_err(|_| {
        MatrixError::parse(
            line_no,
            format!("invalid {} value '{}'", key, value.trim()),
        )
    })
}

/// Parses a `(row, col, value)` entry line
fn parse_entry<T: FromStr>(line_no: usize, line: &str) -> Result<Entry<T>> {
    let inner = line
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| MatrixError::parse(line_no, "expected '(row, col, value)'"))?;

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(MatrixError::parse(
            line_no,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    }

    let row = fields[0]
        .parse::<usize>()
        .map_err(|_| MatrixError::parse(line_no, format!("invalid row index '{}'", fields[0])))?;
    let col = fields[1]
        .parse::<usize>()
        .map_err(|_| MatrixError::parse(line_no, format!("invalid column index '{}'", fields[1])))?;
    let invalid_value = || MatrixError::parse(line_no, format!("invalid value '{}'", fields[2]));
    if !is_numeric_literal(fields[2]) {
        return Err(invalid_value());
    }
    let value = fields[2].parse::<T>().map_err(|_| invalid_value())?;

    Ok(Entry::new(row, col, value))
}

/// Whether `s` is `[+-]digits[.digits][(e|E)[+-]digits]`
///
/// Either side of the decimal point may be empty, but not both.
fn is_numeric_literal(s: &str) -> bool {
    fn digits(s: &[u8]) -> usize {
        s.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let bytes = s.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = digits(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = digits(&bytes[pos..]);
        pos += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triplets<T: Copy>(m: &SparseMatrix<T>) -> Vec<(usize, usize, T)> {
        m.iter().map(|e| (e.row, e.col, e.value)).collect()
    }

    fn parse_line(err: MatrixError) -> usize {
        match err {
            MatrixError::Parse { line, .. } => line,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_basic() {
        let m = load::<i64>("rows=3\ncols=3\n(0, 0, 1)\n(1, 2, -7)\n(2, 1, 4)\n").unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(triplets(&m), vec![(0, 0, 1), (1, 2, -7), (2, 1, 4)]);
    }

    #[test]
    fn test_load_reals_and_whitespace() {
        let text = " rows = 2\ncols=2 \n\n  (1,0,  -2.5 )\n(0, 1, 1e2)\n\n";
        let m = load::<f64>(text).unwrap();
        assert_eq!(triplets(&m), vec![(0, 1, 100.0), (1, 0, -2.5)]);
    }

    #[test]
    fn test_load_skips_zero_values() {
        let m = load::<i64>("rows=2\ncols=2\n(0, 0, 0)\n(1, 1, 3)\n").unwrap();
        assert_eq!(triplets(&m), vec![(1, 1, 3)]);
    }

    #[test]
    fn test_load_sorts_unordered_entries() {
        let m = load::<i64>("rows=2\ncols=2\n(1, 1, 3)\n(0, 1, 2)\n").unwrap();
        assert_eq!(triplets(&m), vec![(0, 1, 2), (1, 1, 3)]);
    }

    #[test]
    fn test_load_header_only() {
        let m = load::<i64>("rows=4\ncols=5").unwrap();
        assert_eq!(m.shape(), (4, 5));
        assert!(m.is_empty());
    }

    #[test]
    fn test_load_rejects_bad_headers() {
        assert_eq!(parse_line(load::<i64>("").unwrap_err()), 1);
        assert_eq!(parse_line(load::<i64>("rows=2").unwrap_err()), 2);
        assert_eq!(parse_line(load::<i64>("cols=2\nrows=2\n").unwrap_err()), 1);
        assert_eq!(parse_line(load::<i64>("rows=two\ncols=2\n").unwrap_err()), 1);
        assert_eq!(parse_line(load::<i64>("rows=2\ncols 2\n").unwrap_err()), 2);
        assert_eq!(parse_line(load::<i64>("rows=-1\ncols=2\n").unwrap_err()), 1);
    }

    #[test]
    fn test_load_zero_dimension() {
        assert!(matches!(
            load::<i64>("rows=0\ncols=2\n"),
            Err(MatrixError::InvalidDimension { rows: 0, cols: 2 })
        ));
    }

    #[test]
    fn test_load_rejects_bad_entries() {
        let cases = [
            "rows=2\ncols=2\n0, 0, 1\n",
            "rows=2\ncols=2\n(0, 0)\n",
            "rows=2\ncols=2\n(0, 0, 1, 2)\n",
            "rows=2\ncols=2\n(a, 0, 1)\n",
            "rows=2\ncols=2\n(0, -1, 1)\n",
            "rows=2\ncols=2\n(0, 0, x)\n",
            "rows=2\ncols=2\n(0, 0, __import__('os'))\n",
        ];
        for text in cases {
            assert_eq!(parse_line(load::<i64>(text).unwrap_err()), 3, "{text:?}");
        }

        // Accepted by f64's FromStr but not numeric literals
        let non_finite = [
            "rows=2\ncols=2\n(0, 0, NaN)\n",
            "rows=2\ncols=2\n(0, 0, inf)\n",
            "rows=2\ncols=2\n(0, 0, -infinity)\n",
            "rows=2\ncols=2\n(0, 0, 1e)\n",
            "rows=2\ncols=2\n(0, 0, .)\n",
        ];
        for text in non_finite {
            assert_eq!(parse_line(load::<f64>(text).unwrap_err()), 3, "{text:?}");
        }
    }

    #[test]
    fn test_numeric_literal() {
        for ok in ["0", "-3", "+7", "2.5", "1.", ".5", "1e2", "-1.5E-3", "6e+0"] {
            assert!(is_numeric_literal(ok), "{ok:?}");
        }
        for bad in ["", "-", "+.", "e5", "1e", "1e+", "1.2.3", "0x10", "NaN", "inf", "1 2"] {
            assert!(!is_numeric_literal(bad), "{bad:?}");
        }
    }

    #[test]
    fn test_load_rejects_duplicates() {
        let err = load::<i64>("rows=2\ncols=2\n(0, 1, 1)\n(1, 1, 1)\n(0, 1, 5)\n").unwrap_err();
        assert_eq!(parse_line(err), 5);
    }

    #[test]
    fn test_load_out_of_bounds() {
        assert!(matches!(
            load::<i64>("rows=2\ncols=2\n(2, 0, 1)\n"),
            Err(MatrixError::OutOfBounds { row: 2, col: 0, .. })
        ));
    }

    #[test]
    fn test_load_checks_zero_values() {
        assert!(matches!(
            load::<i64>("rows=2\ncols=2\n(99, 99, 0)\n"),
            Err(MatrixError::OutOfBounds { row: 99, col: 99, .. })
        ));

        // A zero repeating a stored coordinate is still a duplicate
        let err = load::<i64>("rows=2\ncols=2\n(0, 1, 4)\n(0, 1, 0)\n").unwrap_err();
        assert_eq!(parse_line(err), 4);
        let err = load::<f64>("rows=2\ncols=2\n(1, 0, 0.0)\n(1, 0, 2.5)\n").unwrap_err();
        assert_eq!(parse_line(err), 4);
    }

    #[test]
    fn test_load_huge_row_count() {
        let m = load::<i64>("rows=17592186044416\ncols=1\n(0, 0, 2)\n").unwrap();
        assert_eq!(m.shape(), (1 << 44, 1));

        let b = load::<i64>("rows=1\ncols=1\n(0, 0, 3)\n").unwrap();
        let c = crate::ops::multiply(&m, &b).unwrap();
        assert_eq!(save(&c), "rows=17592186044416\ncols=1\n(0, 0, 6)\n");
    }

    #[test]
    fn test_save_format() {
        let m = SparseMatrix::from_triplets(2, 3, vec![(1, 2, -4), (0, 0, 1)]).unwrap();
        assert_eq!(save(&m), "rows=2\ncols=3\n(0, 0, 1)\n(1, 2, -4)\n");

        let empty = SparseMatrix::<f64>::new(1, 1).unwrap();
        assert_eq!(save(&empty), "rows=1\ncols=1\n");
    }

    #[test]
    fn test_save_then_load() {
        let m = SparseMatrix::from_triplets(3, 2, vec![(0, 1, 0.25), (2, 0, -3.0)]).unwrap();
        let back: SparseMatrix<f64> = save(&m).parse().unwrap();
        assert_eq!(back, m);
    }
}
