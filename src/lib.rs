//! # coo-arith: sparse matrix arithmetic over ordered coordinate entries
//!
//! A matrix is stored as its non-zero `(row, col, value)` entries, kept in
//! strictly ascending `(row, col)` order, together with its dimensions. No
//! dense representation is ever built.
//!
//! ## Components
//!
//! 1. **Entry store** ([`SparseMatrix`]): owns the ordered entries and
//!    enforces the ordering, bounds and non-zero invariants.
//!
//! 2. **Arithmetic engine** ([`ops`]):
//!    - **Add / Subtract**: two-pointer merges over the operands' entries
//!    - **Multiply**: row-wise products summed through an accumulator
//!
//! 3. **Codec** ([`codec`]): the `rows=`/`cols=`/`(r, c, v)` text format.
//!
//! ## Usage
//!
//! ```
//! use coo_arith::{add, codec, multiply, SparseMatrix};
//!
//! let a: SparseMatrix<i64> = codec::load("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();
//! let mut b = SparseMatrix::new(2, 2).unwrap();
//! b.insert(0, 0, 3).unwrap();
//! b.insert(0, 1, 4).unwrap();
//!
//! let sum = add(&a, &b).unwrap();
//! assert_eq!(sum.to_string(), "(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)");
//!
//! let product = multiply(&a, &b).unwrap();
//! assert_eq!(codec::save(&product), "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n");
//! ```

pub mod codec;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod scalar;
pub mod utils;

// Re-export primary components
pub use command::{dispatch, dispatch_with, Operation};
pub use config::{AccumulatorKind, EngineConfig, OutputConfig};
pub use error::{MatrixError, Result};
pub use matrix::{Entry, RowIndex, SparseMatrix};
pub use ops::{add, multiply, multiply_with, subtract};
pub use scalar::Scalar;
pub use utils::{from_sprs, to_sprs};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
