//! Operation selection and dispatch
//!
//! The CLI turns user input into an [`Operation`] and hands it, together with
//! the two loaded operands, to [`dispatch`]. Nothing here holds state between
//! calls.

use std::fmt;
use std::str::FromStr;

use crate::config::EngineConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;
use crate::ops::{add, multiply_with, subtract};
use crate::scalar::Scalar;

/// An arithmetic operation on two matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// The numeric menu choice selecting this operation
    pub fn menu_choice(&self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Menu label, e.g. "Add Matrices"
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Add Matrices",
            Operation::Subtract => "Subtract Matrices",
            Operation::Multiply => "Multiply Matrices",
        }
    }

    /// Heading printed above a result
    pub fn describe(&self) -> &'static str {
        match self {
            Operation::Add => "Result of matrix addition:",
            Operation::Subtract => "Result of matrix subtraction:",
            Operation::Multiply => "Result of matrix multiplication:",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        };
        write!(f, "{name}")
    }
}

/// Accepts the menu choices `1`/`2`/`3` or an operation name
impl FromStr for Operation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "add" => Ok(Operation::Add),
            "2" | "sub" | "subtract" => Ok(Operation::Subtract),
            "3" | "mul" | "multiply" => Ok(Operation::Multiply),
            _ => Err(MatrixError::InvalidChoice(s.trim().to_string())),
        }
    }
}

/// Runs `op` on `a` and `b` with the default [`EngineConfig`]
pub fn dispatch<T>(
    op: Operation,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>>
where
    T: Scalar,
{
    dispatch_with(op, a, b, &EngineConfig::default())
}

/// Runs `op` on `a` and `b`
pub fn dispatch_with<T>(
    op: Operation,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &EngineConfig,
) -> Result<SparseMatrix<T>>
where
    T: Scalar,
{
    match op {
        Operation::Add => add(a, b),
        Operation::Subtract => subtract(a, b),
        Operation::Multiply => multiply_with(a, b, config),
    }
}
