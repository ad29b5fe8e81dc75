//! Arithmetic over sparse matrices
//!
//! Addition and subtraction are linear merges of the two operands' sorted
//! entry lists. Multiplication walks the left operand row by row and sums
//! partial products through an [`accumulator::Accumulator`].

pub mod accumulator;
pub mod elementwise;
pub mod multiply;

pub use accumulator::{create_accumulator, Accumulator, OrderedMapAccumulator, SortAccumulator};
pub use elementwise::{add, subtract};
pub use multiply::{multiply, multiply_with};
