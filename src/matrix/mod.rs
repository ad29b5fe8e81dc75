// Matrix data structures

pub mod coo;
pub mod entry;
pub mod row_index;

pub use coo::SparseMatrix;
pub use entry::Entry;
pub use row_index::RowIndex;
