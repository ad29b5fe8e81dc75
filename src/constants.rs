//! Centralized constants for the crate
//!
//! Constants are organized by category for easy reference and maintenance.

// ============================================================================
// TEXT FORMAT
// ============================================================================

/// Header key for the row count line (`rows=<int>`)
pub const ROWS_KEY: &str = "rows";

/// Header key for the column count line (`cols=<int>`)
pub const COLS_KEY: &str = "cols";

// ============================================================================
// ACCUMULATION
// ============================================================================

/// Upper bound on the capacity preallocated for a sort accumulator
pub const MAX_ACCUMULATOR_PREALLOC: usize = 1024;

// ============================================================================
// OUTPUT LOCATION
// ============================================================================

/// Directory results are saved to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "sample_outputs";

/// File name results are saved under when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "result.txt";
