//! Configuration for the arithmetic engine and result output

use std::path::PathBuf;

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE};

/// Method for accumulating partial products during multiplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccumulatorKind {
    /// Collect products, sort by column, then merge duplicates
    #[default]
    SortThenReduce,
    /// Keep a running sum per column in an ordered map
    OrderedMap,
}

/// Configuration for the arithmetic engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Accumulator used by multiplication
    pub accumulator: AccumulatorKind,
}

impl EngineConfig {
    /// Create a config using the given accumulator
    pub fn with_accumulator(accumulator: AccumulatorKind) -> Self {
        Self { accumulator }
    }
}

/// Where a computed result is written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Directory for result files, created on demand
    pub dir: PathBuf,
    /// File name inside `dir`
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl OutputConfig {
    /// Full path of the result file
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}
