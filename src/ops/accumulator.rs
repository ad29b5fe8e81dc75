//! Accumulators for the intermediate products of one output row
//!
//! Multiplying row `i` of A with B yields one partial product per matching
//! pair of entries, and several of them can land on the same output column.
//! An accumulator collects those partial products, sums duplicates and hands
//! back the row's non-zero entries in ascending column order.

use std::collections::BTreeMap;

use crate::config::AccumulatorKind;
use crate::matrix::Entry;
use crate::scalar::Scalar;

/// `Err(col)` names the output column whose running sum overflowed
pub type SumResult = std::result::Result<(), usize>;

/// Trait for accumulators that handle intermediate products of one row
pub trait Accumulator<T>
where
    T: Scalar,
{
    /// Reset the accumulator to prepare for a new row
    fn reset(&mut self);

    /// Accumulate a single partial product (column and value)
    fn accumulate(&mut self, col: usize, val: T) -> SumResult;

    /// Append the accumulated row to `out` and reset
    ///
    /// Entries are emitted in ascending column order with duplicate columns
    /// summed; sums equal to zero are dropped.
    fn drain_row(&mut self, row: usize, out: &mut Vec<Entry<T>>) -> SumResult;
}

/// Sort-based accumulator
///
/// Collects partial products in an unsorted list, then sorts by column and
/// merges runs of equal columns. Cheap when a row produces few products.
pub struct SortAccumulator<T> {
    /// Temporary storage for column indices of intermediate products
    col_indices: Vec<usize>,

    /// Temporary storage for values of intermediate products
    values: Vec<T>,
}

impl<T> SortAccumulator<T>
where
    T: Scalar,
{
    /// Create a new sort-based accumulator
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - Initial capacity for the temporary storage
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            col_indices: Vec::with_capacity(initial_capacity),
            values: Vec::with_capacity(initial_capacity),
        }
    }
}

impl<T> Accumulator<T> for SortAccumulator<T>
where
    T: Scalar,
{
    fn reset(&mut self) {
        self.col_indices.clear();
        self.values.clear();
    }

    fn accumulate(&mut self, col: usize, val: T) -> SumResult {
        self.col_indices.push(col);
        self.values.push(val);
        Ok(())
    }

    fn drain_row(&mut self, row: usize, out: &mut Vec<Entry<T>>) -> SumResult {
        if self.col_indices.is_empty() {
            return Ok(());
        }

        let mut order: Vec<usize> = (0..self.col_indices.len()).collect();
        order.sort_unstable_by_key(|&idx| self.col_indices[idx]);

        let mut current_col = self.col_indices[order[0]];
        let mut current_val = self.values[order[0]];

        for &idx in order.iter().skip(1) {
            let col = self.col_indices[idx];
            let val = self.values[idx];

            if col == current_col {
                current_val = current_val.add_checked(val).ok_or(col)?;
            } else {
                if !current_val.is_zero() {
                    out.push(Entry::new(row, current_col, current_val));
                }
                current_col = col;
                current_val = val;
            }
        }

        if !current_val.is_zero() {
            out.push(Entry::new(row, current_col, current_val));
        }

        self.reset();
        Ok(())
    }
}

/// Ordered-map accumulator
///
/// Keeps a running sum per column in a `BTreeMap`, which already yields
/// columns in ascending order when drained.
pub struct OrderedMapAccumulator<T> {
    sums: BTreeMap<usize, T>,
}

impl<T> OrderedMapAccumulator<T> {
    /// Create an empty ordered-map accumulator
    pub fn new() -> Self {
        Self {
            sums: BTreeMap::new(),
        }
    }
}

impl<T> Default for OrderedMapAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Accumulator<T> for OrderedMapAccumulator<T>
where
    T: Scalar,
{
    fn reset(&mut self) {
        self.sums.clear();
    }

    fn accumulate(&mut self, col: usize, val: T) -> SumResult {
        let sum = self.sums.entry(col).or_insert_with(T::zero);
        *sum = sum.add_checked(val).ok_or(col)?;
        Ok(())
    }

    fn drain_row(&mut self, row: usize, out: &mut Vec<Entry<T>>) -> SumResult {
        out.extend(
            std::mem::take(&mut self.sums)
                .into_iter()
                .filter(|(_, val)| !val.is_zero())
                .map(|(col, val)| Entry::new(row, col, val)),
        );
        Ok(())
    }
}

/// Create the accumulator selected by `kind`
///
/// # Arguments
///
/// * `kind` - Which accumulation strategy to use
/// * `initial_capacity` - Capacity hint for strategies that preallocate
pub fn create_accumulator<T>(
    kind: AccumulatorKind,
    initial_capacity: usize,
) -> Box<dyn Accumulator<T>>
where
    T: Scalar,
{
    match kind {
        AccumulatorKind::SortThenReduce => Box::new(SortAccumulator::new(initial_capacity)),
        AccumulatorKind::OrderedMap => Box::new(OrderedMapAccumulator::new()),
    }
}
