//! # Linear-time selection
//!
//! Finds the k-th smallest element of an unordered slice in worst-case `O(n)` time using
//! the median-of-medians (BFPRT) pivot rule.
//!
//! The pieces, leaf to root:
//! - [`order_statistic`]: insertion sort and lower-median lookup for tiny segments.
//! - [`median_of_medians`]: groups of five, their medians, and the pivot drawn from them.
//! - [`partition`]: Lomuto partition around a pivot *value*.
//! - [`linear_select`]: the narrowing loop that ties them together.
//!
//! [`workload`] and [`battery`] hold the input generators and scenario runner used by the
//! `select_battery` binary and the benchmarks.
//!
//! ```
//! use bfprt::cs::selection::select_kth;
//!
//! let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
//! assert_eq!(select_kth(&mut data, 5), Ok(3));
//! ```

pub mod battery;
pub mod linear_select;
pub mod median_of_medians;
pub mod order_statistic;
pub mod partition;
pub mod workload;

#[cfg(test)]
mod tests;

use crate::error::{Result, SelectError};

pub use battery::{BatteryConfig, Scenario, ScenarioOutcome};
pub use linear_select::{linear_select, select_kth, select_median, PivotStrategy, Selector};
pub use median_of_medians::{select_pivot, select_pivot_with, GROUP_SIZE};
pub use order_statistic::{insertion_sort, median_of_segment, sort_segment};
pub use partition::partition;
pub use workload::{generate, probe_ranks, verify_kth, Distribution};

/// Segments at or below this length are answered by sorting them outright.
pub const SMALL_SEGMENT: usize = 5;

/// Borrows the inclusive range `[left, right]` of `seq` as a sub-slice.
pub(crate) fn segment_mut<T>(seq: &mut [T], left: usize, right: usize) -> Result<&mut [T]> {
    check_range(seq.len(), left, right)?;
    Ok(&mut seq[left..=right])
}

pub(crate) fn check_range(len: usize, left: usize, right: usize) -> Result<()> {
    if len == 0 {
        return Err(SelectError::invalid_range("sequence is empty"));
    }
    if left > right {
        return Err(SelectError::invalid_range(format!(
            "left {} > right {}",
            left, right
        )));
    }
    if right >= len {
        return Err(SelectError::invalid_range(format!(
            "right {} is past the end of a sequence of length {}",
            right, len
        )));
    }
    Ok(())
}
