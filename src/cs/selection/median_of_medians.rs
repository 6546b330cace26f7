use log::trace;

use super::linear_select::{select_in_place, PivotStrategy};
use super::order_statistic::lower_median;
use super::segment_mut;
use crate::error::Result;

/// Number of elements per group when collecting medians.
pub const GROUP_SIZE: usize = 5;

/// Median-of-medians pivot for the inclusive range `[left, right]` of `seq`.
///
/// Every group of five is sorted in place and its lower median collected; the pivot is
/// the lower median of those. The result is always an element of the range.
///
/// ```
/// use bfprt::cs::selection::select_pivot;
///
/// let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
/// // Group medians are 3 and 5.
/// assert_eq!(select_pivot(&mut v, 0, 9), Ok(3));
/// ```
pub fn select_pivot<T: Ord + Clone>(seq: &mut [T], left: usize, right: usize) -> Result<T> {
    select_pivot_with(seq, left, right, PivotStrategy::default())
}

pub fn select_pivot_with<T: Ord + Clone>(
    seq: &mut [T],
    left: usize,
    right: usize,
    strategy: PivotStrategy,
) -> Result<T> {
    let segment = segment_mut(seq, left, right)?;
    choose_pivot(segment, strategy)
}

pub(crate) fn choose_pivot<T: Ord + Clone>(v: &mut [T], strategy: PivotStrategy) -> Result<T> {
    match strategy {
        PivotStrategy::NestedMedians => Ok(nested_medians(v)),
        PivotStrategy::SelectedMedian => {
            let mut medians = group_medians(v);
            trace!(
                "selected median: {} elements, {} groups",
                v.len(),
                medians.len()
            );
            let k = (medians.len() + 1) / 2;
            select_in_place(&mut medians, k, strategy)
        }
    }
}

fn nested_medians<T: Ord + Clone>(v: &mut [T]) -> T {
    let mut medians = group_medians(v);
    trace!(
        "nested medians: {} elements, {} groups",
        v.len(),
        medians.len()
    );
    if medians.len() == 1 {
        return medians.swap_remove(0);
    }
    nested_medians(&mut medians)
}

fn group_medians<T: Ord + Clone>(v: &mut [T]) -> Vec<T> {
    v.chunks_mut(GROUP_SIZE).map(lower_median).collect()
}
