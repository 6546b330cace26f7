use std::cmp::Ordering;

use log::{debug, trace};

use super::median_of_medians::choose_pivot;
use super::order_statistic::insertion_sort;
use super::partition::partition_around;
use super::{segment_mut, SMALL_SEGMENT};
use crate::error::{Result, SelectError};

/// How the group medians are reduced to a single pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// Exact lower median of the group medians, found with the selector itself.
    /// At least ~30% of the segment lies on each side of the pivot.
    #[default]
    SelectedMedian,
    /// Group the medians in fives again until one value is left. Reproduces the
    /// reference pivot values, but gives no split guarantee.
    NestedMedians,
}

/// Worst-case linear k-th smallest selection.
///
/// ```
/// use bfprt::{PivotStrategy, Selector};
///
/// let selector = Selector::new(PivotStrategy::NestedMedians);
/// let mut data: Vec<u32> = (1..=200).rev().collect();
/// assert_eq!(selector.select_kth(&mut data, 100), Ok(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selector {
    strategy: PivotStrategy,
}

impl Selector {
    pub fn new(strategy: PivotStrategy) -> Self {
        Selector { strategy }
    }

    pub fn strategy(&self) -> PivotStrategy {
        self.strategy
    }

    /// `k` is 1-based. Errors are reported before `seq` is touched.
    pub fn select_kth<T: Ord + Clone>(&self, seq: &mut [T], k: usize) -> Result<T> {
        if seq.is_empty() {
            return Err(SelectError::invalid_range("sequence is empty"));
        }
        let right = seq.len() - 1;
        self.linear_select(seq, 0, right, k)
    }

    /// `k` counts from `left`.
    pub fn linear_select<T: Ord + Clone>(
        &self,
        seq: &mut [T],
        left: usize,
        right: usize,
        k: usize,
    ) -> Result<T> {
        let segment = segment_mut(seq, left, right)?;
        if k == 0 || k > segment.len() {
            return Err(SelectError::rank_out_of_bounds(k, segment.len()));
        }
        debug!(
            "selecting rank {} of {} elements with {:?}",
            k,
            segment.len(),
            self.strategy
        );
        select_in_place(segment, k, self.strategy)
    }

    /// Lower median of `seq`, i.e. rank `(len + 1) / 2`.
    pub fn select_median<T: Ord + Clone>(&self, seq: &mut [T]) -> Result<T> {
        let k = (seq.len() + 1) / 2;
        self.select_kth(seq, k)
    }
}

/// Returns the `k`-th smallest element (1-based) of `seq`, permuting it in place.
///
/// ```
/// use bfprt::select_kth;
///
/// let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
/// assert_eq!(select_kth(&mut data, 5), Ok(3));
/// assert_eq!(select_kth(&mut data, 1), Ok(1));
/// assert_eq!(select_kth(&mut data, 10), Ok(9));
/// ```
pub fn select_kth<T: Ord + Clone>(seq: &mut [T], k: usize) -> Result<T> {
    Selector::default().select_kth(seq, k)
}

pub fn linear_select<T: Ord + Clone>(
    seq: &mut [T],
    left: usize,
    right: usize,
    k: usize,
) -> Result<T> {
    Selector::default().linear_select(seq, left, right, k)
}

pub fn select_median<T: Ord + Clone>(seq: &mut [T]) -> Result<T> {
    Selector::default().select_median(seq)
}

// Callers guarantee `!v.is_empty()` and `1 <= k <= v.len()`.
pub(crate) fn select_in_place<T: Ord + Clone>(
    v: &mut [T],
    k: usize,
    strategy: PivotStrategy,
) -> Result<T> {
    let mut left = 0;
    let mut right = v.len() - 1;
    let mut k = k;

    loop {
        if left == right {
            return Ok(v[left].clone());
        }

        let segment = &mut v[left..=right];
        if segment.len() <= SMALL_SEGMENT {
            insertion_sort(segment);
            return Ok(segment[k - 1].clone());
        }

        let pivot = choose_pivot(segment, strategy)?;
        let pos = partition_around(segment, &pivot)?;
        let rank = pos + 1;
        trace!(
            "segment [{}, {}]: pivot rank {}, want {}",
            left,
            right,
            rank,
            k
        );

        match k.cmp(&rank) {
            Ordering::Equal => return Ok(segment[pos].clone()),
            Ordering::Less => right = left + pos - 1,
            Ordering::Greater => {
                left += rank;
                k -= rank;
            }
        }
    }
}
