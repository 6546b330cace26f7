use super::segment_mut;
use crate::error::Result;

/// Stable insertion sort for the five-element groups and small base-case segments.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && v[j - 1] > v[j] {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

pub fn sort_segment<T: Ord>(seq: &mut [T], left: usize, right: usize) -> Result<()> {
    let segment = segment_mut(seq, left, right)?;
    insertion_sort(segment);
    Ok(())
}

/// Sorts `[left, right]` and returns the element at `left + (right - left) / 2`.
///
/// For even-length ranges this is the lower of the two middle elements.
///
/// ```
/// use bfprt::cs::selection::median_of_segment;
///
/// let mut v = vec![9, 4, 7, 1];
/// assert_eq!(median_of_segment(&mut v, 0, 3), Ok(4));
/// assert_eq!(v, vec![1, 4, 7, 9]);
/// ```
pub fn median_of_segment<T: Ord + Clone>(seq: &mut [T], left: usize, right: usize) -> Result<T> {
    let segment = segment_mut(seq, left, right)?;
    Ok(lower_median(segment))
}

pub(crate) fn lower_median<T: Ord + Clone>(group: &mut [T]) -> T {
    debug_assert!(!group.is_empty());
    insertion_sort(group);
    group[(group.len() - 1) / 2].clone()
}
