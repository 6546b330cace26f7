use super::segment_mut;
use crate::error::{Result, SelectError};

/// Lomuto partition of `[left, right]` around the first element equal to `pivot`.
/// Returns the pivot's final absolute index.
///
/// ```
/// use bfprt::cs::selection::partition;
///
/// let mut v = vec![7, 2, 9, 4, 4, 1];
/// let pos = partition(&mut v, 0, 5, &4).unwrap();
/// assert_eq!(v[pos], 4);
/// assert!(v[..pos].iter().all(|&x| x <= 4));
/// assert!(v[pos + 1..].iter().all(|&x| x >= 4));
/// ```
pub fn partition<T: Ord>(seq: &mut [T], left: usize, right: usize, pivot: &T) -> Result<usize> {
    let segment = segment_mut(seq, left, right)?;
    Ok(left + partition_around(segment, pivot)?)
}

pub(crate) fn partition_around<T: Ord>(v: &mut [T], pivot: &T) -> Result<usize> {
    let found = v
        .iter()
        .position(|x| x == pivot)
        .ok_or(SelectError::PivotNotFound)?;
    let last = v.len() - 1;
    v.swap(found, last);

    let mut boundary = 0;
    for j in 0..last {
        if v[j] <= *pivot {
            v.swap(boundary, j);
            boundary += 1;
        }
    }
    v.swap(boundary, last);
    Ok(boundary)
}
