use log::debug;
use rand::Rng;

use super::partition::randomized_partition;
use crate::error::{Error, Result};

/// Returns the `rank`-th smallest element (1-based), reordering the slice in place.
pub fn randomized_quickselect<T: Ord + Clone>(arr: &mut [T], rank: usize) -> Result<T> {
    randomized_quickselect_with_rng(arr, rank, &mut rand::thread_rng())
}

/// Same as [`randomized_quickselect`] but draws pivots from `rng`.
pub fn randomized_quickselect_with_rng<T, R>(arr: &mut [T], rank: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if arr.is_empty() {
        return Err(Error::EmptySequence);
    }
    if rank == 0 || rank > arr.len() {
        return Err(Error::rank_out_of_range(rank, arr.len()));
    }
    debug!("randomized select of rank {} among {} elements", rank, arr.len());
    let last = arr.len() - 1;
    Ok(randomized_select_range(arr, 0, last, rank, rng).clone())
}

/// Finds the `i`-th smallest element of `arr[p..=r]`, counting `i` from `p`.
pub fn randomized_select_range<'a, T, R>(
    arr: &'a mut [T],
    mut p: usize,
    mut r: usize,
    mut i: usize,
    rng: &mut R,
) -> &'a T
where
    T: Ord,
    R: Rng + ?Sized,
{
    debug_assert!(p <= r && r < arr.len(), "invalid select bounds [{}, {}]", p, r);
    debug_assert!(i >= 1 && i <= r - p + 1, "rank {} outside [{}, {}]", i, p, r);

    loop {
        if p == r {
            return &arr[p];
        }
        let q = randomized_partition(arr, p, r, rng);
        let k = q - p + 1;
        if i == k {
            return &arr[q];
        } else if i < k {
            // i < k implies q > p, so q - 1 cannot underflow
            r = q - 1;
        } else {
            p = q + 1;
            i -= k;
        }
    }
}
