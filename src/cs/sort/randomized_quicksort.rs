use log::debug;
use rand::Rng;

use super::partition::randomized_partition;

/// Sorts the slice in place using randomized quicksort. Not stable.
pub fn randomized_quicksort<T: Ord>(arr: &mut [T]) {
    randomized_quicksort_with_rng(arr, &mut rand::thread_rng());
}

/// Same as [`randomized_quicksort`] but draws pivots from `rng`.
pub fn randomized_quicksort_with_rng<T, R>(arr: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    if arr.len() <= 1 {
        return;
    }
    debug!("randomized quicksort of {} elements", arr.len());
    randomized_quicksort_range(arr, 0, arr.len() - 1, rng);
}

/// Sorts `arr[p..=r]`, recursing on the smaller side to keep the stack at `O(log n)`.
pub fn randomized_quicksort_range<T, R>(arr: &mut [T], mut p: usize, mut r: usize, rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    debug_assert!(p >= r || r < arr.len(), "sort bound {} out of range", r);
    while p < r {
        let q = randomized_partition(arr, p, r, rng);
        if q - p < r - q {
            if q > p {
                randomized_quicksort_range(arr, p, q - 1, rng);
            }
            p = q + 1;
        } else {
            randomized_quicksort_range(arr, q + 1, r, rng);
            if q == p {
                return;
            }
            r = q - 1;
        }
    }
}
