use log::trace;
use rand::Rng;

/// Partitions `arr[p..=r]` around the pivot at `arr[r]` and returns its final index.
/// Elements equal to the pivot end up on its left.
pub fn partition<T: Ord>(arr: &mut [T], p: usize, r: usize) -> usize {
    debug_assert!(p <= r, "partition called with p > r ({} > {})", p, r);
    debug_assert!(r < arr.len(), "partition bound {} out of range", r);

    // arr[p..i] holds the elements seen so far that are <= pivot.
    let mut i = p;
    for j in p..r {
        if arr[j] <= arr[r] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, r);
    i
}

/// Moves a uniformly chosen element of `[p, r]` to `r`, then partitions.
pub fn randomized_partition<T, R>(arr: &mut [T], p: usize, r: usize, rng: &mut R) -> usize
where
    T: Ord,
    R: Rng + ?Sized,
{
    debug_assert!(p <= r, "randomized_partition called with p > r ({} > {})", p, r);
    let pivot_index = rng.gen_range(p..=r);
    arr.swap(pivot_index, r);
    let q = partition(arr, p, r);
    trace!("partitioned [{}, {}] with pivot from {} -> {}", p, r, pivot_index, q);
    q
}
