//! Randomized selection and sorting.
//!
//! Both algorithms are built on the same Lomuto partition step with a uniformly
//! random pivot:
//! - [`randomized_quicksort`] descends into both sides of each split and sorts
//!   the slice in place in expected `O(n log n)` time.
//! - [`randomized_quickselect`] descends into the side holding the requested
//!   rank only and finds an order statistic in expected `O(n)` time.
//!
//! Every routine takes the random source as an argument (`*_with_rng` forms),
//! so runs can be reproduced from a seed. The plain forms use
//! [`rand::thread_rng`].
//!
//! # Examples
//!
//! ```rust
//! use randselect::{select, sort};
//!
//! let mut values = vec![1, 4, 53, 6, 2, 533, 6, 4, 6];
//! let fourth = select(&mut values.clone(), 4).unwrap();
//! sort(&mut values).unwrap();
//! assert_eq!(values, vec![1, 2, 4, 4, 6, 6, 6, 53, 533]);
//! assert_eq!(values[3], fourth);
//! ```

use rand::Rng;

use crate::error::{Error, Result};

pub mod partition;
pub mod randomized_quickselect;
pub mod randomized_quicksort;

pub use partition::{partition, randomized_partition};
pub use randomized_quickselect::{
    randomized_quickselect, randomized_quickselect_with_rng, randomized_select_range,
};
pub use randomized_quicksort::{
    randomized_quicksort, randomized_quicksort_range, randomized_quicksort_with_rng,
};

/// Returns the `rank`-th smallest element (1-based), reordering `sequence` in place.
///
/// On return `sequence[rank - 1]` holds the selected element, everything before it
/// is `<=` and everything after it is `>=`. Clone the input first if its order
/// matters. Expected `O(n)` comparisons; the slice is never fully sorted.
///
/// # Errors
/// * [`Error::EmptySequence`] if `sequence` is empty
/// * [`Error::RankOutOfRange`] if `rank` is `0` or greater than `sequence.len()`
///
/// # Examples
/// ```
/// use randselect::select;
///
/// let mut values = vec![1, 4, 53, 6, 2, 533, 6, 4, 6];
/// assert_eq!(select(&mut values, 4).unwrap(), 4);
/// assert_eq!(values[3], 4);
/// assert!(select(&mut values, 0).is_err());
/// ```
pub fn select<T: Ord + Clone>(sequence: &mut [T], rank: usize) -> Result<T> {
    randomized_quickselect(sequence, rank)
}

/// [`select`] with an explicit random source.
pub fn select_with_rng<T, R>(sequence: &mut [T], rank: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    randomized_quickselect_with_rng(sequence, rank, rng)
}

/// Sorts `sequence` in ascending order.
///
/// # Errors
/// [`Error::EmptySequence`] if `sequence` has no elements.
pub fn sort<T: Ord>(sequence: &mut [T]) -> Result<()> {
    sort_with_rng(sequence, &mut rand::thread_rng())
}

/// [`sort`] with an explicit random source.
pub fn sort_with_rng<T, R>(sequence: &mut [T], rng: &mut R) -> Result<()>
where
    T: Ord,
    R: Rng + ?Sized,
{
    if sequence.is_empty() {
        return Err(Error::EmptySequence);
    }
    randomized_quicksort_with_rng(sequence, rng);
    Ok(())
}
