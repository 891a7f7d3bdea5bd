//! Classic comparison sorts.
//!
//! `strand-sort` collects the textbook algorithms: two quadratic
//! comparison-exchange sorts and three quicksort variants. All of them order
//! any `T: Ord` ascending; empty and single-element inputs are no-ops.
//!
//! | Algorithm | In place | Stable | Average | Worst |
//! |-----------|----------|--------|---------|-------|
//! | [`bubble_sort`] | yes | yes | O(n²) | O(n²) |
//! | [`insertion_sort`] | yes | yes | O(n²) | O(n²) |
//! | [`quicksort_partitioned`] | no | no | O(n log n) | O(n²) |
//! | [`quicksort_lomuto`] | yes | no | O(n log n) | O(n²) |
//! | [`quicksort_iterative`] | yes | no | O(n log n) | O(n²) |
//!
//! Bubble and insertion sort run in O(n) on already sorted input.
//!
//! # Example
//!
//! ```
//! use strand_sort::{bubble_sort, quicksort_lomuto, quicksort_partitioned};
//!
//! let mut a = [5, 4, 3, 2, 1];
//! bubble_sort(&mut a);
//! assert_eq!(a, [1, 2, 3, 4, 5]);
//!
//! let mut b = [5, 4, 3, 2, 1];
//! quicksort_lomuto(&mut b);
//! assert_eq!(b, [1, 2, 3, 4, 5]);
//!
//! assert_eq!(quicksort_partitioned(vec![3, 7, 3, 1, 7, 2]), [1, 2, 3, 3, 7, 7]);
//! ```
//!
//! Use [`SortAlgorithm`] to pick an algorithm at runtime.

#![warn(missing_docs)]

mod algorithm;
mod bubble;
mod insertion;
mod quick;

pub use algorithm::{ParseAlgorithmError, SortAlgorithm};
pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use quick::{lomuto_partition, quicksort_iterative, quicksort_lomuto, quicksort_partitioned};

/// Returns `true` if `data` is in ascending order.
///
/// ```
/// use strand_sort::is_sorted;
///
/// assert!(is_sorted(&[1, 1, 2]));
/// assert!(!is_sorted(&[2, 1]));
/// assert!(is_sorted::<u8>(&[]));
/// ```
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
