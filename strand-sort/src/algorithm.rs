//! Runtime selection of a sorting algorithm.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::{bubble_sort, insertion_sort, quicksort_iterative, quicksort_lomuto, quicksort_partitioned};

/// One of the sorting algorithms in this crate.
///
/// # Example
///
/// ```
/// use strand_sort::SortAlgorithm;
///
/// let algorithm: SortAlgorithm = "quick-lomuto".parse().unwrap();
/// let mut data = vec![5, 4, 3, 2, 1];
/// algorithm.sort(&mut data);
///
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// assert_eq!(algorithm.to_string(), "quick-lomuto");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// [`bubble_sort`]
    Bubble,
    /// [`insertion_sort`]
    Insertion,
    /// [`quicksort_partitioned`]
    QuickPartitioned,
    /// [`quicksort_lomuto`]
    QuickLomuto,
    /// [`quicksort_iterative`]
    QuickIterative,
}

impl SortAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::QuickPartitioned,
        SortAlgorithm::QuickLomuto,
        SortAlgorithm::QuickIterative,
    ];

    /// Returns the kebab-case name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::QuickPartitioned => "quick-partitioned",
            SortAlgorithm::QuickLomuto => "quick-lomuto",
            SortAlgorithm::QuickIterative => "quick-iterative",
        }
    }

    /// Returns `true` if equal elements keep their relative order.
    pub const fn is_stable(self) -> bool {
        matches!(self, SortAlgorithm::Bubble | SortAlgorithm::Insertion)
    }

    /// Sorts `data` ascending with this algorithm.
    pub fn sort<T: Ord>(self, data: &mut Vec<T>) {
        trace!(algorithm = self.name(), len = data.len(), "sorting");

        match self {
            SortAlgorithm::Bubble => {
                bubble_sort(data);
            }
            SortAlgorithm::Insertion => insertion_sort(data),
            SortAlgorithm::QuickPartitioned => {
                *data = quicksort_partitioned(core::mem::take(data));
            }
            SortAlgorithm::QuickLomuto => quicksort_lomuto(data),
            SortAlgorithm::QuickIterative => quicksort_iterative(data),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort algorithm '{name}' (expected one of: bubble, insertion, quick-partitioned, quick-lomuto, quick-iterative)")]
pub struct ParseAlgorithmError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for SortAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SortAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| ParseAlgorithmError { name: s.to_string() })
    }
}
