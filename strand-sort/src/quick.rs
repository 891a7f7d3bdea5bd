//! Quicksort variants.
//!
//! Three flavours share the same divide-and-conquer idea but differ in how
//! they partition and how they remember pending work:
//!
//! | Function | Pivot | Partition | Pending ranges |
//! |----------|-------|-----------|----------------|
//! | [`quicksort_partitioned`] | middle | three-way, allocating | recursion |
//! | [`quicksort_lomuto`] | last | Lomuto, in place | recursion on smaller side |
//! | [`quicksort_iterative`] | last | Lomuto, in place | explicit stack |
//!
//! None of them is stable. Pivot choice is an implementation detail.
//!
//! # Worst Case
//!
//! With the last element as pivot, already sorted or reverse sorted input
//! splits every range into sizes `n - 1` and `0`, giving O(n²) comparisons.
//! Both in-place variants always finish the smaller side first:
//! [`quicksort_lomuto`] recurses into it and loops on the larger one, and
//! [`quicksort_iterative`] pops it off its stack next. Recursion depth and
//! stack size stay at O(log n).

use core::cmp::Ordering;

/// Returns a sorted copy of `data` using a middle pivot and a three-way split.
///
/// Elements are moved into `less`, `equal` and `greater` buckets in one pass;
/// the outer buckets are sorted recursively and the three are concatenated.
/// Runs of values equal to the pivot are settled in a single level.
///
/// # Example
///
/// ```
/// use strand_sort::quicksort_partitioned;
///
/// assert_eq!(
///     quicksort_partitioned(vec![3, 7, 3, 1, 7, 2]),
///     vec![1, 2, 3, 3, 7, 7]
/// );
/// ```
pub fn quicksort_partitioned<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    if data.len() <= 1 {
        return data;
    }

    let pivot = data.swap_remove(data.len() / 2);

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for value in data {
        match value.cmp(&pivot) {
            Ordering::Less => less.push(value),
            Ordering::Equal => equal.push(value),
            Ordering::Greater => greater.push(value),
        }
    }
    equal.push(pivot);

    let mut sorted = quicksort_partitioned(less);
    sorted.append(&mut equal);
    sorted.append(&mut quicksort_partitioned(greater));
    sorted
}

/// Partitions `data` around its last element (Lomuto scheme).
///
/// A single forward scan keeps a boundary: everything before it is `<=` the
/// pivot. Qualifying elements are swapped to the boundary, and finally the
/// pivot is swapped into place at the boundary.
///
/// Returns the pivot's final index. Every element before it is `<=` the
/// pivot and every element after it is `>`. Returns `0` for an empty slice.
///
/// # Example
///
/// ```
/// use strand_sort::lomuto_partition;
///
/// let mut data = [7, 2, 9, 1, 5];
/// let p = lomuto_partition(&mut data);
///
/// assert_eq!(data[p], 5);
/// assert!(data[..p].iter().all(|&x| x <= 5));
/// assert!(data[p + 1..].iter().all(|&x| x > 5));
/// ```
pub fn lomuto_partition<T: Ord>(data: &mut [T]) -> usize {
    let Some(high) = data.len().checked_sub(1) else {
        return 0;
    };

    let mut boundary = 0;
    for j in 0..high {
        if data[j] <= data[high] {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, high);
    boundary
}

/// Sorts `data` in place with recursive Lomuto quicksort.
///
/// Only the smaller partition is sorted recursively; the larger one is
/// handled by the next loop iteration, so recursion depth is O(log n) even
/// on sorted input.
///
/// To sort only the inclusive range `low..=high`, pass the subslice:
///
/// ```
/// use strand_sort::quicksort_lomuto;
///
/// let mut data = [9, 5, 4, 3, 2, 1, 0];
/// quicksort_lomuto(&mut data[1..=5]);
/// assert_eq!(data, [9, 1, 2, 3, 4, 5, 0]);
/// ```
pub fn quicksort_lomuto<T: Ord>(mut data: &mut [T]) {
    while data.len() > 1 {
        let pivot = lomuto_partition(data);
        let (left, right) = core::mem::take(&mut data).split_at_mut(pivot);
        let right = &mut right[1..];

        // Recurse into the smaller side, loop on the larger
        if left.len() < right.len() {
            quicksort_lomuto(left);
            data = right;
        } else {
            quicksort_lomuto(right);
            data = left;
        }
    }
}

/// Sorts `data` in place with Lomuto quicksort driven by an explicit stack.
///
/// Pending ranges are kept as half-open `(start, end)` pairs. The larger
/// side of each partition is pushed first so the smaller side is processed
/// next, which bounds the stack at O(log n) entries.
///
/// # Example
///
/// ```
/// use strand_sort::quicksort_iterative;
///
/// let mut data: Vec<u32> = (0..1_000).collect();
/// quicksort_iterative(&mut data[..]);
/// assert!(strand_sort::is_sorted(&data));
/// ```
pub fn quicksort_iterative<T: Ord>(data: &mut [T]) {
    let mut stack = vec![(0, data.len())];

    while let Some((start, end)) = stack.pop() {
        if end - start <= 1 {
            continue;
        }

        let pivot = start + lomuto_partition(&mut data[start..end]);
        let left = (start, pivot);
        let right = (pivot + 1, end);

        if pivot - start < end - (pivot + 1) {
            stack.push(right);
            stack.push(left);
        } else {
            stack.push(left);
            stack.push(right);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: [(&[i32], &[i32]); 8] = [
        (&[], &[]),
        (&[42], &[42]),
        (&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]),
        (&[5, 4, 3, 2, 1], &[1, 2, 3, 4, 5]),
        (&[64, 34, 25, 12, 22, 11, 90], &[11, 12, 22, 25, 34, 64, 90]),
        (&[3, 1, 3, 2, 1, 3], &[1, 1, 2, 3, 3, 3]),
        (&[-3, 1, -2, 4, 0, -1], &[-3, -2, -1, 0, 1, 4]),
        (&[4, 2, 4, 1, 2, 3], &[1, 2, 2, 3, 4, 4]),
    ];

    #[test]
    fn partitioned_table() {
        for (input, expected) in CASES {
            assert_eq!(quicksort_partitioned(input.to_vec()), expected, "input {input:?}");
        }
    }

    #[test]
    fn lomuto_table() {
        for (input, expected) in CASES {
            let mut data = input.to_vec();
            quicksort_lomuto(&mut data);
            assert_eq!(data, expected, "input {input:?}");
        }
    }

    #[test]
    fn iterative_table() {
        for (input, expected) in CASES {
            let mut data = input.to_vec();
            quicksort_iterative(&mut data);
            assert_eq!(data, expected, "input {input:?}");
        }
    }

    #[test]
    fn partitioned_duplicates() {
        assert_eq!(
            quicksort_partitioned(vec![3, 7, 3, 1, 7, 2]),
            vec![1, 2, 3, 3, 7, 7]
        );
        assert_eq!(quicksort_partitioned(vec![5; 64]), vec![5; 64]);
    }

    #[test]
    fn partition_empty_and_single() {
        let mut empty: [u8; 0] = [];
        assert_eq!(lomuto_partition(&mut empty), 0);

        let mut single = [9];
        assert_eq!(lomuto_partition(&mut single), 0);
        assert_eq!(single, [9]);
    }

    #[test]
    fn partition_places_pivot() {
        let mut data = [3, 8, 1, 9, 4, 4, 6];
        let p = lomuto_partition(&mut data);
        assert_eq!(data[p], 6);
        assert!(data[..p].iter().all(|&x| x <= 6));
        assert!(data[p + 1..].iter().all(|&x| x > 6));
    }

    #[test]
    fn partition_pivot_is_max() {
        let mut data = [2, 1, 3];
        assert_eq!(lomuto_partition(&mut data), 2);
        assert_eq!(data[2], 3);
    }

    #[test]
    fn lomuto_subrange() {
        let mut data = [9, 5, 4, 3, 2, 1, 0];
        quicksort_lomuto(&mut data[1..=5]);
        assert_eq!(data, [9, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn lomuto_depth_is_logarithmic_on_sorted_input() {
        // 20k frames of one-per-element recursion would not fit in 256 KiB
        let worker = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let mut ascending: Vec<u32> = (0..20_000).collect();
                quicksort_lomuto(&mut ascending);

                let mut descending: Vec<u32> = (0..20_000).rev().collect();
                quicksort_lomuto(&mut descending);

                (ascending, descending)
            })
            .unwrap();

        let (ascending, descending) = worker.join().unwrap();
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));
        assert!(descending.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn iterative_handles_sorted_input() {
        let mut data: Vec<u32> = (0..5_000).collect();
        quicksort_iterative(&mut data);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));

        let mut data: Vec<u32> = (0..5_000).rev().collect();
        quicksort_iterative(&mut data);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn strings() {
        let words = vec!["pear", "apple", "fig", "apple"];
        assert_eq!(
            quicksort_partitioned(words.clone()),
            vec!["apple", "apple", "fig", "pear"]
        );

        let mut words = words;
        quicksort_lomuto(&mut words);
        assert_eq!(words, ["apple", "apple", "fig", "pear"]);
    }
}
