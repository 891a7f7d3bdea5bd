//! Insertion sort.

/// Sorts `data` ascending by insertion.
///
/// For each position from the second onward, the element is shifted left
/// past every strictly greater predecessor. O(n²) in general, O(n) when the
/// input is already sorted. Equal elements keep their relative order.
///
/// # Example
///
/// ```
/// use strand_sort::insertion_sort;
///
/// let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
/// insertion_sort(&mut data);
/// assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}
