//! Bubble sort with early exit.

/// Sorts `data` ascending by repeated adjacent-pair passes.
///
/// Each pass carries the largest element of the unsorted prefix to its final
/// slot, so pass `i` only scans the first `len - i` elements. The sort stops
/// after the first pass that performs no swap.
///
/// Returns the number of passes performed: `1` for already sorted input of
/// two or more elements, `0` for empty or single-element input.
///
/// Only strictly greater neighbours are swapped, so equal elements keep
/// their relative order.
///
/// # Example
///
/// ```
/// use strand_sort::bubble_sort;
///
/// let mut data = [5, 4, 3, 2, 1];
/// bubble_sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 4, 5]);
///
/// let mut sorted = [1, 2, 3];
/// assert_eq!(bubble_sort(&mut sorted), 1);
/// ```
pub fn bubble_sort<T: Ord>(data: &mut [T]) -> usize {
    let len = data.len();
    let mut passes = 0;

    for unsorted in (2..=len).rev() {
        passes += 1;
        let mut swapped = false;

        for j in 0..unsorted - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    passes
}
