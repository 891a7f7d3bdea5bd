//! Error types for positional operations.

use core::ops::Range;

use thiserror::Error;

/// Index outside the valid interval of a positional operation.
///
/// `valid` is the half-open interval of indices the call would have
/// accepted: `0..len` for [`get`](crate::SequenceStore::get) and
/// [`delete_at`](crate::SequenceStore::delete_at), `0..len + 1` for
/// [`insert`](crate::SequenceStore::insert).
///
/// # Example
///
/// ```
/// use strand_collections::{OutOfRange, SequenceStore};
///
/// let store: SequenceStore<u32> = [10, 20].into_iter().collect();
/// let err = store.get(2).unwrap_err();
///
/// assert_eq!(err, OutOfRange { index: 2, valid: 0..2 });
/// assert_eq!(err.to_string(), "index 2 out of range 0..2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("index {index} out of range {}..{}", .valid.start, .valid.end)]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Indices the operation accepts.
    pub valid: Range<usize>,
}

impl OutOfRange {
    /// Returns `Ok(index)` if `index` lies in `valid`, otherwise the error.
    #[inline]
    pub(crate) fn check(index: usize, valid: Range<usize>) -> Result<usize, Self> {
        if valid.contains(&index) {
            Ok(index)
        } else {
            Err(Self { index, valid })
        }
    }
}
