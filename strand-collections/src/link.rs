//! Sentinel-based arena handles.
//!
//! Nodes refer to their successor by slot number in the arena instead of by
//! pointer. A reserved sentinel (`usize::MAX`) stands in for "no successor",
//! which keeps [`Link`] the size of a `usize` where `Option<usize>` would
//! double it.

use core::fmt;

/// Handle to a node slot in the arena, or the `NONE` sentinel.
///
/// # Example
///
/// ```
/// use strand_collections::Link;
///
/// let link = Link::from_slot(3);
/// assert!(link.is_some());
/// assert_eq!(link.slot(), Some(3));
///
/// assert!(Link::NONE.is_none());
/// assert_eq!(Link::NONE.slot(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link(usize);

impl Link {
    /// Sentinel value representing "no node".
    pub const NONE: Self = Link(usize::MAX);

    /// Creates a link to the given arena slot.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `slot` collides with the sentinel.
    #[inline]
    pub const fn from_slot(slot: usize) -> Self {
        debug_assert!(slot != usize::MAX, "slot collides with NONE sentinel");
        Link(slot)
    }

    /// Returns the arena slot, or `None` for the sentinel.
    #[inline]
    pub const fn slot(self) -> Option<usize> {
        if self.is_none() { None } else { Some(self.0) }
    }

    /// Returns the raw slot number without checking for the sentinel.
    #[inline]
    pub(crate) const fn raw(self) -> usize {
        self.0
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == usize::MAX
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot() {
            Some(slot) => write!(f, "Link({slot})"),
            None => f.write_str("Link(NONE)"),
        }
    }
}
