//! Sparse (position-list) bit storage.
//!
//! Stores the set positions themselves, in insertion order, together with a
//! high-water mark of the highest position ever set. The list pays off only
//! while the set is small relative to its addressable range; once it stops
//! paying, the owner promotes it to the dense form and the list is gone for
//! good.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::dense::DenseBits;

/// A sparse set never promotes below this many stored positions, no matter
/// how small its addressable range is.
pub(crate) const PROMOTE_FLOOR: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SparseBits {
    /// Set positions in insertion order, no duplicates.
    offsets: Vec<u32>,
    /// Highest position ever set. Survives clearing.
    max_set: Option<u32>,
}

impl SparseBits {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Builds from a caller-supplied position list by replaying it through
    /// [`set`](Self::set), which collapses duplicates.
    pub(crate) fn from_offsets(offsets: Vec<u32>) -> Self {
        let mut sparse = Self::new();
        for index in offsets {
            sparse.set(index, true);
        }
        sparse
    }

    /// Addressable bits, derived from the high-water mark rather than the
    /// stored count: 0 until a bit is set, `max_set + 1` after.
    #[inline]
    pub(crate) fn len_bits(&self) -> u64 {
        match self.max_set {
            Some(max) => u64::from(max) + 1,
            None => 0,
        }
    }

    pub(crate) fn get(&self, index: u32) -> bool {
        self.offsets.contains(&index)
    }

    /// Remove-then-append: re-setting a position moves it to the back of the
    /// iteration order.
    pub(crate) fn set(&mut self, index: u32, value: bool) {
        self.offsets.retain(|&stored| stored != index);
        if value {
            self.offsets.push(index);
            self.max_set = Some(self.max_set.map_or(index, |max| max.max(index)));
        }
    }

    #[inline]
    pub(crate) fn count_ones(&self) -> u64 {
        self.offsets.len() as u64
    }

    #[inline]
    pub(crate) fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Dense storage for the current range would cost `(max_set >> 5) + 1`
    /// words; the list stops paying for itself once it outgrows both that
    /// and [`PROMOTE_FLOOR`].
    pub(crate) fn should_promote(&self) -> bool {
        let threshold = match self.max_set {
            Some(max) => (max >> 5) as usize + 1,
            None => return false,
        };
        self.offsets.len() > threshold && self.offsets.len() > PROMOTE_FLOOR
    }

    /// Replays every stored position into a dense array.
    pub(crate) fn to_dense(&self) -> DenseBits {
        let mut dense = match self.max_set {
            Some(max) => DenseBits::with_capacity_for(max),
            None => DenseBits::new(),
        };
        for &index in &self.offsets {
            dense.set(index, true);
        }
        dense
    }
}
