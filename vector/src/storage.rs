//! Growable backing storage shared by every vector in this crate.
//!
//! A [`Storage`] owns a block of zero-initialized units. Its *capacity* is the
//! number of allocated units and its *length* is the number of units that are
//! currently addressable. Capacity is only ever increased, and it is increased
//! according to a [`GrowthPolicy`].

use log::trace;

use crate::error::{Error, Result};

/// How a [`Storage`] picks its new capacity when it needs to grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrowthPolicy {
    /// Allocate exactly the number of units that were requested.
    Exact,
    /// Allocate at least twice the current capacity, and never less than `min`
    /// units.
    Doubling { min: usize },
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::Doubling { min: 4 }
    }
}

impl GrowthPolicy {
    /// The capacity a storage of capacity `current` should have in order to
    /// hold `requested` units.
    ///
    /// The result is never smaller than `current`.
    pub fn next_capacity(self, current: usize, requested: usize) -> usize {
        if requested <= current {
            return current;
        }

        match self {
            GrowthPolicy::Exact => requested,
            GrowthPolicy::Doubling { min } => requested.max(current.saturating_mul(2)).max(min),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Storage<T> {
    // Every unit in `units` is initialized; the ones at `len..` are always
    // `T::default()`.
    units: Vec<T>,
    len: usize,
    policy: GrowthPolicy,
}

impl<T: Copy + Default> Storage<T> {
    pub fn new(policy: GrowthPolicy) -> Self {
        Storage {
            units: Vec::new(),
            len: 0,
            policy,
        }
    }

    /// Creates a storage with `len` addressable units, all zero.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails, as `vec![0; len]` does.
    pub fn with_len(len: usize, policy: GrowthPolicy) -> Self {
        Storage {
            units: vec![T::default(); policy.next_capacity(0, len)],
            len,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of allocated (and zero-initialized) units.
    pub fn capacity(&self) -> usize {
        self.units.len()
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Makes sure that at least `min_units` units are allocated, without
    /// changing the length.
    ///
    /// If the allocation fails, the storage is left as it was and
    /// [`Error::Alloc`] is returned.
    pub fn ensure_capacity(&mut self, min_units: usize) -> Result<()> {
        let old = self.capacity();
        let new = self.policy.next_capacity(old, min_units);
        if new > old {
            trace!("storage: growing capacity {old} -> {new} units");
            self.units
                .try_reserve_exact(new - old)
                .map_err(|_| Error::Alloc { requested: new })?;
            self.units.resize(new, T::default());
        }
        Ok(())
    }

    /// Extends the length to at least `min_len`, growing the allocation if
    /// necessary. Never shrinks.
    pub fn grow_to(&mut self, min_len: usize) -> Result<()> {
        self.ensure_capacity(min_len)?;
        self.len = self.len.max(min_len);
        Ok(())
    }

    /// Appends one zero unit and returns its index, for callers that have no
    /// way to report an allocation failure.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails, as `Vec::push` does.
    pub(crate) fn push_zero(&mut self) -> usize {
        let idx = self.len;
        if let Err(e) = self.grow_to(idx + 1) {
            panic!("{e}");
        }
        idx
    }

    /// The unit at `idx`, or `None` if `idx` is not addressable.
    pub fn get(&self, idx: usize) -> Option<T> {
        self.as_slice().get(idx).copied()
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        let len = self.len;
        self.units[..len].get_mut(idx)
    }

    /// The addressable units.
    pub fn as_slice(&self) -> &[T] {
        &self.units[..self.len]
    }

    pub fn check_invariants(&self)
    where
        T: PartialEq + std::fmt::Debug,
    {
        assert!(self.len <= self.units.len());
        assert!(self.units[self.len..].iter().all(|u| *u == T::default()));
    }
}

impl<T: Copy + Default> Default for Storage<T> {
    fn default() -> Self {
        Self::new(GrowthPolicy::default())
    }
}

// Two storages are equal if they hold the same addressable units, regardless of
// how much they have allocated.
impl<T: Copy + Default + PartialEq> PartialEq for Storage<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Default + Eq> Eq for Storage<T> {}

impl<T: Copy + Default + std::hash::Hash> std::hash::Hash for Storage<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

/// Validates a write index. Negative indices can't be written to.
pub(crate) fn write_index(index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| Error::Index { index })
}

/// Converts a read index to a position in `[0, len)`, if it is one.
pub(crate) fn read_index(index: isize, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}
