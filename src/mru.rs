//! Fixed-capacity most-recently-used set.

use lru::LruCache;
use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Ordered set of distinct values, most recently inserted first.
///
/// Inserting a value already present moves it to the front; inserting a new
/// value into a full set evicts the least recently inserted one.
#[derive(Debug)]
pub struct MruSet<T: Hash + Eq> {
    items: LruCache<T, ()>,
}

impl<T: Hash + Eq> MruSet<T> {
    /// Create a set holding at most `capacity` values.
    ///
    /// A capacity of 0 is raised to 1; the set always holds the latest value.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: LruCache::new(Self::clamp(capacity)),
        }
    }

    fn clamp(capacity: usize) -> NonZeroUsize {
        NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
    }

    /// Insert `value` at the front.
    ///
    /// Returns the evicted value when a new value pushed the set over capacity.
    pub fn insert(&mut self, value: T) -> Option<T> {
        if self.items.contains(&value) {
            self.items.promote(&value);
            return None;
        }
        self.items.push(value, ()).map(|(evicted, _)| evicted)
    }

    /// Values from most to least recently inserted.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().map(|(value, _)| value)
    }

    /// Whether `value` is present. Does not change the order.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.cap().get()
    }

    /// Change the capacity, dropping the oldest values if it shrinks.
    ///
    /// A capacity of 0 is raised to 1, as in [`MruSet::new`].
    pub fn set_capacity(&mut self, capacity: usize) {
        self.items.resize(Self::clamp(capacity));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
