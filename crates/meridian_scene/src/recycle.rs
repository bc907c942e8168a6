//! # Slot Recycler
//!
//! A dense, index-addressed collection that reuses freed slots. Issued
//! indices are stable for the lifetime of the slot; freed slots keep their
//! last content (unspecified to readers) until reuse. No particular reuse
//! order is promised.
//!
//! This is the allocator behind the entity table: the dense backing array is
//! what makes entity ids directly usable as indices into component stores.

/// Dense slot collection with index recycling.
///
/// # Thread Safety
///
/// Not thread-safe; the owning scene serializes access.
pub struct RecycleList<T> {
    /// Dense backing storage; length = highest issued index + 1.
    items: Vec<T>,
    /// Indices of freed slots awaiting reuse.
    free: Vec<usize>,
}

impl<T> RecycleList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `value` in a fresh or reclaimed slot and returns its index.
    pub fn add(&mut self, value: T) -> usize {
        if let Some(index) = self.free.pop() {
            self.items[index] = value;
            index
        } else {
            self.items.push(value);
            self.items.len() - 1
        }
    }

    /// Frees the slot at `index` for future reuse.
    ///
    /// The slot's content is left in place and must be treated as
    /// unspecified until the slot is reissued.
    pub fn remove(&mut self, index: usize) {
        debug_assert!(index < self.items.len(), "freed an index that was never issued");
        self.free.push(index);
    }

    /// Returns the value at `index`. Unchecked beyond the dense bound.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> &T {
        &self.items[index]
    }

    /// Returns the value at `index` mutably. Unchecked beyond the dense bound.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }

    /// The dense backing slice, reclaimed slots included.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The dense backing slice, mutable.
    #[inline]
    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Length of the dense backing storage (highest issued index + 1).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no slot was ever issued.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for RecycleList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_sequential_indices_when_nothing_is_free() {
        let mut list = RecycleList::new();
        assert_eq!(list.add("a"), 0);
        assert_eq!(list.add("b"), 1);
        assert_eq!(list.add("c"), 2);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn reuses_freed_slots_without_shrinking() {
        let mut list = RecycleList::new();
        let a = list.add(10);
        let b = list.add(20);
        list.add(30);

        list.remove(a);
        list.remove(b);
        assert_eq!(list.len(), 3, "dense length keeps reclaimed slots");

        let reused = list.add(40);
        assert!(reused == a || reused == b);
        assert_eq!(*list.get(reused), 40);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn items_exposes_the_dense_backing() {
        let mut list = RecycleList::new();
        list.add(1);
        list.add(2);
        list.remove(0);

        // Reclaimed slot content is unspecified but still addressable.
        assert_eq!(list.items().len(), 2);
        assert_eq!(*list.get(1), 2);
    }
}
