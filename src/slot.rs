//! Slot table backing the linked containers.
//!
//! Values live in a vector of optional slots addressed by index. Released
//! slots are remembered and handed out again before the table grows, so a
//! container that removes and inserts at the same rate stays the same size.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
pub(crate) struct SlotTable<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<usize>,
}

impl<T> SlotTable<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Stores `value`, reusing a vacant slot when one exists.
    pub(crate) fn allocate(&mut self, value: T) -> usize {
        if let Some(index) = self.vacant.pop() {
            self.slots[index] = Some(value);
            index
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        }
    }

    /// Takes the value out of its slot and marks the slot vacant.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not refer to a live slot.
    pub(crate) fn release(&mut self, index: usize) -> T {
        let value = self.slots[index]
            .take()
            .unwrap_or_else(|| panic!("slot {index} released twice"));
        self.vacant.push(index);
        value
    }

    /// Drops every value and forgets all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }

    /// Number of slots ever allocated, live or vacant.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Index<usize> for SlotTable<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.slots[index]
            .as_ref()
            .unwrap_or_else(|| panic!("dangling slot {index}"))
    }
}

impl<T> IndexMut<usize> for SlotTable<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.slots[index]
            .as_mut()
            .unwrap_or_else(|| panic!("dangling slot {index}"))
    }
}
