//! Sparse entity storage
//!
//! Removing an entity leaves an empty slot that the next insert reuses, so
//! indices stay stable while iterating and freshly spawned entities land in
//! the lowest free slot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotVec<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for SlotVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotVec<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Store `value` in the first empty slot, growing if none is free.
    /// Returns the slot index.
    pub fn insert(&mut self, value: T) -> usize {
        if let Some(index) = self.slots.iter().position(Option::is_none) {
            self.slots[index] = Some(value);
            index
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        }
    }

    /// Empty the slot at `index`, returning what was there
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Number of slots, live or empty
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Live entities with their slot index, lowest index first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|v| (i, v)))
    }
}
