//! # Arena Storage
//!
//! Backing store for [`InMemoryRepository`](crate::framework::InMemoryRepository).
//!
//! Entities live in a growable vector of slots kept in insertion order. A separate
//! identity → slot index map makes lookups, replacements and removals O(1) instead of a scan.
//! Removing an entity leaves a tombstone (`None`) so the remaining slots keep their positions;
//! once tombstones outnumber live entities the slots are compacted and the index rebuilt.

use crate::framework::Entity;
use std::collections::HashMap;

/// Ordered slot storage with an identity index.
#[derive(Debug)]
pub struct Arena<T: Entity> {
    slots: Vec<Option<T>>,
    index: HashMap<T::Id, usize>,
}

impl<T: Entity> Arena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        let slot = *self.index.get(&id)?;
        self.slots.get(slot)?.as_ref()
    }

    /// Live entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    /// Appends an entity at the end. The caller guarantees its identity is not stored yet.
    pub fn push(&mut self, entity: T) {
        self.index.insert(entity.id(), self.slots.len());
        self.slots.push(Some(entity));
    }

    /// Replaces the entity sharing `entity`'s identity, keeping its slot.
    ///
    /// Returns the previous value, or hands `entity` back in `Err` if nothing matched.
    pub fn replace(&mut self, entity: T) -> Result<T, T> {
        let Some(&slot) = self.index.get(&entity.id()) else {
            return Err(entity);
        };
        match self.slots.get_mut(slot) {
            Some(Some(stored)) => Ok(std::mem::replace(stored, entity)),
            _ => Err(entity),
        }
    }

    /// Removes and returns the entity with the given identity.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let slot = self.index.remove(&id)?;
        let removed = self.slots.get_mut(slot)?.take();
        if self.tombstones() > self.len() {
            self.compact();
        }
        removed
    }

    fn tombstones(&self) -> usize {
        self.slots.len() - self.index.len()
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        self.index = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entity)| entity.as_ref().map(|e| (e.id(), slot)))
            .collect();
    }
}

impl<T: Entity> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
