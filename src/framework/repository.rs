//! # Generic In-Memory Repository
//!
//! This module defines `InMemoryRepository`, the one concrete type that satisfies all four
//! capability traits. It owns the [`Arena`] for one entity type and the identity counter, and is
//! what every service ultimately talks to through a narrower handle.

use crate::framework::{Arena, Creatable, Deletable, Entity, Readable, RepositoryError, Updatable};
use std::cell::{Cell, RefCell};
use tracing::{debug, error, info, warn};

/// The generic repository that manages a collection of entities in memory.
///
/// # Architecture Note
/// The repository owns its state (`store`) exclusively. Capability methods take `&self` and
/// mutate through a `RefCell`, which lets a read-only service and a write-only service share one
/// `Rc<InMemoryRepository<T>>`, each seeing it through a different trait object.
///
/// **Concurrency Model**:
/// Single-threaded. `RefCell` and `Cell` make the type `!Sync`, so the compiler keeps it on one
/// thread. No borrow is held across a call boundary, so the `RefCell` never panics.
///
/// # Identities
/// The counter starts at 1 and only ever grows: ids are strictly increasing in creation order
/// and are never handed out again after a delete.
#[derive(Debug)]
pub struct InMemoryRepository<T: Entity> {
    store: RefCell<Arena<T>>,
    next_id: Cell<u32>,
    entity_type: &'static str,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        // Extract just the type name (e.g., "Product" instead of "isp_crud::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        Self {
            store: RefCell::new(Arena::with_capacity(capacity)),
            next_id: Cell::new(1),
            entity_type,
        }
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Stores `entity` under the next identity and returns that identity.
    ///
    /// Whatever id the entity carried before is overwritten. `u32::MAX` is never handed out:
    /// once the counter reaches it every further insert fails with
    /// [`RepositoryError::Exhausted`] and the collection is left unchanged.
    pub fn insert(&self, mut entity: T) -> Result<T::Id, RepositoryError> {
        let entity_type = self.entity_type;
        debug!(entity_type, ?entity, "Create");

        let current = self.next_id.get();
        let Some(following) = current.checked_add(1) else {
            error!(entity_type, "Identity counter exhausted");
            return Err(RepositoryError::Exhausted(entity_type.to_string()));
        };
        self.next_id.set(following);

        let id = T::Id::from(current);
        entity.assign_id(id);

        let mut store = self.store.borrow_mut();
        store.push(entity);
        info!(entity_type, %id, size = store.len(), "Created");
        Ok(id)
    }

    /// Replaces the stored entity with the same identity and returns the previous value.
    pub fn try_update(&self, entity: T) -> Result<T, RepositoryError> {
        let entity_type = self.entity_type;
        let id = entity.id();
        debug!(entity_type, %id, ?entity, "Update");

        if entity.is_unassigned() {
            warn!(entity_type, "Update of an entity that was never created");
            return Err(RepositoryError::Unassigned(entity_type.to_string()));
        }

        match self.store.borrow_mut().replace(entity) {
            Ok(previous) => {
                info!(entity_type, %id, "Updated");
                Ok(previous)
            }
            Err(_) => {
                warn!(entity_type, %id, "Not found");
                Err(RepositoryError::NotFound(id.to_string()))
            }
        }
    }

    /// Removes the entity with the given identity and returns it.
    pub fn try_delete(&self, id: T::Id) -> Result<T, RepositoryError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, "Delete");

        let mut store = self.store.borrow_mut();
        match store.remove(id) {
            Some(removed) => {
                info!(entity_type, %id, size = store.len(), "Deleted");
                Ok(removed)
            }
            None => {
                warn!(entity_type, %id, "Not found");
                Err(RepositoryError::NotFound(id.to_string()))
            }
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Creatable<T> for InMemoryRepository<T> {
    fn create(&self, entity: &mut T) -> bool {
        match self.insert(entity.clone()) {
            Ok(id) => {
                entity.assign_id(id);
                true
            }
            Err(_) => false,
        }
    }
}

impl<T: Entity> Readable<T> for InMemoryRepository<T> {
    fn get_by_id(&self, id: T::Id) -> Option<T> {
        let item = self.store.borrow().get(id).cloned();
        let found = item.is_some();
        debug!(entity_type = self.entity_type, %id, found, "Get");
        item
    }

    fn get_all(&self) -> Vec<T> {
        let items: Vec<T> = self.store.borrow().iter().cloned().collect();
        debug!(entity_type = self.entity_type, size = items.len(), "GetAll");
        items
    }

    fn exists(&self, id: T::Id) -> bool {
        self.store.borrow().contains(id)
    }
}

impl<T: Entity> Updatable<T> for InMemoryRepository<T> {
    fn update(&self, entity: T) -> bool {
        self.try_update(entity).is_ok()
    }
}

impl<T: Entity> Deletable<T> for InMemoryRepository<T> {
    fn delete(&self, id: T::Id) -> bool {
        self.try_delete(id).is_ok()
    }
}
