//! # Capability Traits
//!
//! The CRUD surface split into four independent traits. A consumer names only the ones it uses:
//! a report holds `Rc<dyn Readable<Product>>` and has no way to reach `create`, `update` or
//! `delete`, since those methods are simply not on the type it was given.
//!
//! | Trait          | Operations                          | Mutates |
//! |----------------|-------------------------------------|---------|
//! | [`Creatable`]  | `create`                            | yes     |
//! | [`Readable`]   | `get_by_id`, `get_all`, `exists`    | no      |
//! | [`Updatable`]  | `update`                            | yes     |
//! | [`Deletable`]  | `delete`                            | yes     |
//!
//! Every method takes `&self`. Implementors keep their state behind interior mutability, so
//! several narrow handles (`Rc<dyn Readable<T>>`, `Rc<dyn Creatable<T>>`, ...) can point at the
//! same repository at once.
//!
//! Failures are reported the plain way: `false` from mutating calls, `None` from a lookup miss.

use crate::framework::Entity;

/// The "C" of CRUD.
pub trait Creatable<T: Entity> {
    /// Stores a snapshot of `entity` under a freshly assigned identity.
    ///
    /// The identity is written back into `entity`, so the caller can read it after the call.
    /// Returns whether the entity was stored.
    fn create(&self, entity: &mut T) -> bool;
}

/// The "R" of CRUD. None of these methods change state.
pub trait Readable<T: Entity> {
    /// Fetch a snapshot of the entity with the given identity.
    fn get_by_id(&self, id: T::Id) -> Option<T>;

    /// Snapshots of every stored entity, in creation order.
    fn get_all(&self) -> Vec<T>;

    /// Whether an entity with the given identity is stored.
    fn exists(&self, id: T::Id) -> bool;
}

/// The "U" of CRUD.
pub trait Updatable<T: Entity> {
    /// Replaces the stored entity that has the same identity as `entity`.
    ///
    /// The whole entity is replaced; there is no partial update. Returns `false` when no entity
    /// with that identity exists.
    fn update(&self, entity: T) -> bool;
}

/// The "D" of CRUD.
pub trait Deletable<T: Entity> {
    /// Removes the entity with the given identity. Returns `false` when none matched.
    fn delete(&self, id: T::Id) -> bool;
}
