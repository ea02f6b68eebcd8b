//! # Entity Trait
//!
//! The `Entity` trait is the contract every stored resource (Product, User, ...) implements so the
//! generic [`InMemoryRepository`](crate::framework::InMemoryRepository) can manage it. It only
//! describes identity: what the id type is, how to read it, and how the repository stamps a fresh
//! one on creation.
//!
//! # Architecture Note
//! By keeping identity behind one small trait we write the repository *once* and reuse it for
//! every entity type. The associated `Id` type keeps ids apart: a `ProductId` can't be handed to
//! the user repository, the compiler refuses it.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be stored in a repository.
pub trait Entity: Clone + Debug + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    /// The value built from `0` means "not assigned yet".
    type Id: Copy + Eq + Hash + Display + Debug + From<u32>;

    /// Current identity of the entity.
    fn id(&self) -> Self::Id;

    /// Stamp a repository-assigned identity on the entity.
    /// Called exactly once per entity, by `create`.
    fn assign_id(&mut self, id: Self::Id);

    /// Whether the entity still carries the unassigned identity.
    fn is_unassigned(&self) -> bool {
        self.id() == Self::Id::from(0)
    }
}
