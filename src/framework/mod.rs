//! Generic building blocks for segregated-capability repositories.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that stored resource types implement
//! - [`Creatable`], [`Readable`], [`Updatable`], [`Deletable`] - The four capability traits
//! - [`InMemoryRepository`] - Generic repository implementing all four capabilities
//! - [`RepositoryError`] - Errors of the fallible repository API
//!
//! # Testing
//!
//! See [`mock`] module for a scripted stand-in that services can be tested against.

pub mod arena;
pub mod capability;
pub mod entity;
pub mod error;
pub mod mock;
pub mod repository;

// Re-export core types for convenience
pub use arena::Arena;
pub use capability::{Creatable, Deletable, Readable, Updatable};
pub use entity::Entity;
pub use error::RepositoryError;
pub use repository::InMemoryRepository;

/// Declares the per-entity type names (`<Entity>Repository`, `<Entity>ReadService`,
/// `<Entity>WriteService`) for an entity type that is in scope.
#[macro_export]
macro_rules! resource_types {
    ($entity:ident) => {
        $crate::paste::paste! {
            #[doc = "In-memory repository of [`" $entity "`] values."]
            pub type [<$entity Repository>] = $crate::framework::InMemoryRepository<$entity>;

            #[doc = "Read-only service over [`" $entity "`] values."]
            pub type [<$entity ReadService>] = $crate::services::ReadService<$entity>;

            #[doc = "Create/update/delete service over [`" $entity "`] values."]
            pub type [<$entity WriteService>] = $crate::services::WriteService<$entity>;
        }
    };
}
