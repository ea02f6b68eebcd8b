//! # Write Service
//!
//! The mutating half of the CRUD surface. The service keeps one handle per capability it uses
//! (create, update, delete) and none for reading.

use crate::framework::{Creatable, Deletable, Entity, Updatable};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Service exposing [`Creatable`], [`Updatable`] and [`Deletable`], and nothing else.
pub struct WriteService<T: Entity> {
    creator: Rc<dyn Creatable<T>>,
    updater: Rc<dyn Updatable<T>>,
    deleter: Rc<dyn Deletable<T>>,
}

impl<T: Entity> WriteService<T> {
    /// Builds the service from three independent handles. They usually point at the same
    /// repository, but nothing requires it.
    pub fn new(
        creator: Rc<dyn Creatable<T>>,
        updater: Rc<dyn Updatable<T>>,
        deleter: Rc<dyn Deletable<T>>,
    ) -> Self {
        Self {
            creator,
            updater,
            deleter,
        }
    }

    /// Builds the service over one store that provides all three capabilities.
    pub fn over<S>(store: &Rc<S>) -> Self
    where
        S: Creatable<T> + Updatable<T> + Deletable<T> + 'static,
    {
        Self::new(store.clone(), store.clone(), store.clone())
    }
}

impl<T: Entity> Clone for WriteService<T> {
    fn clone(&self) -> Self {
        Self {
            creator: Rc::clone(&self.creator),
            updater: Rc::clone(&self.updater),
            deleter: Rc::clone(&self.deleter),
        }
    }
}

impl<T: Entity> fmt::Debug for WriteService<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteService").finish_non_exhaustive()
    }
}

impl<T: Entity> Creatable<T> for WriteService<T> {
    #[instrument(skip(self))]
    fn create(&self, entity: &mut T) -> bool {
        debug!("Forwarding request");
        self.creator.create(entity)
    }
}

impl<T: Entity> Updatable<T> for WriteService<T> {
    #[instrument(skip(self))]
    fn update(&self, entity: T) -> bool {
        debug!("Forwarding request");
        self.updater.update(entity)
    }
}

impl<T: Entity> Deletable<T> for WriteService<T> {
    #[instrument(skip(self))]
    fn delete(&self, id: T::Id) -> bool {
        debug!("Forwarding request");
        self.deleter.delete(id)
    }
}
