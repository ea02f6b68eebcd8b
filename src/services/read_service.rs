//! # Read Service
//!
//! A read-only front for any repository. It is built from an `Rc<dyn Readable<T>>`, so it has
//! no path to the create/update/delete half of the repository, even though the value behind the
//! handle implements all of it.

use crate::framework::{Entity, Readable};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Service exposing only the [`Readable`] capability.
pub struct ReadService<T: Entity> {
    reader: Rc<dyn Readable<T>>,
}

impl<T: Entity> ReadService<T> {
    pub fn new(reader: Rc<dyn Readable<T>>) -> Self {
        Self { reader }
    }
}

impl<T: Entity> Clone for ReadService<T> {
    fn clone(&self) -> Self {
        Self {
            reader: Rc::clone(&self.reader),
        }
    }
}

impl<T: Entity> fmt::Debug for ReadService<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadService").finish_non_exhaustive()
    }
}

impl<T: Entity> Readable<T> for ReadService<T> {
    #[instrument(skip(self))]
    fn get_by_id(&self, id: T::Id) -> Option<T> {
        debug!("Forwarding request");
        self.reader.get_by_id(id)
    }

    #[instrument(skip(self))]
    fn get_all(&self) -> Vec<T> {
        debug!("Forwarding request");
        self.reader.get_all()
    }

    #[instrument(skip(self))]
    fn exists(&self, id: T::Id) -> bool {
        debug!("Forwarding request");
        self.reader.exists(id)
    }
}
