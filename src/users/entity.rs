//! Entity trait implementation for the User domain type.
//!
//! See the trait implementation on [`User`] for method documentation.

use crate::framework::Entity;
use crate::model::{User, UserId};

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }

    fn assign_id(&mut self, id: UserId) {
        self.id = id;
    }
}
