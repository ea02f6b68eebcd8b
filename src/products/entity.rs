//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that enables [`Product`] to be stored in the generic [`crate::framework::InMemoryRepository`].

use crate::framework::Entity;
use crate::model::{Product, ProductId};

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    /// Stamps the repository-assigned identity. Nothing else about the product changes.
    fn assign_id(&mut self, id: ProductId) {
        self.id = id;
    }
}
