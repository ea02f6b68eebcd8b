use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product in the inventory.
///
/// # Repository
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be stored in an [`InMemoryRepository`](crate::framework::InMemoryRepository).
///
/// See [`impl Entity for Product`](#impl-Entity-for-Product) for the identity rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
}

impl Product {
    /// Creates a new, not yet stored Product.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `description` - Free-form description
    /// * `price` - Unit price
    /// * `stock` - Units on hand
    ///
    /// # Notes
    /// The `id` field is left unassigned and will be set by the repository on `create`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: u32,
    ) -> Self {
        Self {
            id: ProductId::default(),
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }

    /// Same as [`Product::new`] but carrying an existing identity, for whole-entity updates.
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: u32,
    ) -> Self {
        Self {
            id,
            ..Self::new(name, description, price, stock)
        }
    }
}
