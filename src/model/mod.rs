//! Pure data structures implementing the [`Entity`](crate::framework::Entity) trait.

pub mod product;
pub mod user;

pub use product::*;
pub use user::*;
