//! Product-specific repository wiring and inventory reporting.

pub mod entity;
pub mod report;

pub use report::*;

use crate::model::Product;
use std::rc::Rc;

crate::resource_types!(Product);

/// Creates a new, empty Product repository behind a shared handle.
pub fn new() -> Rc<ProductRepository> {
    Rc::new(ProductRepository::new())
}
