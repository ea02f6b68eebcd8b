//! User-specific repository wiring and directory reporting.

pub mod entity;
pub mod report;

pub use report::*;

use crate::model::User;
use std::rc::Rc;

crate::resource_types!(User);

/// Creates a new, empty User repository behind a shared handle.
pub fn new() -> Rc<UserRepository> {
    Rc::new(UserRepository::new())
}
