//! # Mock Repository
//!
//! Utilities for testing services in isolation.
//!
//! [`MockRepository`] implements all four capability traits, but instead of storing anything it
//! answers each call from a queue of scripted expectations. Hand it to a service through the same
//! narrow handle the service would get in production (`Rc<dyn Readable<T>>`, ...) and assert on
//! what comes back.
//!
//! Calls are matched strictly in order. A call that doesn't match the next expectation (wrong
//! operation or wrong id) panics, which fails the test at the offending line.

use crate::framework::{Creatable, Deletable, Entity, Readable, Updatable};
use std::cell::RefCell;
use std::collections::VecDeque;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected call on the mock repository.
#[derive(Debug)]
enum Expectation<T: Entity> {
    Create { assign: Option<T::Id> },
    Get { id: T::Id, response: Option<T> },
    GetAll { response: Vec<T> },
    Exists { id: T::Id, response: bool },
    Update { id: T::Id, response: bool },
    Delete { id: T::Id, response: bool },
}

/// A mock repository with expectation tracking for fluent testing.
///
/// # Example
/// ```
/// use isp_crud::framework::mock::MockRepository;
/// use isp_crud::framework::Readable;
/// use isp_crud::model::{User, UserId};
/// use isp_crud::services::ReadService;
/// use std::rc::Rc;
///
/// let mock = Rc::new(MockRepository::<User>::new());
/// mock.expect_exists(UserId(7)).return_value(true);
///
/// let service = ReadService::<User>::new(mock.clone());
/// assert!(service.exists(UserId(7)));
///
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Debug)]
pub struct MockRepository<T: Entity> {
    expectations: RefCell<VecDeque<Expectation<T>>>,
}

impl<T: Entity> MockRepository<T> {
    /// Creates a new mock repository with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: RefCell::new(VecDeque::new()),
        }
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> CreateExpectationBuilder<'_, T> {
        CreateExpectationBuilder { mock: self }
    }

    /// Expects a `get_by_id` call for `id`.
    pub fn expect_get(&self, id: T::Id) -> GetExpectationBuilder<'_, T> {
        GetExpectationBuilder { mock: self, id }
    }

    /// Expects a `get_all` call.
    pub fn expect_get_all(&self) -> GetAllExpectationBuilder<'_, T> {
        GetAllExpectationBuilder { mock: self }
    }

    /// Expects an `exists` call for `id`.
    pub fn expect_exists(&self, id: T::Id) -> FlagExpectationBuilder<'_, T> {
        FlagExpectationBuilder { mock: self, id, kind: FlagKind::Exists }
    }

    /// Expects an `update` call carrying an entity with identity `id`.
    pub fn expect_update(&self, id: T::Id) -> FlagExpectationBuilder<'_, T> {
        FlagExpectationBuilder { mock: self, id, kind: FlagKind::Update }
    }

    /// Expects a `delete` call for `id`.
    pub fn expect_delete(&self, id: T::Id) -> FlagExpectationBuilder<'_, T> {
        FlagExpectationBuilder { mock: self, id, kind: FlagKind::Delete }
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.expectations.borrow().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.borrow_mut().push_back(expectation);
    }

    fn next(&self, call: &str) -> Expectation<T> {
        match self.expectations.borrow_mut().pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected {call} call: no expectations left"),
        }
    }
}

impl<T: Entity> Default for MockRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `create` expectations.
#[derive(Debug)]
pub struct CreateExpectationBuilder<'a, T: Entity> {
    mock: &'a MockRepository<T>,
}

impl<T: Entity> CreateExpectationBuilder<'_, T> {
    /// The call succeeds and stamps `id` on the caller's entity.
    pub fn assign(self, id: T::Id) {
        self.mock.push(Expectation::Create { assign: Some(id) });
    }

    /// The call reports failure and leaves the entity untouched.
    pub fn reject(self) {
        self.mock.push(Expectation::Create { assign: None });
    }
}

/// Builder for `get_by_id` expectations.
#[derive(Debug)]
pub struct GetExpectationBuilder<'a, T: Entity> {
    mock: &'a MockRepository<T>,
    id: T::Id,
}

impl<T: Entity> GetExpectationBuilder<'_, T> {
    /// Sets the snapshot the call returns.
    pub fn return_value(self, value: Option<T>) {
        self.mock.push(Expectation::Get {
            id: self.id,
            response: value,
        });
    }
}

/// Builder for `get_all` expectations.
#[derive(Debug)]
pub struct GetAllExpectationBuilder<'a, T: Entity> {
    mock: &'a MockRepository<T>,
}

impl<T: Entity> GetAllExpectationBuilder<'_, T> {
    /// Sets the snapshots the call returns.
    pub fn return_value(self, values: Vec<T>) {
        self.mock.push(Expectation::GetAll { response: values });
    }
}

#[derive(Debug, Clone, Copy)]
enum FlagKind {
    Exists,
    Update,
    Delete,
}

/// Builder for the calls answered with a plain flag: `exists`, `update`, `delete`.
#[derive(Debug)]
pub struct FlagExpectationBuilder<'a, T: Entity> {
    mock: &'a MockRepository<T>,
    id: T::Id,
    kind: FlagKind,
}

impl<T: Entity> FlagExpectationBuilder<'_, T> {
    /// Sets the flag the call returns.
    pub fn return_value(self, response: bool) {
        let id = self.id;
        self.mock.push(match self.kind {
            FlagKind::Exists => Expectation::Exists { id, response },
            FlagKind::Update => Expectation::Update { id, response },
            FlagKind::Delete => Expectation::Delete { id, response },
        });
    }
}

// =============================================================================
// CAPABILITY IMPLEMENTATIONS
// =============================================================================

impl<T: Entity> Creatable<T> for MockRepository<T> {
    fn create(&self, entity: &mut T) -> bool {
        match self.next("create") {
            Expectation::Create { assign: Some(id) } => {
                entity.assign_id(id);
                true
            }
            Expectation::Create { assign: None } => false,
            other => panic!("Unexpected create call, expected {other:?}"),
        }
    }
}

impl<T: Entity> Readable<T> for MockRepository<T> {
    fn get_by_id(&self, id: T::Id) -> Option<T> {
        match self.next("get_by_id") {
            Expectation::Get { id: expected, response } => {
                assert_eq!(id, expected, "get_by_id called with unexpected id");
                response
            }
            other => panic!("Unexpected get_by_id call, expected {other:?}"),
        }
    }

    fn get_all(&self) -> Vec<T> {
        match self.next("get_all") {
            Expectation::GetAll { response } => response,
            other => panic!("Unexpected get_all call, expected {other:?}"),
        }
    }

    fn exists(&self, id: T::Id) -> bool {
        match self.next("exists") {
            Expectation::Exists { id: expected, response } => {
                assert_eq!(id, expected, "exists called with unexpected id");
                response
            }
            other => panic!("Unexpected exists call, expected {other:?}"),
        }
    }
}

impl<T: Entity> Updatable<T> for MockRepository<T> {
    fn update(&self, entity: T) -> bool {
        match self.next("update") {
            Expectation::Update { id: expected, response } => {
                assert_eq!(entity.id(), expected, "update called with unexpected id");
                response
            }
            other => panic!("Unexpected update call, expected {other:?}"),
        }
    }
}

impl<T: Entity> Deletable<T> for MockRepository<T> {
    fn delete(&self, id: T::Id) -> bool {
        match self.next("delete") {
            Expectation::Delete { id: expected, response } => {
                assert_eq!(id, expected, "delete called with unexpected id");
                response
            }
            other => panic!("Unexpected delete call, expected {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};
    use rust_decimal::Decimal;

    fn widget() -> Product {
        Product::new("Widget", "A widget", Decimal::new(999, 2), 5)
    }

    #[test]
    fn test_mock_repository_with_expectations() {
        let mock = MockRepository::<Product>::new();

        // Set up expectations
        mock.expect_create().assign(ProductId(7));
        let mut stored = widget();
        stored.id = ProductId(7);
        mock.expect_get(ProductId(7)).return_value(Some(stored.clone()));
        mock.expect_delete(ProductId(7)).return_value(true);

        // Execute operations
        let mut product = widget();
        assert!(mock.create(&mut product));
        assert_eq!(product.id, ProductId(7));
        assert_eq!(mock.get_by_id(ProductId(7)), Some(stored));
        assert!(mock.delete(ProductId(7)));

        // Verify all expectations were met
        mock.verify();
    }

    #[test]
    fn test_rejected_create_leaves_entity_unassigned() {
        let mock = MockRepository::<Product>::new();
        mock.expect_create().reject();

        let mut product = widget();
        assert!(!mock.create(&mut product));
        assert!(product.is_unassigned());
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_leftovers() {
        let mock = MockRepository::<Product>::new();
        mock.expect_get_all().return_value(Vec::new());
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected update call")]
    fn test_out_of_order_call_panics() {
        let mock = MockRepository::<Product>::new();
        mock.expect_exists(ProductId(1)).return_value(true);
        let mut product = widget();
        product.id = ProductId(1);
        mock.update(product);
    }
}
