//! Consumers typed to a single capability, exercised against both the real repository and the
//! scripted mock.

use isp_crud::framework::mock::MockRepository;
use isp_crud::framework::{Creatable, Deletable, Readable, RepositoryError, Updatable};
use isp_crud::model::{Product, ProductId, User, UserId};
use isp_crud::products::{self, ProductReportService};
use isp_crud::services::{ReadService, WriteService};
use isp_crud::users;
use rust_decimal::Decimal;
use std::rc::Rc;

/// Generic consumer that needs nothing but `Readable`.
fn count_active(reader: &dyn Readable<User>) -> usize {
    reader.get_all().iter().filter(|u| u.active).count()
}

/// Generic consumer that needs nothing but `Deletable`.
fn purge(deleter: &dyn Deletable<Product>, ids: &[u32]) -> usize {
    ids.iter().filter(|&&id| deleter.delete(ProductId(id))).count()
}

#[test]
fn test_narrow_handles_share_one_repository() {
    let repo = users::new();
    let reader: Rc<dyn Readable<User>> = repo.clone();
    let creator: Rc<dyn Creatable<User>> = repo.clone();

    creator.create(&mut User::new("a", "a@example.com", "x", "USER", true));
    creator.create(&mut User::new("b", "b@example.com", "y", "USER", false));

    assert_eq!(count_active(reader.as_ref()), 1);
    assert_eq!(repo.len(), 2);
}

#[test]
fn test_writes_through_one_service_are_seen_by_another() {
    let repo = products::new();
    let writer = WriteService::<Product>::over(&repo);
    let reader = ReadService::<Product>::new(repo.clone());

    let mut keyboard = Product::new("Teclado", "RGB", Decimal::new(8999, 2), 30);
    assert!(writer.create(&mut keyboard));
    assert!(reader.exists(keyboard.id));

    assert_eq!(purge(&writer, &[keyboard.id.0, 77]), 1);
    assert!(!reader.exists(keyboard.id));
}

#[test]
fn test_report_service_against_mock() {
    let mock = Rc::new(MockRepository::<Product>::new());
    let stock = |name: &str, stock| {
        let mut p = Product::new(name, "", Decimal::ONE, stock);
        p.id = ProductId(stock);
        p
    };
    mock.expect_get_all()
        .return_value(vec![stock("Laptop", 10), stock("Mouse", 50), stock("Cable", 8)]);
    mock.expect_exists(ProductId(10)).return_value(true);

    let reports = ProductReportService::new(mock.clone());
    let low: Vec<u32> = reports.low_stock().into_iter().map(|p| p.stock).collect();
    assert_eq!(low, vec![10, 8]);
    assert!(reports.exists(ProductId(10)));

    mock.verify();
}

#[test]
fn test_write_service_reports_rejections() {
    let mock = Rc::new(MockRepository::<User>::new());
    mock.expect_create().reject();
    mock.expect_update(UserId(3)).return_value(false);

    let writer = WriteService::<User>::over(&mock);
    let mut user = User::new("ghost", "ghost@example.com", "pw", "USER", true);
    assert!(!writer.create(&mut user));
    assert_eq!(user.id, UserId(0));

    user.id = UserId(3);
    assert!(!writer.update(user));
    mock.verify();
}

#[test]
fn test_fallible_api_reports_reason() {
    let repo = products::new();
    let id = repo.insert(Product::new("Mouse", "", Decimal::new(2550, 2), 50)).unwrap();

    let unsaved = Product::new("Loose", "", Decimal::ONE, 1);
    assert!(matches!(
        repo.try_update(unsaved),
        Err(RepositoryError::Unassigned(_))
    ));

    let removed = repo.try_delete(id).unwrap();
    assert_eq!(removed.name, "Mouse");
    assert_eq!(
        repo.try_delete(id),
        Err(RepositoryError::NotFound("product_1".to_string()))
    );
}

#[test]
fn test_entities_serialize() {
    let mut product = Product::new("Laptop", "Portable", Decimal::new(120000, 2), 10);
    product.id = ProductId(1);

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["stock"], 10);

    let back: Product = serde_json::from_value(json).unwrap();
    assert_eq!(back, product);
}
