use isp_crud::framework::{Creatable, Deletable, Readable, Updatable};
use isp_crud::lifecycle::CrudSystem;
use isp_crud::model::{Product, ProductId, User, UserId};
use isp_crud::products;
use rust_decimal::Decimal;

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn ids(products: &[Product]) -> Vec<u32> {
    products.iter().map(|p| p.id.0).collect()
}

/// Full end-to-end run of the catalogue scenario through the services.
#[test]
fn test_product_catalogue_scenario() {
    let system = CrudSystem::new();

    for (name, cents, stock) in [
        ("Laptop", 120000, 10),
        ("Mouse", 2550, 50),
        ("Teclado", 8999, 30),
    ] {
        let mut product = Product::new(name, "", price(cents), stock);
        assert!(system.product_writer.create(&mut product));
    }

    let all = system.product_reader.get_all();
    assert_eq!(all.len(), 3);
    assert_eq!(ids(&all), vec![1, 2, 3]);

    // Delete the keyboard
    assert!(system.product_writer.delete(ProductId(3)));
    let all = system.product_reader.get_all();
    assert_eq!(ids(&all), vec![1, 2]);
    assert!(!system.product_reader.exists(ProductId(3)));

    // Replace the laptop wholesale
    let gaming = Product::with_id(ProductId(1), "Laptop Gaming", "", price(150000), 8);
    assert!(system.product_writer.update(gaming));

    let laptop = system
        .product_reader
        .get_by_id(ProductId(1))
        .expect("Laptop not found");
    assert_eq!(laptop.id, ProductId(1));
    assert_eq!(laptop.name, "Laptop Gaming");
    assert_eq!(laptop.price, price(150000));
    assert_eq!(laptop.stock, 8);
}

#[test]
fn test_created_entity_reads_back_with_fresh_id() {
    let system = CrudSystem::new();
    let mut user = User::new("admin", "admin@example.com", "admin123", "ADMIN", true);

    assert!(system.user_writer.create(&mut user));
    assert_eq!(user.id, UserId(1));
    assert!(system.user_reader.exists(user.id));
    assert_eq!(system.user_reader.get_by_id(user.id), Some(user));
}

#[test]
fn test_identities_keep_increasing_after_delete() {
    let repo = products::new();
    for name in ["a", "b", "c"] {
        repo.create(&mut Product::new(name, "", price(100), 1));
    }

    assert!(repo.delete(ProductId(2)));
    let mut fourth = Product::new("d", "", price(100), 1);
    repo.create(&mut fourth);

    assert_eq!(fourth.id, ProductId(4));
    assert!(!repo.exists(ProductId(2)));
    assert_eq!(ids(&repo.get_all()), vec![1, 3, 4]);
}

#[test]
fn test_misses_leave_collection_unchanged() {
    let repo = products::new();
    repo.create(&mut Product::new("Laptop", "", price(120000), 10));
    repo.create(&mut Product::new("Mouse", "", price(2550), 50));
    let before = repo.get_all();

    let ghost = Product::with_id(ProductId(42), "Ghost", "", price(1), 1);
    assert!(!repo.update(ghost));
    assert_eq!(repo.get_all(), before);

    assert!(!repo.delete(ProductId(42)));
    assert_eq!(repo.get_all(), before);

    assert_eq!(repo.get_by_id(ProductId(42)), None);
}

#[test]
fn test_order_follows_creation_not_updates() {
    let repo = products::new();
    for name in ["Zeta", "Alpha", "Mid"] {
        repo.create(&mut Product::new(name, "", price(100), 1));
    }

    // Renaming and repricing must not reorder anything.
    assert!(repo.update(Product::with_id(ProductId(1), "Aardvark", "", price(1), 1)));
    assert!(repo.update(Product::with_id(ProductId(3), "Zzz", "", price(99999), 1)));

    let names: Vec<String> = repo.get_all().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Aardvark", "Alpha", "Zzz"]);
}

#[test]
fn test_update_round_trip_keeps_identity() {
    let system = CrudSystem::new();
    let mut user = User::new("usuario2", "user2@example.com", "pass456", "USER", false);
    system.user_writer.create(&mut user);

    let mut fetched = system.user_reader.get_by_id(user.id).unwrap();
    fetched.username = "usuario2_actualizado".to_string();
    fetched.email = "newuser2@example.com".to_string();
    fetched.role = "MODERATOR".to_string();
    fetched.active = true;

    // The snapshot is not live until it goes back through update
    assert_eq!(system.user_reader.get_by_id(user.id).unwrap().role, "USER");

    assert!(system.user_writer.update(fetched.clone()));
    let stored = system.user_reader.get_by_id(user.id).unwrap();
    assert_eq!(stored, fetched);
    assert_eq!(stored.id, user.id);
}

#[test]
fn test_repositories_are_independent() {
    let system = CrudSystem::new();
    let mut product = Product::new("Mouse", "", price(2550), 50);
    let mut user = User::new("admin", "admin@example.com", "admin123", "ADMIN", true);
    system.product_writer.create(&mut product);
    system.user_writer.create(&mut user);

    // Both counters start at 1
    assert_eq!(product.id.0, 1);
    assert_eq!(user.id.0, 1);

    assert!(system.user_writer.delete(UserId(1)));
    assert!(system.product_reader.exists(ProductId(1)));
}

#[test]
fn test_low_stock_report_over_live_repository() {
    let system = CrudSystem::new();
    for (name, stock) in [("Laptop", 10), ("Mouse", 50), ("Laptop Gaming", 8)] {
        system
            .product_writer
            .create(&mut Product::new(name, "", price(100), stock));
    }

    let stocks: Vec<u32> = system
        .product_reports
        .low_stock()
        .into_iter()
        .map(|p| p.stock)
        .collect();
    assert_eq!(stocks, vec![10, 8]);
}

#[test]
fn test_controller_runs_demo_sequence() {
    let system = CrudSystem::new();
    let mut controller = system.controller(Vec::new());

    controller.create_product("Laptop", "", price(120000), 10).unwrap();
    controller.create_product("Mouse", "", price(2550), 50).unwrap();
    controller.create_product("Teclado", "", price(8999), 30).unwrap();
    controller.create_user("admin", "admin@example.com", "admin123", "ADMIN", true).unwrap();
    controller.create_user("usuario1", "user1@example.com", "pass123", "USER", true).unwrap();
    controller.create_user("usuario2", "user2@example.com", "pass456", "USER", false).unwrap();

    assert!(controller.read_product(99).unwrap().is_none());
    assert!(controller.update_product(2, "Mouse Gamer", "", price(3599), 45).unwrap());
    assert!(controller.product_exists(1));
    assert!(!controller.product_exists(999));
    assert!(controller.user_exists(2));
    assert!(!controller.user_exists(999));

    assert!(controller.delete_product(3).unwrap());
    assert!(controller.delete_user(3).unwrap());

    assert_eq!(controller.read_all_products().unwrap().len(), 2);
    assert_eq!(controller.read_all_users().unwrap().len(), 2);

    let text = String::from_utf8(controller.into_inner()).unwrap();
    assert!(text.contains("✓ Product 3 deleted"));
    assert!(text.contains("✓ User 3 deleted"));
    assert!(text.contains("name='Mouse Gamer'"));
}
