//! # ISP CRUD demo
//!
//! Runs a fixed script against [`CrudSystem`]: create products and users, read them back
//! (including a missing id), update a few, check existence, delete, list again, then print
//! which capability each service depends on.

use isp_crud::controller::{ControllerError, CrudController};
use isp_crud::lifecycle::tracing::setup_tracing;
use isp_crud::lifecycle::CrudSystem;
use rust_decimal::Decimal;
use std::io::{self, Stdout, Write};
use tracing::info;

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting CRUD demonstration");

    let system = CrudSystem::new();
    let mut controller = system.controller(io::stdout());

    run(&mut controller, &system).map_err(|e| e.to_string())?;

    info!("Demonstration completed successfully");
    Ok(())
}

fn section(controller: &mut CrudController<Stdout>, title: &str) -> Result<(), ControllerError> {
    writeln!(controller.output(), "\n█ {title}")?;
    Ok(())
}

fn run(
    controller: &mut CrudController<Stdout>,
    system: &CrudSystem,
) -> Result<(), ControllerError> {
    let out = controller.output();
    writeln!(out, "╔════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║      CRUD SYSTEM WITH THE INTERFACE SEGREGATION PRINCIPLE  ║")?;
    writeln!(out, "╚════════════════════════════════════════════════════════════╝")?;

    let span = tracing::info_span!("create");
    span.in_scope(|| -> Result<(), ControllerError> {
        section(controller, "CREATING PRODUCTS...")?;
        for (name, description, cents, stock) in [
            ("Laptop", "High performance laptop", 120000, 10),
            ("Mouse", "Ergonomic wireless mouse", 2550, 50),
            ("Teclado", "RGB mechanical keyboard", 8999, 30),
        ] {
            controller.create_product(name, description, Decimal::new(cents, 2), stock)?;
        }

        section(controller, "CREATING USERS...")?;
        controller.create_user("admin", "admin@example.com", "admin123", "ADMIN", true)?;
        controller.create_user("usuario1", "user1@example.com", "pass123", "USER", true)?;
        controller.create_user("usuario2", "user2@example.com", "pass456", "USER", false)?;
        Ok(())
    })?;

    let span = tracing::info_span!("read");
    span.in_scope(|| -> Result<(), ControllerError> {
        section(controller, "READING PRODUCTS...")?;
        controller.read_product(1)?;
        controller.read_product(2)?;
        controller.read_product(99)?;

        section(controller, "LISTING ALL PRODUCTS...")?;
        controller.read_all_products()?;

        section(controller, "READING USERS...")?;
        controller.read_user(1)?;
        controller.read_user(2)?;
        controller.read_user(99)?;

        section(controller, "LISTING ALL USERS...")?;
        controller.read_all_users()?;
        Ok(())
    })?;

    let span = tracing::info_span!("update");
    span.in_scope(|| -> Result<(), ControllerError> {
        section(controller, "UPDATING PRODUCTS...")?;
        controller.update_product(
            1,
            "Laptop Gaming",
            "Latest generation gaming laptop",
            Decimal::new(150000, 2),
            8,
        )?;
        controller.update_product(
            2,
            "Mouse Gamer",
            "Gaming mouse with 12,000 DPI",
            Decimal::new(3599, 2),
            45,
        )?;

        section(controller, "UPDATING USERS...")?;
        controller.update_user(
            2,
            "usuario2_actualizado",
            "newuser2@example.com",
            "newpass",
            "MODERATOR",
            true,
        )?;
        Ok(())
    })?;

    section(controller, "CHECKING EXISTENCE...")?;
    let checks = [
        ("product", 1, controller.product_exists(1)),
        ("product", 999, controller.product_exists(999)),
        ("user", 2, controller.user_exists(2)),
        ("user", 999, controller.user_exists(999)),
    ];
    for (kind, id, exists) in checks {
        writeln!(controller.output(), "Does {kind} {id} exist? {exists}")?;
    }

    section(controller, "STATE BEFORE DELETING...")?;
    controller.read_all_products()?;
    controller.read_all_users()?;

    let span = tracing::info_span!("delete");
    span.in_scope(|| -> Result<(), ControllerError> {
        section(controller, "DELETING DATA...")?;
        controller.delete_product(3)?;
        controller.delete_user(3)?;
        Ok(())
    })?;

    section(controller, "STATE AFTER DELETING...")?;
    controller.read_all_products()?;
    controller.read_all_users()?;

    section(controller, "REPORTS (read-only services)...")?;
    let out = controller.output();
    write!(out, "{}", system.product_reports.full_report())?;
    write!(out, "{}", system.product_reports.low_stock_report())?;
    write!(out, "{}", system.product_reports.price_report())?;
    write!(out, "\n{}", system.user_reports.directory_report())?;

    print_summary(out)?;
    Ok(())
}

fn print_summary(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n╔════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║             INTERFACE SEGREGATION PRINCIPLE                ║")?;
    writeln!(out, "╚════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "✓ Creatable<T>  → only CREATES new entities")?;
    writeln!(out, "✓ Readable<T>   → only READS entities (never modifies)")?;
    writeln!(out, "✓ Updatable<T>  → only UPDATES existing entities")?;
    writeln!(out, "✓ Deletable<T>  → only DELETES entities\n")?;

    writeln!(out, "WHAT THE TYPES SHOW:")?;
    writeln!(out, "─────────────────────────────")?;
    writeln!(out, "1. ReadService holds Rc<dyn Readable<T>> and nothing else")?;
    writeln!(out, "   → it cannot create, update or delete\n")?;
    writeln!(out, "2. WriteService holds Creatable, Updatable and Deletable handles")?;
    writeln!(out, "   → it has no read access\n")?;
    writeln!(out, "3. ProductReportService and UserReportService are read-only")?;
    writeln!(out, "   → reports can never alter inventory or accounts\n")?;
    writeln!(out, "4. Every service can be tested against MockRepository")?;
    writeln!(out, "   → scripted answers, no real storage needed\n")?;

    writeln!(out, "╔════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    EXECUTION COMPLETED                     ║")?;
    writeln!(out, "╚════════════════════════════════════════════════════════════╝")?;
    Ok(())
}
