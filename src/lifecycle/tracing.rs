//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the whole crate.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Repositories log every operation with an `entity_type` field, services and controller
//! commands open spans, so one line shows the whole path of a call.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable. Nothing is logged when it is unset
//! apart from errors. The compact format hides the module prefix (`with_target(false)`).
//!
//! ```bash
//! # Mutations only
//! RUST_LOG=info cargo run
//!
//! # Every read and forwarded call, with full entity payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the repository layer
//! RUST_LOG=isp_crud::framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO CRUD system ready
//! INFO create_product: Created entity_type="Product" id=product_1 size=1
//! INFO update_product: Updated entity_type="Product" id=product_1
//! WARN delete_user: Not found entity_type="User" id=user_9
//! ```
//!
//! **With `RUST_LOG=debug`** the `Create`/`Update` lines also carry the entity (`?entity`).
//! `User`'s `Debug` output leaves out the password, so it never reaches the logs.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; entity_type says which repository spoke
        .compact() // Compact format shows spans inline (e.g., "create_product:create")
        .init();
}
