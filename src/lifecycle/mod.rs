//! Lifecycle management: system wiring and tracing setup.

pub mod crud_system;
pub mod tracing;

pub use crud_system::CrudSystem;
