//! Capability-narrow services layered over a repository.
//!
//! Each service is built from handles typed to exactly the capabilities it uses. What a service
//! can do is therefore visible in its constructor signature, and checked by the compiler.
//!
//! Reporting services live next to their entity: [`crate::products::ProductReportService`],
//! [`crate::users::UserReportService`].

pub mod read_service;
pub mod write_service;

pub use read_service::*;
pub use write_service::*;
