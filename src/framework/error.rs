//! # Repository Errors
//!
//! Error type for the fallible repository API (`insert`, `try_update`, `try_delete`).
//! The capability traits flatten these into `bool`/`Option`.

use thiserror::Error;

/// Errors that can occur when mutating a repository.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    /// No stored entity carries the requested identity.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The entity was never created, so it has no identity to match against.
    #[error("Entity has no assigned identity: {0}")]
    Unassigned(String),

    /// Every identity the counter can express has been handed out.
    #[error("No identities left for {0}")]
    Exhausted(String),
}
