use serde::{Deserialize, Serialize};

use std::fmt::{self, Debug, Display};

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Represents a registered user in the system.
///
/// # Repository
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be stored in an [`InMemoryRepository`](crate::framework::InMemoryRepository).
///
/// # Password
/// `password` is kept exactly as given. Nothing hashes or checks it. `Debug` leaves it out so it
/// never reaches the logs.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Free-form role name, e.g. `"ADMIN"`, `"USER"`, `"MODERATOR"`.
    pub role: String,
    pub active: bool,
}

impl User {
    /// Creates a new, not yet stored User.
    ///
    /// # Notes
    /// The `id` field is left unassigned and will be set by the repository on `create`.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id: UserId::default(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: role.into(),
            active,
        }
    }

    /// Same as [`User::new`] but carrying an existing identity, for whole-entity updates.
    pub fn with_id(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id,
            ..Self::new(username, email, password, role, active)
        }
    }
}

impl Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_omits_password() {
        let user = User::new("admin", "admin@example.com", "admin123", "ADMIN", true);
        let rendered = format!("{user:?}");
        assert!(rendered.contains("admin@example.com"));
        assert!(!rendered.contains("admin123"));
    }

    #[test]
    fn test_user_id_display_is_prefixed() {
        assert_eq!(UserId(3).to_string(), "user_3");
    }
}
