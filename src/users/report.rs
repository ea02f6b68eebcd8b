//! # User Reports
//!
//! Read-only user directory reporting, built from an `Rc<dyn Readable<User>>` only.

use crate::framework::Readable;
use crate::model::User;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use tracing::instrument;

/// Reporting service over registered users.
pub struct UserReportService {
    reader: Rc<dyn Readable<User>>,
}

impl UserReportService {
    pub fn new(reader: Rc<dyn Readable<User>>) -> Self {
        Self { reader }
    }

    /// Users with `active == true`, in creation order.
    #[instrument(skip(self))]
    pub fn active_users(&self) -> Vec<User> {
        self.reader
            .get_all()
            .into_iter()
            .filter(|u| u.active)
            .collect()
    }

    /// Number of users per role, keyed by the role text as stored.
    #[instrument(skip(self))]
    pub fn role_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for user in self.reader.get_all() {
            *counts.entry(user.role).or_insert(0) += 1;
        }
        counts
    }

    /// Every user with role and status, plus a per-role summary.
    pub fn directory_report(&self) -> DirectoryReport {
        DirectoryReport {
            users: self.reader.get_all(),
            role_counts: self.role_counts(),
        }
    }
}

impl fmt::Debug for UserReportService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserReportService").finish_non_exhaustive()
    }
}

/// User directory listing.
#[derive(Debug, Clone)]
pub struct DirectoryReport {
    pub users: Vec<User>,
    pub role_counts: BTreeMap<String, usize>,
}

impl fmt::Display for DirectoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "USER DIRECTORY ({} users)", self.users.len())?;
        for u in &self.users {
            let status = if u.active { "active" } else { "inactive" };
            writeln!(
                f,
                "ID: {} | Username: {:<20} | Email: {:<22} | Role: {:<9} | {}",
                u.id.0, u.username, u.email, u.role, status
            )?;
        }
        for (role, count) in &self.role_counts {
            writeln!(f, "{role}: {count}")?;
        }
        Ok(())
    }
}
