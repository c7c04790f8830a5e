//! Application records: one tracked internship application.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Status;

/// A tracked application.
///
/// Serialized as a flat camelCase object; timestamps are epoch milliseconds.
/// `id` and `created_at` are fixed at creation. `deadline` is only ever set
/// while `status` is [`Status::Oa`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub status: Status,
    pub created_at: i64,
    #[serde(default)]
    pub deadline: Option<i64>,
}

impl Application {
    /// First eight characters of the id, used for display and prefix lookup.
    #[must_use]
    pub fn short_id(&self) -> String {
        let mut id = self.id.to_string();
        id.truncate(8);
        id
    }
}

/// The user-editable part of an application: everything but `id` and
/// `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFields {
    pub role: String,
    pub company: String,
    pub status: Status,
    pub deadline: Option<i64>,
}

impl ApplicationFields {
    /// Trimmed role and company, or `None` when either is blank.
    #[must_use]
    pub fn required(&self) -> Option<(String, String)> {
        let role = self.role.trim();
        let company = self.company.trim();
        if role.is_empty() || company.is_empty() {
            return None;
        }
        Some((role.to_string(), company.to_string()))
    }

    /// The deadline as it may be stored: dropped unless the status takes one.
    #[must_use]
    pub fn stored_deadline(&self) -> Option<i64> {
        self.deadline.filter(|_| self.status.takes_deadline())
    }
}
