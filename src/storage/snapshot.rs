//! Snapshot persistence for the application collection.
//!
//! The whole collection is serialized as one JSON array under a fixed key and
//! rewritten after every change. There is no versioning: a shape change
//! needs a new key or tolerant parsing.

use tracing::{debug, warn};

use crate::model::Application;

use super::{KeyValueStore, Result};

/// Key holding the serialized application collection.
pub const APPLICATIONS_KEY: &str = "gmi_applications_v1";

/// Reads and writes full snapshots of the collection through a
/// [`KeyValueStore`].
#[derive(Debug)]
pub struct Snapshot<S> {
    store: S,
}

impl<S: KeyValueStore> Snapshot<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the stored collection.
    ///
    /// A missing key, an unreadable store, or an unparseable value all yield
    /// an empty collection. Failures are logged, never returned.
    #[must_use]
    pub fn load(&self) -> Vec<Application> {
        let raw = match self.store.get(APPLICATIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = APPLICATIONS_KEY, "no stored applications");
                return Vec::new();
            }
            Err(error) => {
                warn!(key = APPLICATIONS_KEY, error = %error, "failed to read stored applications");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Application>>(&raw) {
            Ok(applications) => {
                debug!(count = applications.len(), "loaded applications");
                applications
            }
            Err(error) => {
                warn!(key = APPLICATIONS_KEY, error = %error, "ignoring unparseable stored applications");
                Vec::new()
            }
        }
    }

    /// Writes the full collection, replacing the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails. The
    /// previous snapshot is left in place.
    pub fn save(&self, applications: &[Application]) -> Result<()> {
        let json = serde_json::to_string(applications)?;
        self.store.set(APPLICATIONS_KEY, &json)?;
        debug!(count = applications.len(), "saved applications");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;
    use uuid::Uuid;

    use crate::model::Status;
    use crate::storage::{FailingStore, FileStore, MemoryStore};

    fn sample(role: &str, company: &str, status: Status, deadline: Option<i64>) -> Application {
        Application {
            id: Uuid::new_v4(),
            role: role.into(),
            company: company.into(),
            status,
            created_at: 1_717_200_000_000,
            deadline,
        }
    }

    #[test]
    fn load_missing_key_is_empty() {
        let snapshot = Snapshot::new(MemoryStore::default());
        assert!(snapshot.load().is_empty());
    }

    #[test]
    fn load_corrupt_value_is_empty() {
        let store = MemoryStore::with_value(APPLICATIONS_KEY, "{not json");
        assert!(Snapshot::new(store).load().is_empty());
    }

    #[test]
    fn load_wrong_shape_is_empty() {
        let store = MemoryStore::with_value(APPLICATIONS_KEY, r#"[{"role":"SWE Intern"}]"#);
        assert!(Snapshot::new(store).load().is_empty());
    }

    #[test]
    fn load_unreadable_store_is_empty() {
        assert!(Snapshot::new(FailingStore).load().is_empty());
    }

    #[test]
    fn save_failure_is_reported() {
        let snapshot = Snapshot::new(FailingStore);
        let apps = vec![sample("SWE Intern", "Acme", Status::Applied, None)];
        assert!(snapshot.save(&apps).is_err());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::default();
        let snapshot = Snapshot::new(store.clone());
        let apps = vec![
            sample("SWE Intern", "Acme", Status::Applied, None),
            sample("Data Intern", "Zeta", Status::Oa, Some(1_748_736_000_000)),
        ];

        snapshot.save(&apps).unwrap();

        assert_eq!(Snapshot::new(store).load(), apps);
    }

    #[test]
    fn save_then_load_round_trips_on_disk() {
        let dir = TempDir::new().unwrap();
        let apps = vec![sample("Designer", "Zeta", Status::Offer, None)];

        Snapshot::new(FileStore::new(dir.path()).unwrap())
            .save(&apps)
            .unwrap();
        let loaded = Snapshot::new(FileStore::new(dir.path()).unwrap()).load();

        assert_eq!(loaded, apps);
    }

    #[test]
    fn stored_value_uses_the_flat_record_shape() {
        let store = MemoryStore::default();
        let app = sample("SWE Intern", "Acme", Status::Applied, None);

        Snapshot::new(store.clone()).save(&[app.clone()]).unwrap();

        let raw = store.raw(APPLICATIONS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];
        assert_eq!(record["id"], app.id.to_string());
        assert_eq!(record["role"], "SWE Intern");
        assert_eq!(record["company"], "Acme");
        assert_eq!(record["status"], "Applied");
        assert_eq!(record["createdAt"], 1_717_200_000_000_i64);
        assert!(record["deadline"].is_null());
    }
}
