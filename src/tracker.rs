//! The record store: the authoritative collection of applications.
//!
//! All mutation goes through [`Tracker::create`] and [`Tracker::update`].
//! Each successful mutation writes a full snapshot back to storage. A failed
//! write is logged and otherwise ignored; the in-memory collection stays
//! correct and the next successful save catches storage up.

use std::collections::HashSet;

use jiff::Timestamp;
use tracing::warn;
use uuid::Uuid;

use crate::model::{Application, ApplicationFields};
use crate::storage::{KeyValueStore, Snapshot};

/// What a create or update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new record was prepended with this id.
    Created(Uuid),

    /// The record with this id was updated in place.
    Updated(Uuid),

    /// Role or company was blank after trimming. Nothing changed.
    Invalid,

    /// No record has this id. Nothing changed.
    UnknownId(Uuid),
}

impl Outcome {
    /// Whether the collection changed.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated(_))
    }
}

/// In-memory application collection mirrored to a key-value store.
#[derive(Debug)]
pub struct Tracker<S> {
    applications: Vec<Application>,
    snapshot: Snapshot<S>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Hydrates the collection from `store`.
    ///
    /// Unreadable or corrupt data starts an empty collection. Records that
    /// repeat an earlier id are dropped so ids stay unique.
    #[must_use]
    pub fn open(store: S) -> Self {
        let snapshot = Snapshot::new(store);
        let mut seen = HashSet::new();
        let applications = snapshot
            .load()
            .into_iter()
            .filter(|a| {
                let fresh = seen.insert(a.id);
                if !fresh {
                    warn!(id = %a.id, "dropping stored application with duplicate id");
                }
                fresh
            })
            .collect();

        Self {
            applications,
            snapshot,
        }
    }

    /// Every record, in storage order. Display order comes from
    /// [`crate::query::visible`].
    #[must_use]
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.applications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    /// Creates a record stamped with the current time and prepends it.
    pub fn create(&mut self, fields: ApplicationFields) -> Outcome {
        self.create_at(fields, Timestamp::now().as_millisecond())
    }

    fn create_at(&mut self, fields: ApplicationFields, created_at: i64) -> Outcome {
        let Some((role, company)) = fields.required() else {
            return Outcome::Invalid;
        };

        let id = self.fresh_id();
        self.applications.insert(
            0,
            Application {
                id,
                role,
                company,
                status: fields.status,
                created_at,
                deadline: fields.stored_deadline(),
            },
        );
        self.persist();
        Outcome::Created(id)
    }

    /// Replaces the editable fields of the record with `id`.
    ///
    /// `id` and `created_at` are left untouched. The deadline is cleared
    /// whenever the new status doesn't take one.
    pub fn update(&mut self, id: Uuid, fields: ApplicationFields) -> Outcome {
        let Some((role, company)) = fields.required() else {
            return Outcome::Invalid;
        };
        let Some(app) = self.applications.iter_mut().find(|a| a.id == id) else {
            return Outcome::UnknownId(id);
        };

        app.role = role;
        app.company = company;
        app.status = fields.status;
        app.deadline = fields.stored_deadline();
        self.persist();
        Outcome::Updated(id)
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.get(id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) {
        if let Err(error) = self.snapshot.save(&self.applications) {
            warn!(error = %error, "failed to save applications; changes are kept in memory only");
        }
    }
}
