//! The application form: transient input plus the create/edit decision.
//!
//! The form holds what the user has typed but not yet committed. With no edit
//! target, [`Form::submit`] creates a record; after [`Form::start_edit`] it
//! updates that record instead. A successful submit resets the form.

use jiff::{civil::Date, tz::TimeZone};
use uuid::Uuid;

use crate::calendar;
use crate::model::{Application, ApplicationFields, Status};
use crate::storage::KeyValueStore;
use crate::tracker::{Outcome, Tracker};

#[derive(Debug, Clone)]
pub struct Form {
    role: String,
    company: String,
    status: Status,
    deadline: Option<Date>,
    editing: Option<Uuid>,
    time_zone: TimeZone,
}

impl Form {
    /// An empty form in create mode. Deadlines are read and written as
    /// midnight in `time_zone`.
    #[must_use]
    pub fn new(time_zone: TimeZone) -> Self {
        Self {
            role: String::new(),
            company: String::new(),
            status: Status::default(),
            deadline: None,
            editing: None,
            time_zone,
        }
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Date> {
        self.deadline
    }

    /// The record being edited, if any.
    #[must_use]
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    pub fn set_company(&mut self, company: impl Into<String>) {
        self.company = company.into();
    }

    /// Switching to a status without a deadline discards any pending deadline.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        if !status.takes_deadline() {
            self.deadline = None;
        }
    }

    /// Sets the pending deadline.
    ///
    /// Ignored unless the current status takes a deadline; returns whether the
    /// value was kept.
    pub fn set_deadline(&mut self, deadline: Option<Date>) -> bool {
        if deadline.is_some() && !self.status.takes_deadline() {
            return false;
        }
        self.deadline = deadline;
        true
    }

    /// Whether [`Form::submit`] would do anything: role and company must both
    /// be non-blank.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.role.trim().is_empty() && !self.company.trim().is_empty()
    }

    /// Loads `application` into the form and targets it for update.
    pub fn start_edit(&mut self, application: &Application) {
        self.role.clone_from(&application.role);
        self.company.clone_from(&application.company);
        self.status = application.status;
        self.deadline = application
            .deadline
            .and_then(|ms| calendar::date_of_millis(ms, &self.time_zone));
        self.editing = Some(application.id);
    }

    /// Discards pending input and returns to create mode.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Creates or updates a record from the pending input.
    ///
    /// Does nothing when [`Form::can_submit`] is false. The form is reset
    /// only when the tracker applied the change.
    pub fn submit<S: KeyValueStore>(&mut self, tracker: &mut Tracker<S>) -> Outcome {
        if !self.can_submit() {
            return Outcome::Invalid;
        }

        let fields = self.fields();
        let outcome = match self.editing {
            Some(id) => tracker.update(id, fields),
            None => tracker.create(fields),
        };

        if outcome.is_applied() {
            self.reset();
        }
        outcome
    }

    fn fields(&self) -> ApplicationFields {
        let deadline = self
            .deadline
            .filter(|_| self.status.takes_deadline())
            .and_then(|date| calendar::start_of_day_millis(date, &self.time_zone));

        ApplicationFields {
            role: self.role.clone(),
            company: self.company.clone(),
            status: self.status,
            deadline,
        }
    }

    fn reset(&mut self) {
        self.role.clear();
        self.company.clear();
        self.status = Status::default();
        self.deadline = None;
        self.editing = None;
    }
}
