//! Core data model for wagmi.
//!
//! A single persisted entity: the [`Application`] record, plus the closed
//! set of [`Status`] values it moves through.

mod application;
mod status;

pub use application::{Application, ApplicationFields};
pub use status::Status;
