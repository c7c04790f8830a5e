//! wagmi: a personal internship-application tracker.
//!
//! The library is the whole model behind the `wagmi` command:
//!
//! - [`tracker`]: the authoritative collection and its two mutations.
//! - [`storage`]: the key-value port and snapshot persistence behind it.
//! - [`query`]: the pure filter-and-sort that produces what gets shown.
//! - [`form`]: transient input that becomes a create or an update.

pub mod calendar;
pub mod form;
pub mod model;
pub mod query;
pub mod storage;
pub mod tracker;
