//! Conversions between calendar dates and stored epoch-millisecond timestamps.
//!
//! Deadlines are entered as plain dates and stored as the timestamp of local
//! midnight on that date. Both directions take the time zone explicitly so the
//! form and the table agree on what "local" means.

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// Epoch milliseconds of midnight at the start of `date` in `tz`.
///
/// Returns `None` if the date cannot be placed in the zone (out of range).
#[must_use]
pub fn start_of_day_millis(date: Date, tz: &TimeZone) -> Option<i64> {
    let zoned = date.to_zoned(tz.clone()).ok()?;
    Some(zoned.timestamp().as_millisecond())
}

/// The calendar date on which `millis` falls in `tz`.
#[must_use]
pub fn date_of_millis(millis: i64, tz: &TimeZone) -> Option<Date> {
    let timestamp = Timestamp::from_millisecond(millis).ok()?;
    Some(timestamp.to_zoned(tz.clone()).date())
}
