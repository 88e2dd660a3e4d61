//! Wall-clock helpers.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, SecondsFormat};

/// Seconds since the Unix epoch, with sub-second precision.
///
/// A system clock set before 1970 reads as `0.0`.
#[must_use]
pub fn unix_time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}

/// The current moment as an RFC 3339 / ISO-8601 "internet" timestamp.
///
/// Seconds precision, local UTC offset, e.g. `"2026-08-07T09:41:00+02:00"`.
#[must_use]
pub fn internet_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}
