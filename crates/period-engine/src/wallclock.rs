//! Wall-clock-preserving UTC transform.
//!
//! Report APIs receive dates as always-UTC ISO strings. A date the user picked
//! in local time would shift to the previous or next day once serialized that
//! way, so interval bounds are rebuilt with their *local* fields stored as
//! UTC fields: 2025-03-01 00:00 in `America/New_York` becomes
//! `2025-03-01T00:00:00.000Z`, not `2025-03-01T05:00:00.000Z`.
//!
//! This is not a timezone conversion and must not be "corrected" into one:
//! consumers of the serialized bounds read them as local calendar values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

/// 23:59:59.999, the last representable millisecond of a day.
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(t) => t,
    None => panic!("invalid end-of-day time"),
};

/// Rebuild `dt` as the UTC instant whose fields equal its local wall clock.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Timelike};
/// use period_engine::wallclock::preserve_wall_clock;
///
/// let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
/// let picked = tokyo.with_ymd_and_hms(2025, 3, 1, 0, 30, 0).unwrap();
/// let sent = preserve_wall_clock(&picked);
/// assert_eq!(sent.to_rfc3339(), "2025-03-01T00:30:00+00:00");
/// assert_eq!(sent.hour(), 0);
/// ```
pub fn preserve_wall_clock<Tz: TimeZone>(dt: &DateTime<Tz>) -> DateTime<Utc> {
    preserve_naive(dt.naive_local())
}

/// Store a naive wall-clock value as UTC fields.
pub fn preserve_naive(naive: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&naive)
}

/// 00:00:00.000 of `date`, preserved.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    preserve_naive(date.and_time(NaiveTime::MIN))
}

/// 23:59:59.999 of `date`, preserved.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    preserve_naive(date.and_time(END_OF_DAY))
}

/// Serialize like JavaScript's `Date.prototype.toISOString()`:
/// millisecond precision, `Z` suffix.
pub fn to_iso_string(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ── Tests ───────────────────────────────────────────────────────────────────
