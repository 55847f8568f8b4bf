//! Custom date picks.
//!
//! When the selector is on `custom-dates` the resolver yields nothing and the
//! bounds come from two calendar pickers instead. Each pick goes through the
//! same day alignment and wall-clock preservation as resolved periods.

use chrono::{DateTime, NaiveDate};

use crate::error::{PeriodError, Result};
use crate::interval::DateInterval;
use crate::wallclock::{end_of_day, start_of_day};

/// Build an interval from optional calendar picks.
///
/// A missing pick leaves that side open. Both present with `from > to` is
/// [`PeriodError::InvertedRange`]; a single-day range (`from == to`) is fine.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use period_engine::custom_interval;
///
/// let from = NaiveDate::from_ymd_opt(2025, 2, 3);
/// let to = NaiveDate::from_ymd_opt(2025, 2, 7);
/// let interval = custom_interval(from, to).unwrap();
/// assert_eq!(interval.to_iso().unwrap(), "2025-02-07T23:59:59.999Z");
/// ```
pub fn custom_interval(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<DateInterval> {
    DateInterval::new(from.map(start_of_day), to.map(end_of_day))
}

/// Parse a picker value: `YYYY-MM-DD`, or RFC 3339 whose *written* date is
/// taken as-is (no conversion to UTC first).
pub fn parse_picked_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.naive_local().date())
        })
        .ok_or_else(|| PeriodError::InvalidDate(format!("'{}'", s)))
}

// ── Tests ───────────────────────────────────────────────────────────────────
