//! Deterministic period resolution.
//!
//! Maps a [`PeriodKey`] and a caller-supplied "now" anchor to a closed
//! [`DateInterval`] aligned to day boundaries. Nothing here reads the system
//! clock except [`resolve_period_now`] and [`resolve_period_at`] without an
//! anchor, so every other entry point is a pure function of its arguments.
//!
//! # Reference timezone
//!
//! The anchor's own timezone is the reference timezone: the calendar date
//! of `now` is read from its local wall clock, boundaries are computed on
//! that calendar, and the resulting bounds go through
//! [`preserve_wall_clock`](crate::wallclock::preserve_wall_clock) semantics.
//! Boundaries are built from calendar fields and never converted back
//! through the timezone, so a day whose local midnight is skipped by a DST
//! transition still starts at 00:00:00.000.
//!
//! # Boundary policy
//!
//! | Key | fromDate | toDate |
//! |---|---|---|
//! | `today` | start of today | end of today |
//! | `this-week` / `last-week` | first day of the (previous) week | last day of that week |
//! | `this-month` / `last-month` | 1st of the (previous) month | last day of that month |
//! | `this-quarter` / `last-quarter` | first day of the (previous) quarter | last day of that quarter |
//! | `this-year` / `last-year` | Jan 1 of the (previous) year | Dec 31 of that year |
//! | `custom-dates`, `empty`, `all-date`, unknown | `None` | `None` |

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::error::{PeriodError, Result};
use crate::interval::DateInterval;
use crate::period::{PeriodKey, WeekStartDay};
use crate::wallclock::{end_of_day, start_of_day};

/// Options for [`resolve`] and friends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Which day starts the week for `this-week` / `last-week`.
    pub week_start: WeekStartDay,
}

impl ResolveOptions {
    pub fn with_week_start(week_start: WeekStartDay) -> Self {
        Self { week_start }
    }
}

// ── Entry points ────────────────────────────────────────────────────────────

/// Resolve a period token against `now`.
///
/// Unrecognized tokens resolve to [`DateInterval::unbounded`] rather than an
/// error: an unknown selector value means "no date filter".
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use period_engine::{resolve_period, ResolveOptions};
///
/// let now = Utc.with_ymd_and_hms(2025, 3, 15, 10, 30, 0).unwrap();
/// let q = resolve_period("this-quarter", &now, &ResolveOptions::default());
/// assert_eq!(q.from_iso().unwrap(), "2025-01-01T00:00:00.000Z");
/// assert_eq!(q.to_iso().unwrap(), "2025-03-31T23:59:59.999Z");
///
/// assert!(resolve_period("bogus", &now, &ResolveOptions::default()).is_unbounded());
/// ```
pub fn resolve_period<Z: TimeZone>(
    key: &str,
    now: &DateTime<Z>,
    options: &ResolveOptions,
) -> DateInterval {
    match key.parse::<PeriodKey>() {
        Ok(key) => resolve(key, now, options),
        Err(_) => {
            debug!(key, "unknown period key, resolving to unbounded interval");
            DateInterval::unbounded()
        }
    }
}

/// Resolve a typed [`PeriodKey`] against `now`.
pub fn resolve<Z: TimeZone>(
    key: PeriodKey,
    now: &DateTime<Z>,
    options: &ResolveOptions,
) -> DateInterval {
    if !key.is_bounded() {
        return DateInterval::unbounded();
    }

    let today = now.naive_local().date();
    match calendar_bounds(key, today, options.week_start) {
        Some((first, last)) => {
            let interval = DateInterval::bounded(start_of_day(first), end_of_day(last));
            trace!(%key, %first, %last, "resolved period");
            interval
        }
        None => {
            debug!(%key, %today, "period boundary outside the representable calendar");
            DateInterval::unbounded()
        }
    }
}

/// Resolve against the system clock in the local timezone.
pub fn resolve_period_now(key: &str, options: &ResolveOptions) -> DateInterval {
    resolve_period(key, &Local::now(), options)
}

/// String-typed resolution for callers holding text (CLI flags, browser
/// arguments): an optional anchor accepted by [`parse_anchor`] and an
/// optional IANA timezone name.
///
/// A missing `now` reads the system clock; a missing `timezone` uses the
/// system local timezone, which in a browser is the user's own offset.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidTimezone`] or [`PeriodError::InvalidDatetime`]
/// when the inputs cannot be parsed. Unknown period keys still resolve to
/// the unbounded interval.
pub fn resolve_period_at(
    key: &str,
    now: Option<&str>,
    timezone: Option<&str>,
    options: &ResolveOptions,
) -> Result<DateInterval> {
    match timezone {
        Some(name) => resolve_in_zone(key, now, &parse_timezone(name)?, options),
        None => resolve_in_zone(key, now, &Local, options),
    }
}

fn resolve_in_zone<Z: TimeZone>(
    key: &str,
    now: Option<&str>,
    tz: &Z,
    options: &ResolveOptions,
) -> Result<DateInterval> {
    let anchor = match now {
        Some(s) => parse_anchor(s, tz)?,
        None => Utc::now().with_timezone(tz),
    };
    Ok(resolve_period(key, &anchor, options))
}

// ── Anchor parsing ──────────────────────────────────────────────────────────

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| PeriodError::InvalidTimezone(format!("'{}'", s.trim())))
}

/// Parse a "now" anchor in `tz`.
///
/// Accepts, in order:
/// - RFC 3339 (`2025-03-15T10:30:00Z`), converted into `tz`
/// - a naive local datetime (`2025-03-15T10:30:00` or `2025-03-15 10:30:00`),
///   read as wall clock in `tz`
/// - a plain date (`2025-03-15`), taken at local noon
///
/// An ambiguous local time (DST fall-back) takes the earlier reading; a
/// local time skipped by a DST gap is an error.
pub fn parse_anchor<Z: TimeZone>(s: &str, tz: &Z) -> Result<DateTime<Z>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(tz));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(12, 0, 0))
        })
        .ok_or_else(|| PeriodError::InvalidDatetime(format!("cannot parse anchor: '{}'", s)))?;

    tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        PeriodError::InvalidDatetime(format!("'{}' does not exist in the local timezone", s))
    })
}

// ── Calendar arithmetic ─────────────────────────────────────────────────────

/// First and last calendar day covered by a bounded key.
fn calendar_bounds(
    key: PeriodKey,
    today: NaiveDate,
    ws: WeekStartDay,
) -> Option<(NaiveDate, NaiveDate)> {
    match key {
        PeriodKey::Today => Some((today, today)),
        PeriodKey::ThisWeek => week_bounds(today, ws, 0),
        PeriodKey::LastWeek => week_bounds(today, ws, 1),
        PeriodKey::ThisMonth => month_bounds(today.year(), today.month()),
        PeriodKey::LastMonth => {
            let (y, m) = previous_month(today.year(), today.month());
            month_bounds(y, m)
        }
        PeriodKey::ThisQuarter => quarter_bounds(today.year(), quarter_index(today.month())),
        PeriodKey::LastQuarter => {
            let (y, q) = match quarter_index(today.month()) {
                0 => (today.year() - 1, 3),
                q => (today.year(), q - 1),
            };
            quarter_bounds(y, q)
        }
        PeriodKey::ThisYear => year_bounds(today.year()),
        PeriodKey::LastYear => year_bounds(today.year() - 1),
        PeriodKey::CustomDates | PeriodKey::Empty | PeriodKey::AllDate => None,
    }
}

/// The week containing `today`, shifted `weeks_back` whole weeks earlier.
fn week_bounds(
    today: NaiveDate,
    ws: WeekStartDay,
    weeks_back: i64,
) -> Option<(NaiveDate, NaiveDate)> {
    let days_back = ws.days_since_start(today.weekday()) + 7 * weeks_back;
    let start = today.checked_sub_signed(chrono::Duration::days(days_back))?;
    let end = start.checked_add_signed(chrono::Duration::days(6))?;
    Some((start, end))
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some((first, last_day_of_month(year, month)?))
}

/// Quarter `q` (0-based) of `year`.
fn quarter_bounds(year: i32, q: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first_month = q * 3 + 1;
    let last_month = first_month + 2;
    let first = NaiveDate::from_ymd_opt(year, first_month, 1)?;
    Some((first, last_day_of_month(year, last_month)?))
}

fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

fn quarter_index(month: u32) -> u32 {
    (month - 1) / 3
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

// ── Tests ───────────────────────────────────────────────────────────────────
