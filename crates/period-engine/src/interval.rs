//! Closed date intervals handed to report queries and table filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PeriodError, Result};
use crate::wallclock::to_iso_string;

/// `{ fromDate, toDate }`, both inclusive.
///
/// A `None` bound means "unbounded on that side". Intervals produced by the
/// resolver have `from_date` at 00:00:00.000 and `to_date` at 23:59:59.999,
/// both wall-clock preserved (see [`crate::wallclock`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInterval {
    #[serde(default, with = "iso_millis")]
    pub from_date: Option<DateTime<Utc>>,
    #[serde(default, with = "iso_millis")]
    pub to_date: Option<DateTime<Utc>>,
}

impl DateInterval {
    /// Build an interval from optional bounds.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvertedRange`] when both bounds are present and
    /// `from_date > to_date`.
    pub fn new(from_date: Option<DateTime<Utc>>, to_date: Option<DateTime<Utc>>) -> Result<Self> {
        if let (Some(from), Some(to)) = (from_date, to_date) {
            if from > to {
                debug!(%from, %to, "rejecting inverted interval");
                return Err(PeriodError::InvertedRange {
                    from: from.date_naive(),
                    to: to.date_naive(),
                });
            }
        }
        Ok(Self { from_date, to_date })
    }

    /// Both bounds present; callers guarantee `from_date <= to_date`.
    pub(crate) fn bounded(from_date: DateTime<Utc>, to_date: DateTime<Utc>) -> Self {
        debug_assert!(from_date <= to_date, "interval bounds are inverted");
        Self {
            from_date: Some(from_date),
            to_date: Some(to_date),
        }
    }

    /// The null interval: no date filter.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.from_date.is_none() && self.to_date.is_none()
    }

    /// Whether `instant` falls inside the interval. Missing bounds are open.
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.from_date.is_none_or(|from| from <= *instant)
            && self.to_date.is_none_or(|to| *instant <= to)
    }

    /// `fromDate` as an ISO-8601 string, if present.
    pub fn from_iso(&self) -> Option<String> {
        self.from_date.as_ref().map(to_iso_string)
    }

    /// `toDate` as an ISO-8601 string, if present.
    pub fn to_iso(&self) -> Option<String> {
        self.to_date.as_ref().map(to_iso_string)
    }

    /// Query parameters for the present bounds, in `fromDate`, `toDate` order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(from) = self.from_iso() {
            pairs.push(("fromDate", from));
        }
        if let Some(to) = self.to_iso() {
            pairs.push(("toDate", to));
        }
        pairs
    }
}

/// Serde adapter: `Option<DateTime<Utc>>` as `toISOString()` text or `null`.
mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::wallclock::to_iso_string;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&to_iso_string(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| de::Error::custom(format!("'{}': {}", s, e)))
            })
            .transpose()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
