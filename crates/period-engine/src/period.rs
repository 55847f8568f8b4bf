//! Period selector vocabulary.
//!
//! [`PeriodKey`] is the token a period dropdown emits (`"this-week"`,
//! `"last-quarter"`, ...). [`WeekStartDay`] carries the `weekStartsOn`
//! convention used when a period is measured in weeks.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::PeriodError;

// ── Period keys ─────────────────────────────────────────────────────────────

/// A symbolic reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodKey {
    Today,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    ThisYear,
    LastYear,
    /// The caller supplies explicit picks; see [`crate::custom`].
    CustomDates,
    /// Selector cleared.
    Empty,
    /// No date filter.
    AllDate,
}

impl PeriodKey {
    /// Every key, in the order a period selector lists them.
    pub const ALL: [PeriodKey; 12] = [
        PeriodKey::Today,
        PeriodKey::ThisWeek,
        PeriodKey::LastWeek,
        PeriodKey::ThisMonth,
        PeriodKey::LastMonth,
        PeriodKey::ThisQuarter,
        PeriodKey::LastQuarter,
        PeriodKey::ThisYear,
        PeriodKey::LastYear,
        PeriodKey::CustomDates,
        PeriodKey::Empty,
        PeriodKey::AllDate,
    ];

    /// The wire token, e.g. `"last-month"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PeriodKey::Today => "today",
            PeriodKey::ThisWeek => "this-week",
            PeriodKey::LastWeek => "last-week",
            PeriodKey::ThisMonth => "this-month",
            PeriodKey::LastMonth => "last-month",
            PeriodKey::ThisQuarter => "this-quarter",
            PeriodKey::LastQuarter => "last-quarter",
            PeriodKey::ThisYear => "this-year",
            PeriodKey::LastYear => "last-year",
            PeriodKey::CustomDates => "custom-dates",
            PeriodKey::Empty => "empty",
            PeriodKey::AllDate => "all-date",
        }
    }

    /// Human label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            PeriodKey::Today => "Today",
            PeriodKey::ThisWeek => "This Week",
            PeriodKey::LastWeek => "Last Week",
            PeriodKey::ThisMonth => "This Month",
            PeriodKey::LastMonth => "Last Month",
            PeriodKey::ThisQuarter => "This Quarter",
            PeriodKey::LastQuarter => "Last Quarter",
            PeriodKey::ThisYear => "This Year",
            PeriodKey::LastYear => "Last Year",
            PeriodKey::CustomDates => "Custom Dates",
            PeriodKey::Empty => "None",
            PeriodKey::AllDate => "All Dates",
        }
    }

    /// Whether the resolver produces concrete bounds for this key.
    pub fn is_bounded(self) -> bool {
        !matches!(
            self,
            PeriodKey::CustomDates | PeriodKey::Empty | PeriodKey::AllDate
        )
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKey {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        PeriodKey::ALL
            .into_iter()
            .find(|key| key.as_str() == token)
            .ok_or_else(|| PeriodError::UnknownPeriod(format!("'{}'", token)))
    }
}

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week for `this-week` / `last-week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// ISO 8601 standard (Monday = day 0 of the week).
    #[default]
    Monday,
    /// US/Canada convention (Sunday = day 0 of the week).
    Sunday,
}

impl WeekStartDay {
    /// How many days `weekday` is from the week-start day.
    pub(crate) fn days_since_start(self, weekday: Weekday) -> i64 {
        match self {
            WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
            WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
        }
    }
}

/// Numeric `weekStartsOn` convention: `0` = Sunday, `1` = Monday.
impl TryFrom<u8> for WeekStartDay {
    type Error = PeriodError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WeekStartDay::Sunday),
            1 => Ok(WeekStartDay::Monday),
            other => Err(PeriodError::InvalidWeekStart(other.to_string())),
        }
    }
}

impl From<WeekStartDay> for u8 {
    fn from(value: WeekStartDay) -> Self {
        match value {
            WeekStartDay::Sunday => 0,
            WeekStartDay::Monday => 1,
        }
    }
}

impl FromStr for WeekStartDay {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" | "1" => Ok(WeekStartDay::Monday),
            "sunday" | "sun" | "0" => Ok(WeekStartDay::Sunday),
            _ => Err(PeriodError::InvalidWeekStart(format!("'{}'", s.trim()))),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_tokens_round_trip_through_from_str() {
        for key in PeriodKey::ALL {
            assert_eq!(key.as_str().parse::<PeriodKey>().unwrap(), key);
            assert_eq!(key.to_string(), key.as_str());
        }
    }

    #[test]
    fn test_key_from_str_trims_whitespace() {
        assert_eq!(" this-month ".parse::<PeriodKey>().unwrap(), PeriodKey::ThisMonth);
    }

    #[test]
    fn test_key_from_str_unknown() {
        let err = "bogus".parse::<PeriodKey>().unwrap_err();
        assert_eq!(err, PeriodError::UnknownPeriod("'bogus'".to_string()));
    }

    #[test]
    fn test_key_from_str_is_case_sensitive() {
        assert!("This-Week".parse::<PeriodKey>().is_err());
    }

    #[test]
    fn test_key_serde_uses_kebab_tokens() {
        let json = serde_json::to_string(&PeriodKey::LastQuarter).unwrap();
        assert_eq!(json, "\"last-quarter\"");
        let key: PeriodKey = serde_json::from_str("\"all-date\"").unwrap();
        assert_eq!(key, PeriodKey::AllDate);
    }

    #[test]
    fn test_only_selector_sentinels_are_unbounded() {
        let unbounded: Vec<_> = PeriodKey::ALL
            .into_iter()
            .filter(|k| !k.is_bounded())
            .collect();
        assert_eq!(
            unbounded,
            vec![PeriodKey::CustomDates, PeriodKey::Empty, PeriodKey::AllDate]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(PeriodKey::ThisQuarter.label(), "This Quarter");
        assert_eq!(PeriodKey::AllDate.label(), "All Dates");
    }

    #[test]
    fn test_week_start_default_is_monday() {
        assert_eq!(WeekStartDay::default(), WeekStartDay::Monday);
    }

    #[test]
    fn test_week_start_numeric_convention() {
        assert_eq!(WeekStartDay::try_from(0).unwrap(), WeekStartDay::Sunday);
        assert_eq!(WeekStartDay::try_from(1).unwrap(), WeekStartDay::Monday);
        assert!(matches!(
            WeekStartDay::try_from(2),
            Err(PeriodError::InvalidWeekStart(_))
        ));
        assert_eq!(u8::from(WeekStartDay::Sunday), 0);
    }

    #[test]
    fn test_week_start_from_str() {
        assert_eq!("Mon".parse::<WeekStartDay>().unwrap(), WeekStartDay::Monday);
        assert_eq!("sunday".parse::<WeekStartDay>().unwrap(), WeekStartDay::Sunday);
        assert_eq!("0".parse::<WeekStartDay>().unwrap(), WeekStartDay::Sunday);
        assert!("friday".parse::<WeekStartDay>().is_err());
    }

    #[test]
    fn test_days_since_start() {
        assert_eq!(WeekStartDay::Monday.days_since_start(Weekday::Mon), 0);
        assert_eq!(WeekStartDay::Monday.days_since_start(Weekday::Sun), 6);
        assert_eq!(WeekStartDay::Sunday.days_since_start(Weekday::Sun), 0);
        assert_eq!(WeekStartDay::Sunday.days_since_start(Weekday::Sat), 6);
    }
}
