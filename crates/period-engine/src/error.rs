//! Error types for period-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    #[error("Invalid week start: {0} (expected 0 for Sunday or 1 for Monday)")]
    InvalidWeekStart(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Inverted range: from {from} is after to {to}")]
    InvertedRange { from: NaiveDate, to: NaiveDate },
}

pub type Result<T> = std::result::Result<T, PeriodError>;
