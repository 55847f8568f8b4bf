//! Rendering of intervals and key listings.

use anyhow::Result;
use period_engine::{DateInterval, PeriodKey};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
struct IntervalRecord<'a> {
    key: &'a str,
    #[serde(flatten)]
    interval: DateInterval,
}

#[derive(Serialize)]
struct KeyRecord {
    key: &'static str,
    label: &'static str,
    bounded: bool,
}

/// `{"key", "fromDate", "toDate"}` as JSON, or `fromDate<TAB>toDate` as text.
pub fn render_interval(key: &str, interval: DateInterval, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&IntervalRecord { key, interval })?),
        OutputFormat::Text => Ok(format!(
            "{}\t{}",
            interval.from_iso().as_deref().unwrap_or("-"),
            interval.to_iso().as_deref().unwrap_or("-"),
        )),
    }
}

pub fn render_keys(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let records: Vec<KeyRecord> = PeriodKey::ALL
                .into_iter()
                .map(|key| KeyRecord {
                    key: key.as_str(),
                    label: key.label(),
                    bounded: key.is_bounded(),
                })
                .collect();
            Ok(serde_json::to_string(&records)?)
        }
        OutputFormat::Text => Ok(PeriodKey::ALL
            .into_iter()
            .map(|key| format!("{}\t{}", key.as_str(), key.label()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
