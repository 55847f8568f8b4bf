//! Browser bindings for period-engine.
//!
//! Every export returns JSON text (or an ISO string) so the dashboard can
//! hand results straight to its query builders. Optional arguments map to
//! `undefined` on the JS side.

use chrono::DateTime;
use period_engine::{
    custom_interval, parse_anchor, parse_picked_date, parse_timezone, preserve_wall_clock,
    resolve_period_at, to_iso_string, DateInterval, PeriodError, PeriodKey, ResolveOptions,
    WeekStartDay,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// `resolvePeriod(key, now?, weekStartsOn?, timezone?)` → `{"fromDate", "toDate"}`.
///
/// `now` defaults to the current clock, `weekStartsOn` to `1` (Monday),
/// `timezone` to the browser's local timezone.
#[wasm_bindgen(js_name = resolvePeriod)]
pub fn resolve_period_js(
    key: &str,
    now: Option<String>,
    week_starts_on: Option<u8>,
    timezone: Option<String>,
) -> Result<String, JsError> {
    let interval = resolve_interval(key, now.as_deref(), week_starts_on, timezone.as_deref())?;
    Ok(serde_json::to_string(&interval)?)
}

/// `customInterval(from?, to?)` → `{"fromDate", "toDate"}` from picker values.
#[wasm_bindgen(js_name = customInterval)]
pub fn custom_interval_js(from: Option<String>, to: Option<String>) -> Result<String, JsError> {
    let interval = custom_picks(from.as_deref(), to.as_deref())?;
    Ok(serde_json::to_string(&interval)?)
}

/// `preserveWallClock(datetime, timezone)` → ISO string carrying the local
/// wall clock of `datetime` in `timezone` as UTC fields.
#[wasm_bindgen(js_name = preserveWallClock)]
pub fn preserve_wall_clock_js(datetime: &str, timezone: &str) -> Result<String, JsError> {
    Ok(preserve_in_zone(datetime, timezone)?)
}

/// `periodKeys()` → `[{"key", "label"}, ...]` in selector order.
#[wasm_bindgen(js_name = periodKeys)]
pub fn period_keys_js() -> Result<String, JsError> {
    Ok(serde_json::to_string(&key_entries())?)
}

// ── Plain-Rust cores (testable off-wasm) ────────────────────────────────────

fn resolve_interval(
    key: &str,
    now: Option<&str>,
    week_starts_on: Option<u8>,
    timezone: Option<&str>,
) -> Result<DateInterval, PeriodError> {
    let week_start = week_starts_on
        .map(WeekStartDay::try_from)
        .transpose()?
        .unwrap_or_default();
    resolve_period_at(key, now, timezone, &ResolveOptions::with_week_start(week_start))
}

fn custom_picks(from: Option<&str>, to: Option<&str>) -> Result<DateInterval, PeriodError> {
    let from = from.map(parse_picked_date).transpose()?;
    let to = to.map(parse_picked_date).transpose()?;
    custom_interval(from, to)
}

fn preserve_in_zone(datetime: &str, timezone: &str) -> Result<String, PeriodError> {
    let tz = parse_timezone(timezone)?;
    let local: DateTime<_> = parse_anchor(datetime, &tz)?;
    Ok(to_iso_string(&preserve_wall_clock(&local)))
}

#[derive(Serialize)]
struct KeyEntry {
    key: &'static str,
    label: &'static str,
}

fn key_entries() -> Vec<KeyEntry> {
    PeriodKey::ALL
        .into_iter()
        .map(|key| KeyEntry {
            key: key.as_str(),
            label: key.label(),
        })
        .collect()
}
