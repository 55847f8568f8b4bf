//! # period-engine
//!
//! Deterministic reporting-period resolution for business dashboards.
//!
//! A period selector emits a symbolic key (`"this-week"`, `"last-quarter"`,
//! ...). The engine turns that key and an explicit "now" anchor into a
//! closed, day-aligned interval whose bounds survive always-UTC ISO
//! serialization without drifting to a neighbouring day.
//!
//! ## Modules
//!
//! - [`period`] — period keys and the week-start convention
//! - [`resolver`] — key + anchor → [`DateInterval`], anchor parsing
//! - [`wallclock`] — wall-clock-preserving UTC transform, ISO formatting
//! - [`interval`] — the interval type, local filtering, query parameters
//! - [`custom`] — caller-supplied custom date picks
//! - [`error`] — Error types

pub mod custom;
pub mod error;
pub mod interval;
pub mod period;
pub mod resolver;
pub mod wallclock;

pub use custom::{custom_interval, parse_picked_date};
pub use error::PeriodError;
pub use interval::DateInterval;
pub use period::{PeriodKey, WeekStartDay};
pub use resolver::{
    parse_anchor, parse_timezone, resolve, resolve_period, resolve_period_at, resolve_period_now,
    ResolveOptions,
};
pub use wallclock::{preserve_wall_clock, to_iso_string};
