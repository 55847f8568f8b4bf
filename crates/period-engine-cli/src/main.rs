mod config;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use period_engine::{
    custom_interval, parse_picked_date, resolve_period_at, PeriodKey, ResolveOptions,
    WeekStartDay,
};
use tracing::{debug, warn};

use crate::config::{Config, OutputFormat};

/// Resolve reporting periods to day-aligned date intervals.
#[derive(Parser, Debug)]
#[command(name = "periods", version, about, long_about = None)]
struct Cli {
    /// Config file (TOML). Defaults to ./periods.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a period key (today, this-week, last-quarter, ...)
    Resolve {
        /// Period key
        key: String,

        /// Anchor instant: RFC 3339, local datetime, or YYYY-MM-DD. Defaults to now.
        #[arg(long)]
        now: Option<String>,

        /// IANA reference timezone. Defaults to the configured or system timezone.
        #[arg(long)]
        timezone: Option<String>,

        /// First day of the week: monday, sunday, 1 or 0.
        #[arg(long)]
        week_start: Option<WeekStartDay>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Build an interval from explicit custom date picks
    Custom {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List every period key
    List {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::discover(cli.config.as_deref())?;
    config.logging.init(cli.verbose);

    let rendered = match cli.command {
        Command::Resolve {
            key,
            now,
            timezone,
            week_start,
            format,
        } => {
            let options = ResolveOptions::with_week_start(week_start.unwrap_or(config.week_start));
            let timezone = timezone.or_else(|| config.timezone.clone());
            if key.parse::<PeriodKey>().is_err() {
                warn!(key = %key, "unknown period key, no date filter applies");
            }

            debug!(key = %key, now = ?now, timezone = ?timezone, "resolving period");
            let interval = resolve_period_at(&key, now.as_deref(), timezone.as_deref(), &options)
                .with_context(|| format!("cannot resolve period '{key}'"))?;
            output::render_interval(&key, interval, format.unwrap_or(config.format))?
        }
        Command::Custom { from, to, format } => {
            let from = from
                .as_deref()
                .map(parse_picked_date)
                .transpose()
                .context("invalid --from date")?;
            let to = to
                .as_deref()
                .map(parse_picked_date)
                .transpose()
                .context("invalid --to date")?;
            let interval = custom_interval(from, to)?;
            output::render_interval(
                PeriodKey::CustomDates.as_str(),
                interval,
                format.unwrap_or(config.format),
            )?
        }
        Command::List { format } => output::render_keys(format.unwrap_or(config.format))?,
    };

    println!("{rendered}");
    Ok(())
}
