//! CLI configuration.
//!
//! Loaded from a TOML file (`--config`, or `periods.toml` in the working
//! directory when present). Command-line flags override every value here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use period_engine::{parse_timezone, WeekStartDay};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "periods.toml";

/// Output format for every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// IANA timezone used as the reference timezone; system local when unset.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub week_start: WeekStartDay,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        if let Some(tz) = &config.timezone {
            parse_timezone(tz)
                .with_context(|| format!("invalid timezone in {}", path.display()))?;
        }
        EnvFilter::try_new(&config.logging.level)
            .with_context(|| format!("invalid logging level in {}", path.display()))?;
        Ok(config)
    }

    /// `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Config::default());
                }
                fallback
            }
        };
        Config::load(&path)
    }
}

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `warn` or `period_engine=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Install the global subscriber. Logs go to stderr so stdout stays
    /// machine-readable. `RUST_LOG` wins over the configured level.
    pub fn init(&self, verbose: bool) {
        let level = if verbose { "debug" } else { self.level.as_str() };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        match self.format {
            LogFormat::Json => {
                fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            LogFormat::Pretty => {
                fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
        }
    }
}
