//! # Logging setup
//!
//! Each binary initializes the `log` facade once, through [`init`] when the
//! config itself is the point of the program and through [`init_or_default`]
//! when a bad config must not stop a demo. Settings come from a YAML file:
//!
//! ```yaml
//! level: info          # off | error | warn | info | debug | trace
//! show_timestamps: false
//! show_target: false
//! ```
//!
//! The file is `log.yaml` in the working directory unless
//! `COURSE_DEMOS_LOG_CONFIG` names another path. A missing file means
//! defaults. `RUST_LOG` overrides the level from the file.
//!
//! Records always go to stderr so the demos' stdout stays exact.

use anyhow::{Context, Result};
use log::{debug, error, info, warn, LevelFilter};
use shared::{LogLevel, LoggingConfig};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "log.yaml";

/// Environment variable that points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "COURSE_DEMOS_LOG_CONFIG";

pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::Off,
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

pub fn config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load logging settings from `path`. A missing or empty file yields the
/// defaults; anything unreadable or malformed is an error.
pub fn load_config(path: &Path) -> Result<LoggingConfig> {
    let yaml_content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LoggingConfig::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read logging config {:?}", path));
        }
    };
    if yaml_content.trim().is_empty() {
        return Ok(LoggingConfig::default());
    }

    let config: LoggingConfig = serde_yaml::from_str(&yaml_content)
        .with_context(|| format!("Invalid logging config {:?}", path))?;
    Ok(config)
}

/// Like [`load_config`], but a bad file falls back to the defaults. The load
/// error is handed back so it can be logged once a logger exists.
pub fn load_config_or_default(path: &Path) -> (LoggingConfig, Option<anyhow::Error>) {
    match load_config(path) {
        Ok(config) => (config, None),
        Err(e) => (LoggingConfig::default(), Some(e)),
    }
}

fn install(config: &LoggingConfig) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_filter(config.level));
    if config.show_timestamps {
        builder.format_timestamp_secs();
    } else {
        builder.format_timestamp(None);
    }
    builder.format_target(config.show_target);
    builder.parse_default_env();
    builder.try_init().context("Logger already initialized")?;
    Ok(())
}

/// Load the config and install the global logger. A bad config file is an
/// error.
pub fn init() -> Result<LoggingConfig> {
    let path = config_path();
    let config = load_config(&path)?;
    install(&config)?;

    debug!("Logging initialized from {:?} at level {}", path, config.level);
    Ok(config)
}

/// Install the global logger without letting a bad config file stop the
/// caller: the defaults are used and the problem is logged as a warning.
pub fn init_or_default() -> Result<LoggingConfig> {
    let path = config_path();
    let (config, load_error) = load_config_or_default(&path);
    install(&config)?;

    if let Some(e) = load_error {
        warn!("Ignoring logging config {:?}, using defaults: {:#}", path, e);
    }
    debug!("Logging initialized at level {}", config.level);
    Ok(config)
}

/// Emit one record per severity so the effect of the configured level can be
/// seen directly. `log` has no level above error, so the critical record goes
/// out at error.
pub fn emit_sample_records() {
    debug!("debug message");
    info!("info message");
    warn!("warn message");
    error!("error message");
    error!("critical message");
}
