use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity threshold for the demo binaries' logger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Logging disabled entirely
    Off,
    Error,
    /// Default: only problems are shown, demo output stays clean
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration read from `log.yaml`.
///
/// Every field is optional in the file; missing fields take the defaults
/// below. Unknown fields are rejected so typos surface as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum severity that gets printed
    pub level: LogLevel,
    /// Prefix each record with a timestamp (seconds precision)
    pub show_timestamps: bool,
    /// Include the module path that emitted the record
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            show_timestamps: false,
            show_target: false,
        }
    }
}
