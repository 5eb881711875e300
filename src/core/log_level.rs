//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Info = 0,
    Warning = 1,
    Error = 2,
    Debug = 3,
}

/// Prefix rendered for a level code that does not map to any known level.
pub const UNKNOWN_LEVEL_PREFIX: &str = "[?]";

impl LogLevel {
    /// Short prefix substituted for `%level%` in the format template.
    pub fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "[+]",
            LogLevel::Warning => "[!]",
            LogLevel::Error => "[-]",
            LogLevel::Debug => "[*]",
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Decode a numeric level code, e.g. from a host application's config.
    pub fn from_repr(value: u8) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Info),
            1 => Some(LogLevel::Warning),
            2 => Some(LogLevel::Error),
            3 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Debug => Blue,
        }
    }
}

/// Prefix for a possibly-unknown level, falling back to `[?]`.
pub fn prefix_or_unknown(level: Option<LogLevel>) -> &'static str {
    level.map_or(UNKNOWN_LEVEL_PREFIX, LogLevel::prefix)
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
