// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Message severities
//!
//! Eight syslog-style levels, ordered from least to most severe. `tracing`
//! only has five levels, so several severities share a `tracing::Level`;
//! the exact severity travels with each event as its `severity` field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum Level {
    Debug = 1,
    Info = 2,
    Notice = 3,
    Warning = 4,
    Error = 5,
    Critical = 6,
    Alert = 7,
    Emergency = 8,
}

impl Level {
    /// All levels, least severe first
    pub const ALL: [Level; 8] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
        Level::Alert,
        Level::Emergency,
    ];

    /// Upper-case display name
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Alert => "ALERT",
            Level::Emergency => "EMERGENCY",
        }
    }

    /// Closest `tracing` level
    pub fn tracing_level(self) -> tracing::Level {
        match self {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info | Level::Notice => tracing::Level::INFO,
            Level::Warning => tracing::Level::WARN,
            Level::Error | Level::Critical | Level::Alert | Level::Emergency => {
                tracing::Level::ERROR
            }
        }
    }

    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| *level as u8 == value)
    }
}

impl Default for Level {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Parse a level name, ignoring case
    ///
    /// Accepts the display names plus the short forms `WARN`, `ERR` and
    /// `CRIT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Level::Debug,
            "INFO" => Level::Info,
            "NOTICE" => Level::Notice,
            "WARNING" | "WARN" => Level::Warning,
            "ERROR" | "ERR" => Level::Error,
            "CRITICAL" | "CRIT" => Level::Critical,
            "ALERT" => Level::Alert,
            "EMERGENCY" => Level::Emergency,
            _ => return Err(LoggerError::UnknownLevel(s.to_string())),
        };
        Ok(level)
    }
}

impl TryFrom<String> for Level {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, LoggerError> {
        value.parse()
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Notice < Level::Warning);
        assert!(Level::Alert < Level::Emergency);
        assert!(Level::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("notice".parse::<Level>().unwrap(), Level::Notice);
        assert_eq!("Warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" CRITICAL ".parse::<Level>().unwrap(), Level::Critical);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(LoggerError::UnknownLevel(name)) if name == "verbose"
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_try_from_string() {
        assert_eq!(Level::try_from(String::from("alert")).unwrap(), Level::Alert);
        assert!(matches!(
            Level::try_from(String::from("loud")),
            Err(LoggerError::UnknownLevel(name)) if name == "loud"
        ));
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Level::from_u8(1), Some(Level::Debug));
        assert_eq!(Level::from_u8(8), Some(Level::Emergency));
        assert_eq!(Level::from_u8(0), None);
        assert_eq!(Level::from_u8(9), None);
    }

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(Level::Notice.tracing_level(), tracing::Level::INFO);
        assert_eq!(Level::Warning.tracing_level(), tracing::Level::WARN);
        assert_eq!(Level::Emergency.tracing_level(), tracing::Level::ERROR);
    }
}
