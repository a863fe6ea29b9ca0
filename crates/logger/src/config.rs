// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Logger configuration
//!
//! ## Example
//!
//! ```rust
//! use my_utils_logger::{Level, LoggerConfig, Targets};
//!
//! let config = LoggerConfig::from_json_str(
//!     r#"{ "level": "notice", "targets": "STDERR | LOG_FILE", "file": "app.log" }"#,
//! )
//! .unwrap();
//! assert_eq!(config.level, Level::Notice);
//! assert_eq!(config.targets, Targets::STDERR | Targets::LOG_FILE);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, LoggerResult};
use crate::level::Level;
use crate::target::Targets;

/// Log file used when none is configured
pub const DEFAULT_LOG_FILE: &str = "log.log";

/// Logger settings
///
/// Every field is optional in serialized form; missing fields take their
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Messages below this severity are dropped
    pub level: Level,

    /// Outputs to write to; empty disables logging
    pub targets: Targets,

    /// File used by the `LOG_FILE` target
    pub file: PathBuf,

    /// Prefix lines with a `%d/%b/%Y %H:%M:%S` local timestamp
    pub timestamp: bool,

    /// Include the level in each line
    pub show_level: bool,

    /// Include source file and line in each line
    pub function_info: bool,

    /// Remove an existing log file before the first write to it
    pub delete_previous_log: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            targets: Targets::DISABLED,
            file: PathBuf::from(DEFAULT_LOG_FILE),
            timestamp: true,
            show_level: true,
            function_info: cfg!(debug_assertions),
            delete_previous_log: true,
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> LoggerResult<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::InvalidConfig(e.to_string()))
    }

    /// Read and parse a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoggerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Set the severity threshold
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the output targets
    pub fn with_targets(mut self, targets: Targets) -> Self {
        self.targets = targets;
        self
    }

    /// Set the log file
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self
    }

    /// Toggle the timestamp prefix
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    /// Toggle the level column
    pub fn with_show_level(mut self, enabled: bool) -> Self {
        self.show_level = enabled;
        self
    }

    /// Toggle source file and line decorations
    pub fn with_function_info(mut self, enabled: bool) -> Self {
        self.function_info = enabled;
        self
    }

    /// Toggle removal of an existing log file before the first write
    pub fn with_delete_previous_log(mut self, enabled: bool) -> Self {
        self.delete_previous_log = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert!(config.targets.is_disabled());
        assert_eq!(config.file, PathBuf::from("log.log"));
        assert!(config.timestamp);
        assert!(config.show_level);
        assert!(config.delete_previous_log);
        assert_eq!(config.function_info, cfg!(debug_assertions));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LoggerConfig::from_json_str(r#"{ "level": "ERROR" }"#).unwrap();
        assert_eq!(config.level, Level::Error);
        assert_eq!(config.file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(config.timestamp);
    }

    #[test]
    fn test_full_json() {
        let config = LoggerConfig::from_json_str(
            r#"{
                "level": "warning",
                "targets": "STDOUT | STDERR",
                "file": "/tmp/app.log",
                "timestamp": false,
                "show_level": false,
                "function_info": true,
                "delete_previous_log": false
            }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            LoggerConfig::default()
                .with_level(Level::Warning)
                .with_targets(Targets::STDOUT | Targets::STDERR)
                .with_file("/tmp/app.log")
                .with_timestamp(false)
                .with_show_level(false)
                .with_function_info(true)
                .with_delete_previous_log(false)
        );
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            LoggerConfig::from_json_str(r#"{ "level": "loud" }"#),
            Err(LoggerError::InvalidConfig(_))
        ));
        assert!(matches!(
            LoggerConfig::from_json_str("not json"),
            Err(LoggerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let result = LoggerConfig::from_file("/nonexistent/dir/logger.json");
        assert!(matches!(result, Err(LoggerError::ConfigRead { .. })));
    }
}
