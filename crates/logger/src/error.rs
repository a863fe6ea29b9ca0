// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for logger configuration
//!
//! Writing a message never fails; only configuring the logger can.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for logger operations
pub type LoggerResult<T> = Result<T, LoggerError>;

/// Errors that can occur while configuring or installing the logger
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log file could not be opened for appending
    #[error("Failed to open log file '{}': {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read
    #[error("Failed to read logger config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be parsed
    #[error("Invalid logger configuration: {0}")]
    InvalidConfig(String),

    /// A level name did not match any severity
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// Another global subscriber is already set
    #[error("Failed to install logger: {0}")]
    AlreadyInstalled(String),
}
