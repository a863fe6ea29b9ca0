// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # my-utils logger
//!
//! Leveled logging with a runtime-selectable set of outputs.
//!
//! ## Overview
//!
//! - Eight severities, [`Level::Debug`] through [`Level::Emergency`], with a
//!   runtime threshold
//! - Output [`Targets`]: stdout, stderr and a log file, in any combination;
//!   the empty set disables logging
//! - Line formatting by `tracing-subscriber` (local timestamp, level, source
//!   location), configured through [`LoggerConfig`]
//!
//! ```text
//! Logger::write(level, msg)
//!     │ threshold + target check
//!     ↓
//! tracing event (target = "my_utils_logger", severity = "NOTICE")
//!     │ fmt layer
//!     ↓
//! TargetWriter ──→ stdout / stderr / log file
//! ```

pub mod config;
pub mod error;
mod format;
pub mod level;
pub mod logger;
pub mod sink;
pub mod target;

// Re-exports
pub use config::{DEFAULT_LOG_FILE, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use format::TIMESTAMP_FORMAT;
pub use level::Level;
pub use logger::{LOG_TARGET, Logger};
pub use sink::TargetWriter;
pub use target::Targets;
