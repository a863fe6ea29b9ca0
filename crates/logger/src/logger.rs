// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Logger
//!
//! A [`Logger`] decides *whether* a message is written (severity threshold
//! and target set) and *where* it goes (stdout, stderr, log file). Line
//! formatting is done by `tracing-subscriber`: messages are emitted as
//! `tracing` events carrying a `severity` field and formatted by the
//! logger's own subscriber into its targets. [`Logger::install`]
//! additionally routes events from other crates to the same targets.
//!
//! ## Example
//!
//! ```rust,no_run
//! use my_utils_logger::{Level, Logger, LoggerConfig, Targets};
//!
//! let logger = Logger::new(LoggerConfig::default().with_targets(Targets::STDERR));
//! logger.install().unwrap();
//!
//! logger.info("service started");
//! logger.set_level(Level::Warning);
//! logger.notice("dropped: below the threshold");
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use tracing::{Dispatch, Subscriber};
use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

use crate::config::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};
use crate::format::LineFormat;
use crate::level::Level;
use crate::sink::{Sinks, TargetWriter};
use crate::target::Targets;

/// `tracing` target of every event emitted by [`Logger::write`]
pub const LOG_TARGET: &str = "my_utils_logger";

/// Leveled logger with selectable targets
///
/// Threshold and targets can be changed at any time from any thread; line
/// decorations (timestamp, level, source location) are fixed at
/// construction.
#[derive(Debug)]
pub struct Logger {
    level: AtomicU8,
    sinks: Arc<Sinks>,
    // Formats this logger's own events, whatever the current default is
    dispatch: Dispatch,
    config: LoggerConfig,
}

impl Logger {
    /// Create a logger from `config`
    ///
    /// The logger writes on its own; no subscriber has to be installed for
    /// [`write`](Self::write) to reach the targets. No file is opened until
    /// a message is written with the `LOG_FILE` target selected, or
    /// [`set_file`](Self::set_file) is called.
    pub fn new(config: LoggerConfig) -> Self {
        let sinks = Arc::new(Sinks::new(config.targets, config.file.clone()));
        let own = format_layer(&config, TargetWriter::new(Arc::clone(&sinks)));
        Self {
            level: AtomicU8::new(config.level as u8),
            sinks,
            dispatch: Dispatch::new(tracing_subscriber::registry().with(own)),
            config,
        }
    }

    /// Replace the target set with `targets`
    pub fn set_target(&self, targets: Targets) {
        self.sinks.set_targets(targets);
    }

    /// Toggle `targets` in the current set
    pub fn xor_target(&self, targets: Targets) {
        self.sinks.update_targets(|current| current ^ targets);
    }

    /// Add `targets` to the current set
    pub fn or_target(&self, targets: Targets) {
        self.sinks.update_targets(|current| current | targets);
    }

    /// Current target set
    pub fn targets(&self) -> Targets {
        self.sinks.targets()
    }

    /// Set the severity threshold
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Release);
    }

    /// Current severity threshold. Only messages with equal or higher
    /// severity are written.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Display name of `level`
    pub fn level_to_string(&self, level: Level) -> &'static str {
        level.as_str()
    }

    /// Path used by the `LOG_FILE` target
    pub fn file_path(&self) -> PathBuf {
        self.sinks.file_path()
    }

    /// Whether the log file is currently open
    pub fn file_is_open(&self) -> bool {
        self.sinks.has_open_file()
    }

    /// Switch the `LOG_FILE` target to `path`
    ///
    /// Closes the current file, removes an existing file at `path` when
    /// `delete_existing` is set, and opens `path` for appending. On failure
    /// the error is also logged to the remaining targets.
    pub fn set_file(&self, path: impl AsRef<Path>, delete_existing: bool) -> LoggerResult<()> {
        let path = path.as_ref();
        self.sinks
            .open_file(path, delete_existing)
            .map_err(|source| self.file_open_failed(path, source))
    }

    /// Write `message` at `level`
    ///
    /// Dropped when below the threshold or when no target is selected. The
    /// event goes through this logger's own subscriber, so it is written
    /// whether or not the logger was installed.
    pub fn write(&self, level: Level, message: &str) {
        if level < self.level() {
            return;
        }
        let targets = self.targets();
        if targets.is_disabled() {
            return;
        }
        if targets.contains(Targets::LOG_FILE) {
            if let Err((path, source)) = self.sinks.ensure_open(self.config.delete_previous_log) {
                // Still goes to the other targets
                let _ = self.file_open_failed(&path, source);
            }
        }

        let severity = level.as_str();
        tracing::dispatcher::with_default(&self.dispatch, || match level {
            Level::Debug => tracing::debug!(target: LOG_TARGET, severity, "{message}"),
            Level::Info | Level::Notice => {
                tracing::info!(target: LOG_TARGET, severity, "{message}")
            }
            Level::Warning => {
                tracing::warn!(target: LOG_TARGET, severity, "{message}")
            }
            Level::Error | Level::Critical | Level::Alert | Level::Emergency => {
                tracing::error!(target: LOG_TARGET, severity, "{message}")
            }
        });
    }

    /// Write `message` at [`Level::Debug`]
    pub fn debug(&self, message: &str) {
        self.write(Level::Debug, message);
    }

    /// Write `message` at [`Level::Info`]
    pub fn info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    /// Write `message` at [`Level::Notice`]
    pub fn notice(&self, message: &str) {
        self.write(Level::Notice, message);
    }

    /// Write `message` at [`Level::Warning`]
    pub fn warning(&self, message: &str) {
        self.write(Level::Warning, message);
    }

    /// Write `message` at [`Level::Error`]
    pub fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }

    /// Write `message` at [`Level::Critical`]
    pub fn critical(&self, message: &str) {
        self.write(Level::Critical, message);
    }

    /// Write `message` at [`Level::Alert`]
    pub fn alert(&self, message: &str) {
        self.write(Level::Alert, message);
    }

    /// Write `message` at [`Level::Emergency`]
    pub fn emergency(&self, message: &str) {
        self.write(Level::Emergency, message);
    }

    /// Writer routing formatted lines to this logger's targets
    pub fn writer(&self) -> TargetWriter {
        TargetWriter::new(Arc::clone(&self.sinks))
    }

    /// Build a subscriber that formats all events into this logger's targets
    ///
    /// Used by [`install`](Self::install) for events from other crates,
    /// which are filtered by `RUST_LOG` and default to the logger's
    /// configured level. Events from [`write`](Self::write) always pass;
    /// their threshold is applied by the logger itself.
    pub fn subscriber(&self) -> LoggerResult<impl Subscriber + Send + Sync + 'static> {
        let own_events = format!("{LOG_TARGET}=trace")
            .parse::<Directive>()
            .map_err(|e| LoggerError::InvalidConfig(e.to_string()))?;
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.level().tracing_level()).into())
            .from_env_lossy()
            .add_directive(own_events);

        let layer = format_layer(&self.config, self.writer());
        Ok(tracing_subscriber::registry().with(layer.with_filter(filter)))
    }

    /// Install [`subscriber`](Self::subscriber) as the global default
    ///
    /// Fails if a global subscriber is already set.
    pub fn install(&self) -> LoggerResult<()> {
        let subscriber = self.subscriber()?;
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| LoggerError::AlreadyInstalled(e.to_string()))?;
        tracing::debug!(
            level = self.level().as_str(),
            targets = ?self.targets(),
            "Logger installed"
        );
        Ok(())
    }

    fn file_open_failed(&self, path: &Path, source: std::io::Error) -> LoggerError {
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::error!(
                target: LOG_TARGET,
                severity = Level::Error.as_str(),
                path = %path.display(),
                error = %source,
                "Failed to open log file"
            )
        });
        LoggerError::FileOpen {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn format_layer(
    config: &LoggerConfig,
    writer: TargetWriter,
) -> Box<dyn Layer<Registry> + Send + Sync> {
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .event_format(LineFormat::new(config))
        .boxed()
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}
