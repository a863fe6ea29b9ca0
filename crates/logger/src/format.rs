// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Line layout of logger output
//!
//! `<timestamp> <LEVEL> <file>:<line>: <message> <fields>`, with each
//! decoration present only when enabled in [`LoggerConfig`]. The level
//! column shows the event's `severity` field when it carries one, so every
//! severity keeps its own name; other events show their `tracing` level.
//! The `severity` field itself is never printed as a field.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{ChronoLocal, FormatTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::config::LoggerConfig;

/// Timestamp layout used when timestamps are enabled
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y %H:%M:%S";

/// Field carrying the exact severity of a logger event
pub(crate) const SEVERITY_FIELD: &str = "severity";

/// Event formatter built from the decoration flags of a [`LoggerConfig`]
#[derive(Debug, Clone)]
pub(crate) struct LineFormat {
    timer: Option<ChronoLocal>,
    show_level: bool,
    function_info: bool,
}

impl LineFormat {
    pub(crate) fn new(config: &LoggerConfig) -> Self {
        Self {
            timer: config
                .timestamp
                .then(|| ChronoLocal::new(TIMESTAMP_FORMAT.to_string())),
            show_level: config.show_level,
            function_info: config.function_info,
        }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = LineFields::default();
        event.record(&mut fields);
        let metadata = event.metadata();

        if let Some(timer) = &self.timer {
            timer.format_time(&mut writer)?;
            writer.write_char(' ')?;
        }
        if self.show_level {
            match &fields.severity {
                Some(severity) => write!(writer, "{severity} ")?,
                None => write!(writer, "{} ", metadata.level())?,
            }
        }
        if self.function_info {
            if let Some(file) = metadata.file() {
                write!(writer, "{file}:")?;
                if let Some(line) = metadata.line() {
                    write!(writer, "{line}:")?;
                }
                writer.write_char(' ')?;
            }
        }

        writer.write_str(&fields.message)?;
        if !fields.rest.is_empty() {
            if !fields.message.is_empty() {
                writer.write_char(' ')?;
            }
            writer.write_str(&fields.rest)?;
        }
        writeln!(writer)
    }
}

/// Splits an event into severity, message and remaining `name=value` fields
#[derive(Debug, Default)]
struct LineFields {
    severity: Option<String>,
    message: String,
    rest: String,
}

impl LineFields {
    fn push_field(&mut self, name: &str, value: &dyn fmt::Debug) {
        if !self.rest.is_empty() {
            self.rest.push(' ');
        }
        let _ = write!(self.rest, "{name}={value:?}");
    }
}

impl Visit for LineFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            SEVERITY_FIELD => self.severity = Some(value.to_string()),
            "message" => self.message.push_str(value),
            name => self.push_field(name, &value),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            SEVERITY_FIELD => self.severity = Some(format!("{value:?}")),
            "message" => {
                let _ = write!(self.message, "{value:?}");
            }
            name => self.push_field(name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_follows_config_flags() {
        let format = LineFormat::new(
            &LoggerConfig::default()
                .with_timestamp(false)
                .with_show_level(true)
                .with_function_info(false),
        );
        assert!(format.timer.is_none());
        assert!(format.show_level);
        assert!(!format.function_info);

        let format = LineFormat::new(&LoggerConfig::default().with_timestamp(true));
        assert!(format.timer.is_some());
    }

    #[test]
    fn test_push_field_separates_entries() {
        let mut fields = LineFields::default();
        fields.push_field("path", &"a.log");
        fields.push_field("attempt", &2);
        assert_eq!(fields.rest, "path=\"a.log\" attempt=2");
    }
}
