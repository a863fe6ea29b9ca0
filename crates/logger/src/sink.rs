// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Routing of formatted lines to the selected targets
//!
//! `tracing-subscriber` formats each event into one buffer and hands it to
//! a writer obtained from [`TargetWriter`]. The writer looks at the target
//! set at write time, so target changes apply to the next line without
//! rebuilding the subscriber.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

use crate::target::Targets;

#[derive(Debug)]
struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

/// Shared output state of one logger
#[derive(Debug)]
pub(crate) struct Sinks {
    targets: AtomicU8,
    // Also serializes whole lines across all targets
    file: Mutex<FileSink>,
}

impl Sinks {
    pub(crate) fn new(targets: Targets, path: PathBuf) -> Self {
        Self {
            targets: AtomicU8::new(targets.bits()),
            file: Mutex::new(FileSink { path, file: None }),
        }
    }

    fn lock_file(&self) -> MutexGuard<'_, FileSink> {
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn targets(&self) -> Targets {
        Targets::from_bits_truncate(self.targets.load(Ordering::Acquire))
    }

    pub(crate) fn set_targets(&self, targets: Targets) {
        self.targets.store(targets.bits(), Ordering::Release);
    }

    pub(crate) fn update_targets(&self, update: impl Fn(Targets) -> Targets) {
        let _ = self
            .targets
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
                Some(update(Targets::from_bits_truncate(bits)).bits())
            });
    }

    pub(crate) fn file_path(&self) -> PathBuf {
        self.lock_file().path.clone()
    }

    pub(crate) fn has_open_file(&self) -> bool {
        self.lock_file().file.is_some()
    }

    /// Close the current file and open `path` for appending
    ///
    /// On failure no file is left open and the configured path is unchanged.
    pub(crate) fn open_file(&self, path: &Path, delete_existing: bool) -> io::Result<()> {
        let mut sink = self.lock_file();
        sink.file = None;
        let file = open_append(path, delete_existing)?;
        sink.file = Some(file);
        sink.path = path.to_path_buf();
        Ok(())
    }

    /// Open the configured file unless one is already open
    ///
    /// Returns the configured path on failure.
    pub(crate) fn ensure_open(&self, delete_existing: bool) -> Result<(), (PathBuf, io::Error)> {
        let mut sink = self.lock_file();
        if sink.file.is_some() {
            return Ok(());
        }
        match open_append(&sink.path, delete_existing) {
            Ok(file) => {
                sink.file = Some(file);
                Ok(())
            }
            Err(e) => Err((sink.path.clone(), e)),
        }
    }

    fn write_line(&self, buf: &[u8]) -> io::Result<()> {
        let targets = self.targets();
        if targets.is_disabled() {
            return Ok(());
        }

        let mut sink = self.lock_file();
        if targets.contains(Targets::STDOUT) {
            io::stdout().lock().write_all(buf)?;
        }
        if targets.contains(Targets::STDERR) {
            io::stderr().lock().write_all(buf)?;
        }
        if targets.contains(Targets::LOG_FILE) {
            if let Some(file) = sink.file.as_mut() {
                file.write_all(buf)?;
                file.flush()?;
            }
        }
        Ok(())
    }
}

fn open_append(path: &Path, delete_existing: bool) -> io::Result<File> {
    if delete_existing {
        match std::fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `MakeWriter` that fans lines out to a logger's current targets
#[derive(Debug, Clone)]
pub struct TargetWriter {
    sinks: Arc<Sinks>,
}

impl TargetWriter {
    pub(crate) fn new(sinks: Arc<Sinks>) -> Self {
        Self { sinks }
    }
}

impl Write for TargetWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sinks.write_line(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for TargetWriter {
    type Writer = TargetWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
