// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Sample registry
//!
//! Shared table of [`Sample`]s, insertion ordered and keyed by name.
//!
//! Every operation takes the registry lock for exactly its own duration.
//! There is no cross-operation atomicity: a `drain` followed by processing
//! does not see `add`s that land after the copy was taken.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::report::format_samples;
use crate::sample::Sample;

/// Name-keyed accumulator of elapsed nanoseconds
///
/// Lookups scan the list linearly; the number of distinct timer names is
/// expected to stay small.
///
/// # Example
///
/// ```rust
/// use my_utils_profiler::SampleRegistry;
///
/// let registry = SampleRegistry::new();
/// registry.add("parse", 100);
/// registry.add("parse", 50);
/// assert_eq!(registry.get("parse"), Some(150));
/// ```
#[derive(Debug, Default)]
pub struct SampleRegistry {
    samples: Mutex<Vec<Sample>>,
}

impl SampleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the list half-updated, so
    // a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<Sample>> {
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add `elapsed_nanos` to the sample called `name`
    ///
    /// Appends a new sample when the name has not been seen yet.
    pub fn add(&self, name: &str, elapsed_nanos: u64) {
        let mut samples = self.lock();
        match samples.iter_mut().find(|s| s.name == name) {
            Some(sample) => {
                sample.elapsed_nanos = sample.elapsed_nanos.saturating_add(elapsed_nanos);
            }
            None => samples.push(Sample::new(name, elapsed_nanos)),
        }
    }

    /// Copy all samples in insertion order
    ///
    /// When `clear` is true the registry is emptied inside the same critical
    /// section as the copy.
    pub fn drain(&self, clear: bool) -> Vec<Sample> {
        let mut samples = self.lock();
        if clear {
            std::mem::take(&mut *samples)
        } else {
            samples.clone()
        }
    }

    /// Remove every sample
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Human-readable report of the current samples
    ///
    /// The lock is released before formatting. Returns
    /// [`NO_TIMINGS`](crate::report::NO_TIMINGS) when the registry is empty.
    pub fn format(&self, clear: bool) -> String {
        let samples = self.drain(clear);
        format_samples(&samples)
    }

    /// Emit every sample as a structured `tracing` event
    pub fn log_report(&self, clear: bool) {
        let samples = self.drain(clear);
        if samples.is_empty() {
            tracing::info!("no timings");
            return;
        }
        for sample in &samples {
            tracing::info!(
                name = %sample.name,
                elapsed_nanos = sample.elapsed_nanos,
                elapsed = ?sample.elapsed(),
                "timing"
            );
        }
    }

    /// Accumulated nanoseconds for `name`, if recorded
    pub fn get(&self, name: &str) -> Option<u64> {
        self.lock()
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.elapsed_nanos)
    }

    /// Number of distinct names recorded
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
