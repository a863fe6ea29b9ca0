// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Scoped timing utilities
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use my_utils_profiler::{SampleRegistry, ScopedTimer};
//!
//! let registry = Arc::new(SampleRegistry::new());
//! {
//!     let _timer = ScopedTimer::new("my_operation", &registry);
//!     // ... do work ...
//! } // Timer records the elapsed time here
//! assert_eq!(registry.len(), 1);
//! ```

use std::borrow::Cow;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::registry::SampleRegistry;

/// A timer whose lifetime is the measured interval
///
/// The start instant is taken at construction. On drop the elapsed
/// nanoseconds are added to the bound registry under the timer's name; this
/// also happens on early return, `?` propagation and panic unwind. There is
/// no way to stop or cancel a timer other than dropping it.
///
/// Timers are independent of each other: nested or overlapping timers each
/// attribute their own interval to their own name.
#[derive(Debug)]
#[must_use = "a timer records when dropped; bind it to a named variable such as `_timer`"]
pub struct ScopedTimer {
    name: Cow<'static, str>,
    start: Instant,
    registry: Arc<SampleRegistry>,
}

impl ScopedTimer {
    /// Start a timer bound to `registry`
    pub fn new(name: impl Into<Cow<'static, str>>, registry: &Arc<SampleRegistry>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
            registry: Arc::clone(registry),
        }
    }

    /// Start a timer bound to the process-wide registry
    ///
    /// See [`global`](crate::global::global).
    pub fn start(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, &crate::global::global())
    }

    /// Timer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time since the timer was started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let nanos = u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.registry.add(&self.name, nanos);
    }
}

/// Time the rest of the enclosing block
///
/// `timed_scope!(name)` records into the process-wide registry;
/// `timed_scope!(name, &registry)` records into an explicit
/// `Arc<SampleRegistry>`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use my_utils_profiler::{SampleRegistry, timed_scope};
///
/// fn load(registry: &Arc<SampleRegistry>) {
///     timed_scope!("load", registry);
///     // ... code ...
/// } // Timing recorded here
///
/// let registry = Arc::new(SampleRegistry::new());
/// load(&registry);
/// ```
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! timed_scope {
    ($name:expr) => {
        let _timed_scope_guard = $crate::ScopedTimer::start($name);
    };
    ($name:expr, $registry:expr) => {
        let _timed_scope_guard = $crate::ScopedTimer::new($name, $registry);
    };
}

/// Compiles to nothing when the `profiling` feature is disabled
#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! timed_scope {
    ($($args:tt)*) => {};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_timer_records_on_drop() {
        let registry = Arc::new(SampleRegistry::new());

        {
            let _timer = ScopedTimer::new("test_operation", &registry);
            assert!(registry.is_empty());
            std::thread::sleep(Duration::from_millis(10));
        }

        let nanos = registry.get("test_operation").unwrap();
        assert!(nanos >= 10_000_000);
    }

    #[test]
    fn test_nested_timers_are_independent() {
        let registry = Arc::new(SampleRegistry::new());

        {
            let _outer = ScopedTimer::new("outer", &registry);
            std::thread::sleep(Duration::from_millis(5));
            {
                let _inner = ScopedTimer::new("inner", &registry);
                std::thread::sleep(Duration::from_millis(5));
            }
        }

        let outer = registry.get("outer").unwrap();
        let inner = registry.get("inner").unwrap();
        assert!(inner >= 5_000_000);
        assert!(outer >= inner);
        assert_eq!(registry.drain(false)[0].name, "inner");
    }

    #[test]
    fn test_owned_name() {
        let registry = Arc::new(SampleRegistry::new());
        let name = format!("stage_{}", 3);

        drop(ScopedTimer::new(name, &registry));

        assert!(registry.get("stage_3").is_some());
    }

    #[cfg(feature = "profiling")]
    #[test]
    fn test_timed_scope_macro() {
        let registry = Arc::new(SampleRegistry::new());

        {
            timed_scope!("first", &registry);
            timed_scope!("second", &registry);
        }

        assert_eq!(registry.len(), 2);
    }
}
