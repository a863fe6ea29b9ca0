// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # my-utils profiler
//!
//! A flat, name-keyed accumulator of elapsed time fed by scope-based timers.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────┐   drop    ┌───────────────────┐  drain/format  ┌──────────┐
//! │ ScopedTimer  │ ────────→ │  SampleRegistry   │ ─────────────→ │  report  │
//! │ (name, t0)   │ add(n,Δt) │ Mutex<Vec<Sample>>│                └──────────┘
//! └──────────────┘           └───────────────────┘
//! ```
//!
//! A [`ScopedTimer`] records a start instant when created and submits the
//! elapsed nanoseconds to its registry when dropped, on every exit path
//! (normal return, early return, `?` propagation or panic unwind). Samples
//! with the same name are merged by summing.
//!
//! Registries are plain values shared through `Arc`. Call sites that do not
//! want to thread a handle through can use the process-wide registry from
//! [`global`], initialized with [`init`] at program start and torn down with
//! [`shutdown`].
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use my_utils_profiler::{SampleRegistry, ScopedTimer};
//!
//! let registry = Arc::new(SampleRegistry::new());
//! {
//!     let _timer = ScopedTimer::new("load_config", &registry);
//!     // ... work ...
//! }
//! assert!(registry.get("load_config").is_some());
//! println!("{}", registry.format(true));
//! ```
//!
//! ## Features
//!
//! - `profiling` (default): enables the [`timed_scope!`] macro. Without it
//!   the macro compiles to nothing; the registry and timer types stay
//!   available for explicit use.

pub mod error;
pub mod global;
pub mod registry;
pub mod report;
pub mod sample;
pub mod timer;

// Re-exports
pub use error::{ProfilerError, ProfilerResult};
pub use global::{global, init, install, shutdown};
pub use registry::SampleRegistry;
pub use report::{NO_TIMINGS, format_samples};
pub use sample::Sample;
pub use timer::ScopedTimer;
