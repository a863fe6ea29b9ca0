// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Process-wide registry
//!
//! The global registry is set at most once per process. Programs call
//! [`init`] (or [`install`] with a registry of their own) at startup and
//! [`shutdown`] before exit, which logs the remaining timings and clears
//! them. [`global`] falls back to initializing on first access so that
//! timers in library code work even if the binary never called `init`;
//! `OnceLock` makes that initialization race-free.

use std::sync::{Arc, OnceLock};

use crate::error::{ProfilerError, ProfilerResult};
use crate::registry::SampleRegistry;

static GLOBAL: OnceLock<Arc<SampleRegistry>> = OnceLock::new();

/// Initialize the global registry
///
/// Idempotent: returns the already installed registry on later calls.
pub fn init() -> Arc<SampleRegistry> {
    let registry = global();
    tracing::debug!("Global sample registry initialized");
    registry
}

/// Install `registry` as the global registry
///
/// Fails if a global registry already exists, including one created
/// implicitly by [`global`].
pub fn install(registry: Arc<SampleRegistry>) -> ProfilerResult<()> {
    GLOBAL
        .set(registry)
        .map_err(|_| ProfilerError::AlreadyInstalled)?;
    tracing::debug!("Global sample registry installed");
    Ok(())
}

/// The global registry, created on first access if none was installed
pub fn global() -> Arc<SampleRegistry> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(SampleRegistry::new())))
}

/// Log the remaining global timings and clear them
///
/// Does nothing if the global registry was never created.
pub fn shutdown() {
    if let Some(registry) = GLOBAL.get() {
        registry.log_report(true);
        tracing::debug!("Global sample registry cleared");
    }
}
