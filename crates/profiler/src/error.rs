// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for profiler setup
//!
//! Recording and reporting never fail; only installing the process-wide
//! registry can.

use thiserror::Error;

/// Result type alias for profiler setup operations
pub type ProfilerResult<T> = Result<T, ProfilerError>;

/// Errors that can occur while configuring the profiler
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfilerError {
    /// A process-wide registry has already been installed or initialized
    #[error("A global sample registry is already installed")]
    AlreadyInstalled,
}
