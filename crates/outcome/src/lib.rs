// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # my-utils outcome
//!
//! [`Outcome`] is a result that may keep partial data on failure: an
//! operation that fails halfway can still hand back what it produced along
//! with the error.
//!
//! ```rust
//! use my_utils_outcome::Outcome;
//!
//! fn parse_all(inputs: &[&str]) -> Outcome<Vec<i32>, String> {
//!     let mut parsed = Vec::new();
//!     for input in inputs {
//!         match input.parse() {
//!             Ok(value) => parsed.push(value),
//!             Err(_) => return Outcome::failure_with_data(format!("bad input {input:?}"), parsed),
//!         }
//!     }
//!     Outcome::success(parsed)
//! }
//!
//! let outcome = parse_all(&["1", "2", "x"]);
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.data(), Some(&vec![1, 2]));
//! ```

use serde::{Deserialize, Serialize};

/// Success with data, or failure with an error and optional partial data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T, E> {
    Success(T),
    Failure { error: E, data: Option<T> },
}

impl<T, E> Outcome<T, E> {
    pub fn success(data: T) -> Self {
        Outcome::Success(data)
    }

    pub fn failure(error: E) -> Self {
        Outcome::Failure { error, data: None }
    }

    pub fn failure_with_data(error: E, data: T) -> Self {
        Outcome::Failure {
            error,
            data: Some(data),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Data of a success, or the partial data of a failure
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure { data, .. } => data.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }

    /// Map the data, keeping the error untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure { error, data } => Outcome::Failure {
                error,
                data: data.map(f),
            },
        }
    }

    /// Convert into a `Result`, dropping any partial data
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure { error, .. } => Err(error),
        }
    }

    /// Split into the data (success or partial) and the error, if any
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        match self {
            Outcome::Success(data) => (Some(data), None),
            Outcome::Failure { error, data } => (data, Some(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(error) => Outcome::failure(error),
        }
    }
}
