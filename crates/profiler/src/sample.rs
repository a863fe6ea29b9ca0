// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Named accumulator of elapsed time

use std::time::Duration;

/// Accumulated elapsed time for one timer name
///
/// Identity is the name: a registry never holds two samples with the same
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sample {
    /// Timer name
    pub name: String,
    /// Total elapsed nanoseconds recorded under `name`
    pub elapsed_nanos: u64,
}

impl Sample {
    /// Create a new sample
    pub fn new(name: impl Into<String>, elapsed_nanos: u64) -> Self {
        Self {
            name: name.into(),
            elapsed_nanos,
        }
    }

    /// Accumulated time as a `Duration`
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_elapsed() {
        let sample = Sample::new("parse", 1_500_000);
        assert_eq!(sample.name, "parse");
        assert_eq!(sample.elapsed(), Duration::from_micros(1500));
    }
}
