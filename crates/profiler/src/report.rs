// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Plain-text timing report
//!
//! One line per sample:
//!
//! ```text
//! <name>: <N>ns.  [<M>ms.  [<S>s.]]
//! ```
//!
//! The millisecond column appears only from 1ms upwards and the second
//! column only from 1s upwards. Both are truncated, not rounded.

use std::fmt::Write;

use crate::sample::Sample;

/// Report returned for an empty sample list
pub const NO_TIMINGS: &str = "no timings";

const NANOS_PER_MILLI: u64 = 1_000_000;
const MILLIS_PER_SEC: u64 = 1_000;

/// Format `samples` as a newline-terminated report
///
/// # Example
///
/// ```rust
/// use my_utils_profiler::{Sample, format_samples};
///
/// let report = format_samples(&[Sample::new("load", 2_500_000_000)]);
/// assert_eq!(report, "load: 2500000000ns.  2500ms.  2s.\n");
/// ```
pub fn format_samples(samples: &[Sample]) -> String {
    if samples.is_empty() {
        return NO_TIMINGS.to_string();
    }

    let mut report = String::new();
    for sample in samples {
        // Writing into a String cannot fail
        let _ = write!(report, "{}: {}ns.  ", sample.name, sample.elapsed_nanos);
        let millis = sample.elapsed_nanos / NANOS_PER_MILLI;
        if millis >= 1 {
            let _ = write!(report, "{millis}ms.  ");
            let secs = millis / MILLIS_PER_SEC;
            if secs >= 1 {
                let _ = write!(report, "{secs}s.");
            }
        }
        report.push('\n');
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        assert_eq!(format_samples(&[]), "no timings");
    }

    #[test]
    fn test_sub_millisecond_line() {
        let report = format_samples(&[Sample::new("tiny", 999_999)]);
        assert_eq!(report, "tiny: 999999ns.  \n");
    }

    #[test]
    fn test_millisecond_line() {
        let report = format_samples(&[Sample::new("query", 1_000_000)]);
        assert_eq!(report, "query: 1000000ns.  1ms.  \n");

        let report = format_samples(&[Sample::new("query", 999_999_999)]);
        assert_eq!(report, "query: 999999999ns.  999ms.  \n");
    }

    #[test]
    fn test_second_line() {
        let report = format_samples(&[Sample::new("startup", 3_000_000_000)]);
        assert_eq!(report, "startup: 3000000000ns.  3000ms.  3s.\n");
    }

    #[test]
    fn test_multiple_lines_keep_order() {
        let report = format_samples(&[Sample::new("b", 5), Sample::new("a", 2_000_000)]);
        assert_eq!(report, "b: 5ns.  \na: 2000000ns.  2ms.  \n");
    }
}
