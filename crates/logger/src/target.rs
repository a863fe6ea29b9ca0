// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Output target selection

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Set of outputs a message is written to
    ///
    /// The empty set disables logging entirely. In configuration files the
    /// set is written as flag names joined by `|`, e.g. `"STDOUT | LOG_FILE"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Targets: u8 {
        const STDOUT = 1;
        const STDERR = 2;
        const LOG_FILE = 4;
    }
}

impl Default for Targets {
    fn default() -> Self {
        Self::DISABLED
    }
}

impl Targets {
    /// No output at all
    pub const DISABLED: Targets = Targets::empty();

    /// Whether every message is discarded
    pub fn is_disabled(self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_empty() {
        assert!(Targets::DISABLED.is_disabled());
        assert!(Targets::default().is_disabled());
        assert!(!Targets::STDERR.is_disabled());
    }

    #[test]
    fn test_combine_and_toggle() {
        let mut targets = Targets::STDOUT | Targets::LOG_FILE;
        assert!(targets.contains(Targets::LOG_FILE));
        assert!(!targets.contains(Targets::STDERR));

        targets ^= Targets::LOG_FILE;
        assert_eq!(targets, Targets::STDOUT);

        targets ^= Targets::STDOUT;
        assert!(targets.is_disabled());
    }

    #[test]
    fn test_bits_match_selector_values() {
        assert_eq!(Targets::STDOUT.bits(), 1);
        assert_eq!(Targets::STDERR.bits(), 2);
        assert_eq!(Targets::LOG_FILE.bits(), 4);
        assert_eq!(Targets::from_bits_truncate(0xff), Targets::all());
    }
}
