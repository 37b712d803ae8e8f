//! Scan modes.
//!
//! A mode is a named concurrency/timeout profile. The table is fixed at
//! compile time:
//!
//! | Mode    | Workers | Timeout |
//! |---------|---------|---------|
//! | stealth | 10      | 5000 ms |
//! | default | 100     | 1000 ms |
//! | rapid   | 1000    | 500 ms  |

use crate::error::ModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A named scan profile trading thoroughness against speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Few workers, patient timeout.
    Stealth,
    /// Balanced profile used when nothing else is asked for.
    #[default]
    Default,
    /// Many workers, short timeout.
    Rapid,
}

impl ScanMode {
    /// Every mode, in table order.
    pub const ALL: [ScanMode; 3] = [Self::Stealth, Self::Default, Self::Rapid];

    /// Number of concurrent workers this mode runs.
    pub const fn workers(self) -> usize {
        match self {
            Self::Stealth => 10,
            Self::Default => 100,
            Self::Rapid => 1000,
        }
    }

    /// Per-connection timeout for this mode.
    pub const fn timeout(self) -> Duration {
        match self {
            Self::Stealth => Duration::from_millis(5000),
            Self::Default => Duration::from_millis(1000),
            Self::Rapid => Duration::from_millis(500),
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stealth => "stealth",
            Self::Default => "default",
            Self::Rapid => "rapid",
        }
    }

    /// Look up a mode by name, case-insensitively.
    pub fn resolve(name: &str) -> Result<Self, ModeError> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ModeError::InvalidMode(name.to_string()))
    }

    /// Timeout after applying an optional override in milliseconds.
    ///
    /// A zero override keeps the mode's own timeout; the worker count is
    /// never affected.
    pub fn effective_timeout(self, override_ms: u64) -> Duration {
        if override_ms > 0 {
            Duration::from_millis(override_ms)
        } else {
            self.timeout()
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScanMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table() {
        assert_eq!(ScanMode::Stealth.workers(), 10);
        assert_eq!(ScanMode::Stealth.timeout(), Duration::from_millis(5000));
        assert_eq!(ScanMode::Default.workers(), 100);
        assert_eq!(ScanMode::Default.timeout(), Duration::from_millis(1000));
        assert_eq!(ScanMode::Rapid.workers(), 1000);
        assert_eq!(ScanMode::Rapid.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(ScanMode::resolve("stealth").unwrap(), ScanMode::Stealth);
        assert_eq!(ScanMode::resolve("STEALTH").unwrap(), ScanMode::Stealth);
        assert_eq!("Rapid".parse::<ScanMode>().unwrap(), ScanMode::Rapid);
        assert_eq!(ScanMode::resolve("default").unwrap().name(), "default");
    }

    #[test]
    fn test_resolve_unknown_fails() {
        assert_eq!(
            ScanMode::resolve("invalid"),
            Err(ModeError::InvalidMode("invalid".to_string()))
        );
        assert!(ScanMode::resolve("").is_err());
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(ScanMode::default(), ScanMode::Default);
    }

    #[test]
    fn test_effective_timeout_override() {
        for mode in ScanMode::ALL {
            assert_eq!(mode.effective_timeout(0), mode.timeout());
            assert_eq!(mode.effective_timeout(250), Duration::from_millis(250));
        }
    }
}
