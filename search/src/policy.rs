//! Search policy types.

use std::fmt;
use std::str::FromStr;

/// Search budget and dedup configuration.
///
/// The default is unbounded with dedup off, which reproduces the
/// golden node counts exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` means unbounded.
    pub max_expansions: Option<u64>,
    /// Whether repeated boards are suppressed at push time.
    pub dedup: DedupPolicy,
}

/// Dedup policy: whether the frontier suppresses boards it has already seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Every successor is pushed; a board may be expanded many times.
    #[default]
    Off,
    /// A successor whose board fingerprint was pushed before is dropped.
    BoardFingerprint,
}

impl DedupPolicy {
    /// Stable configuration name (`"off"` or `"board"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::BoardFingerprint => "board",
        }
    }
}

impl fmt::Display for DedupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised dedup policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDedupPolicyError {
    pub name: String,
}

impl fmt::Display for ParseDedupPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dedup policy {:?} (expected \"off\" or \"board\")", self.name)
    }
}

impl std::error::Error for ParseDedupPolicyError {}

impl FromStr for DedupPolicy {
    type Err = ParseDedupPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "board" => Ok(Self::BoardFingerprint),
            _ => Err(ParseDedupPolicyError { name: s.to_string() }),
        }
    }
}
