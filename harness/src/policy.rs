//! Policy configuration: resolve a [`SearchPolicy`] from optional overrides.
//!
//! Overrides come from the process environment (the `fifteen` binary) or
//! from any key lookup (tests and fixture binaries). The resolved policy is
//! rendered as a JSON snapshot that every run summary embeds, so a summary
//! digest commits to the conditions it was produced under.

use std::fmt;

use fifteen_kernel::proof::hash::{canonical_hash, ContentHash};
use fifteen_kernel::proof::hash_domain::HashDomain;
use fifteen_search::policy::{DedupPolicy, SearchPolicy};

/// Environment key for the expansion budget (a non-negative integer).
pub const ENV_MAX_EXPANSIONS: &str = "FIFTEEN_MAX_EXPANSIONS";

/// Environment key for the dedup policy (`off` or `board`).
pub const ENV_DEDUP: &str = "FIFTEEN_DEDUP";

/// Snapshot schema tag.
const POLICY_SCHEMA_VERSION: &str = "policy_snapshot.v1";

/// Policy overrides. `None` fields fall back to [`SearchPolicy::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Expansion budget. `None` means unbounded.
    pub max_expansions: Option<u64>,
    /// Dedup override. `None` keeps the default (`off`).
    pub dedup: Option<DedupPolicy>,
}

/// A configuration value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A configuration value is present but does not parse.
    InvalidValue { key: String, value: String },
    /// The snapshot could not be serialized.
    SnapshotEncoding { detail: String },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value {value:?} for {key}")
            }
            Self::SnapshotEncoding { detail } => {
                write!(f, "policy snapshot encoding failed: {detail}")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

impl PolicyConfig {
    /// Load overrides from the process environment.
    ///
    /// # Errors
    ///
    /// See [`PolicyConfig::from_lookup`].
    pub fn from_env() -> Result<Self, PolicyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through `lookup`. Unset and blank values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidValue`] if a value is present but does
    /// not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PolicyError> {
        let value_of = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let max_expansions = value_of(ENV_MAX_EXPANSIONS)
            .map(|raw| {
                raw.parse::<u64>().map_err(|_| PolicyError::InvalidValue {
                    key: ENV_MAX_EXPANSIONS.to_string(),
                    value: raw,
                })
            })
            .transpose()?;

        let dedup = value_of(ENV_DEDUP)
            .map(|raw| {
                raw.parse::<DedupPolicy>()
                    .map_err(|_| PolicyError::InvalidValue {
                        key: ENV_DEDUP.to_string(),
                        value: raw,
                    })
            })
            .transpose()?;

        Ok(Self {
            max_expansions,
            dedup,
        })
    }
}

/// Resolve overrides against the defaults.
#[must_use]
pub fn build_policy(config: &PolicyConfig) -> SearchPolicy {
    let defaults = SearchPolicy::default();
    SearchPolicy {
        max_expansions: config.max_expansions.or(defaults.max_expansions),
        dedup: config.dedup.unwrap_or(defaults.dedup),
    }
}

/// JSON snapshot of a resolved policy.
///
/// `max_expansions` is `null` when unbounded.
#[must_use]
pub fn policy_snapshot(policy: &SearchPolicy) -> serde_json::Value {
    serde_json::json!({
        "dedup": policy.dedup.as_str(),
        "max_expansions": policy.max_expansions,
        "schema_version": POLICY_SCHEMA_VERSION,
    })
}

/// Content hash of [`policy_snapshot`].
///
/// # Errors
///
/// Returns [`PolicyError::SnapshotEncoding`] if the snapshot cannot be
/// serialized.
pub fn policy_digest(policy: &SearchPolicy) -> Result<ContentHash, PolicyError> {
    let bytes = serde_json::to_vec(&policy_snapshot(policy)).map_err(|e| {
        PolicyError::SnapshotEncoding {
            detail: e.to_string(),
        }
    })?;
    Ok(canonical_hash(HashDomain::PolicySnapshot, &bytes))
}
