//! Versioning engine configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the diff engine treats two arrays found at the same path.
///
/// Arrays are never compared element by element; both policies report at
/// most one `modified` change for the whole array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayPolicy {
    /// Arrays differ only when their lengths differ. Equal-length arrays are
    /// treated as unchanged even if their elements differ.
    #[default]
    Length,
    /// Arrays differ whenever their contents differ.
    Atomic,
}

impl ArrayPolicy {
    /// Return the policy as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Atomic => "atomic",
        }
    }
}

impl fmt::Display for ArrayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings for version creation and change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersioningConfig {
    /// Author label stamped on every detected change.
    #[serde(default = "default_system_author")]
    pub system_author: String,
    /// Array comparison policy.
    #[serde(default)]
    pub array_policy: ArrayPolicy,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        Self {
            system_author: default_system_author(),
            array_policy: ArrayPolicy::default(),
        }
    }
}

fn default_system_author() -> String {
    "System".to_string()
}
