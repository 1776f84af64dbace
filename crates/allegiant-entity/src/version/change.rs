//! Change records produced by the diff engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use allegiant_core::types::ChangeId;

/// Kind of difference recorded at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// The key exists only in the newer state.
    Added,
    /// The value at the path differs.
    Modified,
    /// The key exists only in the older state.
    Removed,
}

impl ChangeType {
    /// Return the change type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
        }
    }

    /// One-character marker used in changelogs.
    pub fn marker(&self) -> char {
        match self {
            Self::Added => '+',
            Self::Modified => '~',
            Self::Removed => '-',
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single difference between two project states.
///
/// For `Added` changes `old_value` is the empty string; for `Removed`
/// changes `new_value` is the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionChange {
    /// Opaque change identifier.
    pub id: ChangeId,
    /// Top-level key of the changed path, or `"General"` at the root.
    pub section: String,
    /// Remainder of the dotted path below the section.
    pub field: String,
    /// Value before the change.
    pub old_value: Value,
    /// Value after the change.
    pub new_value: Value,
    /// Kind of change.
    pub change_type: ChangeType,
    /// When the change was detected.
    pub timestamp: DateTime<Utc>,
    /// Who the change is attributed to.
    pub author: String,
}

impl VersionChange {
    /// Dotted location of the change, e.g. `proposal.capex`.
    pub fn location(&self) -> String {
        if self.field == self.section {
            self.section.clone()
        } else {
            format!("{}.{}", self.section, self.field)
        }
    }
}
