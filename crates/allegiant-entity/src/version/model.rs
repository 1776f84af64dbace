//! Project version entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::change::VersionChange;
use super::metadata::VersionMetadata;
use super::semver::SemanticVersion;
use super::status::{VersionStatus, VersionType};

/// A captured revision of a project.
///
/// `project_data` is an owned snapshot: it shares nothing with the live
/// project state or with any other version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectVersion {
    /// `"v"` followed by the version number.
    pub id: String,
    /// Project the version belongs to.
    pub project_id: String,
    /// Semantic version number.
    pub version: SemanticVersion,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Who created the version.
    pub author: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: VersionStatus,
    /// Bump applied to the predecessor's number.
    #[serde(rename = "type")]
    pub version_type: VersionType,
    /// Snapshot of the project state.
    pub project_data: Value,
    /// Changes relative to the previous version.
    pub changes: Vec<VersionChange>,
    /// Derived summary.
    pub metadata: VersionMetadata,
}

impl ProjectVersion {
    /// Build the record identifier for a version number.
    pub fn id_for(version: &SemanticVersion) -> String {
        format!("v{version}")
    }
}

/// Caller-supplied description of a version being created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Bump to apply.
    #[serde(rename = "type")]
    pub version_type: VersionType,
    /// Who is creating the version.
    pub author: String,
}

impl VersionInfo {
    /// Create version info with an empty description.
    pub fn new(
        title: impl Into<String>,
        version_type: VersionType,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            version_type,
            author: author.into(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
