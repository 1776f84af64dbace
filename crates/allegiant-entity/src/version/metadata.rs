//! Summary metadata derived from a version snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Financial and technical summary of a version, plus its checksum and
/// approval stamp. Absent `proposal` fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMetadata {
    /// Capital expenditure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capex: Option<f64>,
    /// Operating expenditure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opex: Option<f64>,
    /// Treatment efficiency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
    /// Technology names in the proposal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    /// Risk register, kept in whatever shape the proposal uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risks: Option<Value>,
    /// Project timeline, kept in whatever shape the proposal uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Value>,
    /// Advisory checksum of the snapshot.
    pub checksum: String,
    /// Who approved the version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// When the version was approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}
