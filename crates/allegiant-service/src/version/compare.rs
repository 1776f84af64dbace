//! Comparison of two arbitrary versions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use allegiant_entity::version::{ProjectVersion, VersionChange};

use super::diff::{DiffOptions, detect_changes};

/// Result of comparing two versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionComparison {
    /// Changes turning the first version's snapshot into the second's.
    pub differences: Vec<VersionChange>,
    /// Headline deltas.
    pub summary: ComparisonSummary,
}

/// Headline deltas between two versions. Missing figures count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    /// `to.capex - from.capex`.
    pub capex_change: f64,
    /// `to.opex - from.opex`.
    pub opex_change: f64,
    /// `to.efficiency - from.efficiency`.
    pub efficiency_change: f64,
    /// `+Name` for each technology only in `to`, then `-Name` for each
    /// technology only in `from`.
    pub technology_changes: Vec<String>,
}

/// Compare `from` against `to` with the default diff options.
///
/// See [`compare_versions_with`].
pub fn compare_versions(from: &ProjectVersion, to: &ProjectVersion) -> VersionComparison {
    compare_versions_with(from, to, &DiffOptions::default())
}

/// Compare `from` against `to`. The versions need not be adjacent in
/// their chain.
pub fn compare_versions_with(
    from: &ProjectVersion,
    to: &ProjectVersion,
    options: &DiffOptions,
) -> VersionComparison {
    let differences = detect_changes(&from.project_data, &to.project_data, options);

    let delta = |a: Option<f64>, b: Option<f64>| b.unwrap_or(0.0) - a.unwrap_or(0.0);
    let summary = ComparisonSummary {
        capex_change: delta(from.metadata.capex, to.metadata.capex),
        opex_change: delta(from.metadata.opex, to.metadata.opex),
        efficiency_change: delta(from.metadata.efficiency, to.metadata.efficiency),
        technology_changes: technology_changes(
            from.metadata.technologies.as_deref().unwrap_or_default(),
            to.metadata.technologies.as_deref().unwrap_or_default(),
        ),
    };

    debug!(
        from = %from.version,
        to = %to.version,
        differences = differences.len(),
        "Compared project versions"
    );

    VersionComparison {
        differences,
        summary,
    }
}

fn technology_changes(from: &[String], to: &[String]) -> Vec<String> {
    let added = to
        .iter()
        .filter(|t| !from.contains(t))
        .map(|t| format!("+{t}"));
    let removed = from
        .iter()
        .filter(|t| !to.contains(t))
        .map(|t| format!("-{t}"));

    added.chain(removed).collect()
}
