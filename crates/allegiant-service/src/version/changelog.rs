//! Change summaries and plain-text changelogs.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use allegiant_entity::version::{ChangeType, ProjectVersion, VersionChange};

/// Counts of changes by type and by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    /// Number of added keys.
    pub added: usize,
    /// Number of modified values.
    pub modified: usize,
    /// Number of removed keys.
    pub removed: usize,
    /// Number of changes per section.
    pub by_section: BTreeMap<String, usize>,
}

impl ChangeSummary {
    /// Tally a list of changes.
    pub fn from_changes(changes: &[VersionChange]) -> Self {
        let mut summary = Self::default();
        for change in changes {
            match change.change_type {
                ChangeType::Added => summary.added += 1,
                ChangeType::Modified => summary.modified += 1,
                ChangeType::Removed => summary.removed += 1,
            }
            *summary.by_section.entry(change.section.clone()).or_default() += 1;
        }
        summary
    }

    /// Total number of changes.
    pub fn total(&self) -> usize {
        self.added + self.modified + self.removed
    }
}

/// Render a changelog, newest version first.
///
/// ```text
/// v0.1.0 Pricing update [draft] by alex on 2026-10-19
///   Capex revised after vendor quotes
///   ~ proposal.capex: 100000 -> 120000
///   + proposal.technologies: ["UV","RO"]
/// ```
pub fn render_changelog(versions: &[ProjectVersion]) -> String {
    let mut ordered: Vec<&ProjectVersion> = versions.iter().collect();
    ordered.sort_by(|a, b| b.version.cmp(&a.version));

    let mut out = String::new();
    for version in ordered {
        let _ = writeln!(
            out,
            "{} {} [{}] by {} on {}",
            version.id,
            version.title,
            version.status,
            version.author,
            version.created_at.format("%Y-%m-%d")
        );
        if !version.description.is_empty() {
            let _ = writeln!(out, "  {}", version.description);
        }
        if version.changes.is_empty() {
            let _ = writeln!(out, "  (no recorded changes)");
        }
        for change in &version.changes {
            let _ = writeln!(out, "  {}", change_line(change));
        }
    }
    out
}

fn change_line(change: &VersionChange) -> String {
    let marker = change.change_type.marker();
    let location = change.location();
    match change.change_type {
        ChangeType::Added => format!("{marker} {location}: {}", change.new_value),
        ChangeType::Removed => format!("{marker} {location}: {}", change.old_value),
        ChangeType::Modified => format!(
            "{marker} {location}: {} -> {}",
            change.old_value,
            change.new_value
        ),
    }
}
