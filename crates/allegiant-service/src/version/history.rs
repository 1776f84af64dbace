//! In-memory version chain for a single project.

use serde_json::Value;
use tracing::{info, warn};

use allegiant_core::error::AppError;
use allegiant_core::result::AppResult;
use allegiant_entity::version::{ProjectVersion, SemanticVersion, VersionInfo};

use super::changelog::render_changelog;
use super::checksum::verify_checksum;
use super::compare::{VersionComparison, compare_versions_with};
use super::create::create_version_with;
use super::diff::DiffOptions;
use super::lifecycle::{approve_version, archive_version, submit_for_review};
use super::snapshot::restore_version;

/// Ordered chain of versions for one project.
///
/// New versions are always created against the head of the chain, so each
/// version's changes are relative to its immediate predecessor. Version
/// numbers are strictly increasing.
#[derive(Debug, Clone)]
pub struct VersionHistory {
    /// Project the chain belongs to.
    project_id: String,
    /// Diff options used for new versions.
    options: DiffOptions,
    /// Versions in ascending version order.
    versions: Vec<ProjectVersion>,
}

impl VersionHistory {
    /// Create an empty chain.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self::with_options(project_id, DiffOptions::default())
    }

    /// Create an empty chain with explicit diff options.
    pub fn with_options(project_id: impl Into<String>, options: DiffOptions) -> Self {
        Self {
            project_id: project_id.into(),
            options,
            versions: Vec::new(),
        }
    }

    /// Rebuild a chain from stored versions with the default diff options.
    ///
    /// See [`VersionHistory::from_versions_with`].
    pub fn from_versions(
        project_id: impl Into<String>,
        versions: Vec<ProjectVersion>,
    ) -> AppResult<Self> {
        Self::from_versions_with(project_id, versions, DiffOptions::default())
    }

    /// Rebuild a chain from stored versions.
    ///
    /// Versions are sorted by number. Versions of another project and
    /// duplicate numbers are rejected. Checksum mismatches are logged but
    /// accepted. `options` apply to later commits and comparisons and should
    /// match the ones the chain was built with.
    pub fn from_versions_with(
        project_id: impl Into<String>,
        mut versions: Vec<ProjectVersion>,
        options: DiffOptions,
    ) -> AppResult<Self> {
        let project_id = project_id.into();

        if let Some(foreign) = versions.iter().find(|v| v.project_id != project_id) {
            return Err(AppError::validation(format!(
                "Version {} belongs to project '{}', not '{}'",
                foreign.version, foreign.project_id, project_id
            )));
        }

        versions.sort_by(|a, b| a.version.cmp(&b.version));
        if let Some(pair) = versions.windows(2).find(|w| w[0].version == w[1].version) {
            return Err(AppError::conflict(format!(
                "Duplicate version {} in project '{}'",
                pair[0].version, project_id
            )));
        }

        let corrupted = versions.iter().filter(|v| !verify_checksum(v)).count();
        if corrupted > 0 {
            warn!(
                project_id = %project_id,
                corrupted,
                "Loaded version chain with checksum mismatches"
            );
        }

        Ok(Self {
            project_id,
            options,
            versions,
        })
    }

    /// Project identifier.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// All versions, oldest first.
    pub fn versions(&self) -> &[ProjectVersion] {
        &self.versions
    }

    /// Number of versions.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the chain has no versions yet.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Most recent version.
    pub fn latest(&self) -> Option<&ProjectVersion> {
        self.versions.last()
    }

    /// Diff options used for commits and comparisons.
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Create a new draft version of `current_data` on top of the chain.
    ///
    /// Fails with a conflict when the bumped number would not exceed the
    /// head, including when the bump overflows.
    pub fn commit(
        &mut self,
        current_data: &Value,
        info: &VersionInfo,
    ) -> AppResult<&ProjectVersion> {
        if let Some(head) = self.versions.last() {
            let next = head.version.checked_bump(info.version_type);
            if next.is_none_or(|next| next <= head.version) {
                return Err(AppError::conflict(format!(
                    "Cannot commit a {} version on top of {} in project '{}'",
                    info.version_type, head.version, self.project_id
                )));
            }
        }

        let version = create_version_with(
            &self.project_id,
            current_data,
            self.versions.last(),
            info,
            &self.options,
        )?;
        self.versions.push(version);

        let index = self.versions.len() - 1;
        Ok(&self.versions[index])
    }

    /// Look up a version by its number, e.g. `"0.1.0"`.
    pub fn get(&self, version: &str) -> AppResult<&ProjectVersion> {
        let index = self.position(version)?;
        Ok(&self.versions[index])
    }

    /// Approve a version in place.
    pub fn approve(&mut self, version: &str, approver: &str) -> AppResult<&ProjectVersion> {
        self.transition(version, |v| approve_version(v, approver))
    }

    /// Archive a version in place.
    pub fn archive(&mut self, version: &str) -> AppResult<&ProjectVersion> {
        self.transition(version, archive_version)
    }

    /// Submit a version for review in place.
    pub fn submit_for_review(&mut self, version: &str) -> AppResult<&ProjectVersion> {
        self.transition(version, submit_for_review)
    }

    /// Copy of a version's snapshot.
    pub fn restore(&self, version: &str) -> AppResult<Value> {
        self.get(version).map(restore_version)
    }

    /// Compare two versions of the chain.
    pub fn compare(&self, from: &str, to: &str) -> AppResult<VersionComparison> {
        Ok(compare_versions_with(self.get(from)?, self.get(to)?, &self.options))
    }

    /// Changelog of the whole chain, newest first.
    pub fn changelog(&self) -> String {
        render_changelog(&self.versions)
    }

    fn position(&self, version: &str) -> AppResult<usize> {
        let wanted: SemanticVersion = version.parse()?;
        self.versions
            .binary_search_by(|v| v.version.cmp(&wanted))
            .map_err(|_| {
                AppError::not_found(format!(
                    "Version {wanted} not found in project '{}'",
                    self.project_id
                ))
            })
    }

    fn transition(
        &mut self,
        version: &str,
        apply: impl FnOnce(&ProjectVersion) -> ProjectVersion,
    ) -> AppResult<&ProjectVersion> {
        let index = self.position(version)?;
        let updated = apply(&self.versions[index]);

        info!(
            project_id = %self.project_id,
            version = %updated.version,
            status = %updated.status,
            "Version history updated"
        );

        self.versions[index] = updated;
        Ok(&self.versions[index])
    }
}
