//! Version creation.

use chrono::Utc;
use serde_json::Value;
use tracing::info;

use allegiant_core::result::AppResult;
use allegiant_entity::version::{ProjectVersion, VersionInfo, VersionStatus};

use super::diff::{DiffOptions, detect_changes};
use super::metadata::extract_metadata;
use super::numbering::next_version;

/// Create a draft version of `current_data` with the default diff options.
///
/// See [`create_version_with`].
pub fn create_version(
    project_id: &str,
    current_data: &Value,
    previous: Option<&ProjectVersion>,
    info: &VersionInfo,
) -> AppResult<ProjectVersion> {
    create_version_with(project_id, current_data, previous, info, &DiffOptions::default())
}

/// Create a draft version of `current_data`.
///
/// The number is `previous` bumped by `info.version_type` (`0.0.0` bumped
/// when there is no previous version). Changes are computed against the
/// previous version's snapshot, never against live state, and are empty
/// for the first version. The returned version owns a copy of
/// `current_data` and shares nothing with either argument.
///
/// Fails only when the bump would overflow a version component.
pub fn create_version_with(
    project_id: &str,
    current_data: &Value,
    previous: Option<&ProjectVersion>,
    info: &VersionInfo,
    options: &DiffOptions,
) -> AppResult<ProjectVersion> {
    let version = next_version(previous, info.version_type)?;

    let changes = match previous {
        Some(prev) => detect_changes(&prev.project_data, current_data, options),
        None => Vec::new(),
    };

    let project_data = current_data.clone();
    let metadata = extract_metadata(&project_data);

    info!(
        project_id = %project_id,
        version = %version,
        version_type = %info.version_type,
        changes = changes.len(),
        author = %info.author,
        "Project version created"
    );

    Ok(ProjectVersion {
        id: ProjectVersion::id_for(&version),
        project_id: project_id.to_string(),
        version,
        title: info.title.clone(),
        description: info.description.clone(),
        author: info.author.clone(),
        created_at: Utc::now(),
        status: VersionStatus::Draft,
        version_type: info.version_type,
        project_data,
        changes,
        metadata,
    })
}
