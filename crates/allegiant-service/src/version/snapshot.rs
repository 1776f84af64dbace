//! Snapshot capture and restore.
//!
//! Snapshots are `serde_json::Value` trees, so everything a version stores
//! is JSON by construction and cloning one is a full structural copy. Typed
//! project state goes through serde explicitly; values serde cannot express
//! as JSON are reported as errors instead of being coerced.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use allegiant_core::result::AppResult;
use allegiant_entity::version::ProjectVersion;

/// Convert typed project state into a snapshot value.
pub fn snapshot_of<T: Serialize>(state: &T) -> AppResult<Value> {
    Ok(serde_json::to_value(state)?)
}

/// Return an independent copy of a version's snapshot, ready to replace
/// the live project state.
pub fn restore_version(version: &ProjectVersion) -> Value {
    info!(
        project_id = %version.project_id,
        version = %version.version,
        "Project version restored"
    );
    version.project_data.clone()
}

/// Restore a version's snapshot into typed project state.
pub fn restore_as<T: DeserializeOwned>(version: &ProjectVersion) -> AppResult<T> {
    Ok(serde_json::from_value(restore_version(version))?)
}
