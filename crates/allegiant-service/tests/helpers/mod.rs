//! Shared fixtures for versioning integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};

use allegiant_entity::version::{ProjectVersion, VersionInfo, VersionType};
use allegiant_service::version::create_version;

/// Project identifier used across tests.
pub const PROJECT_ID: &str = "proj-riverside-wwtp";

/// Proposal-shaped project data.
pub fn project_data(capex: u64, technologies: &[&str]) -> Value {
    json!({
        "client": {"name": "Riverside Utilities", "sector": "municipal"},
        "proposal": {
            "capex": capex,
            "technologies": technologies,
        }
    })
}

/// Version info with a fixed author.
pub fn info(title: &str, version_type: VersionType) -> VersionInfo {
    VersionInfo::new(title, version_type, "dana.ortiz")
}

/// Create a version of `data` on top of `previous` with default options.
pub fn version(
    data: &Value,
    previous: Option<&ProjectVersion>,
    title: &str,
    version_type: VersionType,
) -> ProjectVersion {
    create_version(PROJECT_ID, data, previous, &info(title, version_type))
        .expect("create version")
}
