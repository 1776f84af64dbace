//! Version status transitions.
//!
//! Each transition returns a new record and leaves its input untouched.
//! The snapshot is carried over as-is.

use chrono::Utc;
use tracing::info;

use allegiant_entity::version::{ProjectVersion, VersionStatus};

/// Mark a version approved, stamping the approver and approval time.
pub fn approve_version(version: &ProjectVersion, approver: &str) -> ProjectVersion {
    let mut approved = version.clone();
    approved.status = VersionStatus::Approved;
    approved.metadata.approved_by = Some(approver.to_string());
    approved.metadata.approved_at = Some(Utc::now());

    info!(
        project_id = %version.project_id,
        version = %version.version,
        approver = %approver,
        "Project version approved"
    );

    approved
}

/// Mark a version archived. Archiving an archived version changes nothing.
pub fn archive_version(version: &ProjectVersion) -> ProjectVersion {
    let mut archived = version.clone();
    archived.status = VersionStatus::Archived;

    info!(
        project_id = %version.project_id,
        version = %version.version,
        previous_status = %version.status,
        "Project version archived"
    );

    archived
}

/// Submit a version for review.
pub fn submit_for_review(version: &ProjectVersion) -> ProjectVersion {
    let mut submitted = version.clone();
    submitted.status = VersionStatus::Review;

    info!(
        project_id = %version.project_id,
        version = %version.version,
        "Project version submitted for review"
    );

    submitted
}
