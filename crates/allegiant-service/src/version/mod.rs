//! Project versioning: create, diff, compare, approve, archive, restore.

pub mod changelog;
pub mod checksum;
pub mod compare;
pub mod create;
pub mod diff;
pub mod history;
pub mod lifecycle;
pub mod metadata;
pub mod numbering;
pub mod snapshot;

pub use changelog::{ChangeSummary, render_changelog};
pub use checksum::{generate_checksum, verify_checksum};
pub use compare::{
    ComparisonSummary, VersionComparison, compare_versions, compare_versions_with,
};
pub use create::{create_version, create_version_with};
pub use diff::{DiffOptions, detect_changes};
pub use history::VersionHistory;
pub use lifecycle::{approve_version, archive_version, submit_for_review};
pub use metadata::extract_metadata;
pub use numbering::{generate_version_number, next_version};
pub use snapshot::{restore_as, restore_version, snapshot_of};
