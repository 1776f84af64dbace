//! Project version entities.

pub mod change;
pub mod metadata;
pub mod model;
pub mod semver;
pub mod status;

pub use change::{ChangeType, VersionChange};
pub use metadata::VersionMetadata;
pub use model::{ProjectVersion, VersionInfo};
pub use semver::SemanticVersion;
pub use status::{VersionStatus, VersionType};
