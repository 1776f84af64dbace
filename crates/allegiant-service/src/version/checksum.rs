//! Advisory snapshot checksums.
//!
//! The checksum is a 32-bit rolling hash (`h = h * 31 + unit`, wrapping)
//! over the UTF-16 code units of the snapshot's compact JSON form. Object
//! keys serialize in sorted order at every depth because `serde_json::Map`
//! is a `BTreeMap` (the `preserve_order` feature is not enabled in this
//! workspace). Floats render the serde way (`100000.0`), so checksums do not
//! match ones computed by a JavaScript client. It hints that content
//! changed. It is collision-prone and must not be used as a content
//! identifier or a tamper check.

use serde_json::Value;
use tracing::warn;

use allegiant_entity::version::ProjectVersion;

/// Compute the checksum of a snapshot, rendered as lowercase hex of the
/// hash's absolute value.
pub fn generate_checksum(data: &Value) -> String {
    let canonical = serde_json::to_string(data).unwrap_or_default();

    let mut hash: i32 = 0;
    for unit in canonical.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }

    format!("{:x}", i64::from(hash).abs())
}

/// Check that a version's stored checksum still matches its snapshot.
pub fn verify_checksum(version: &ProjectVersion) -> bool {
    let actual = generate_checksum(&version.project_data);
    let matches = actual == version.metadata.checksum;

    if !matches {
        warn!(
            project_id = %version.project_id,
            version = %version.version,
            expected = %version.metadata.checksum,
            actual = %actual,
            "Version checksum mismatch"
        );
    }

    matches
}
