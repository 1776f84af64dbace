//! Summary metadata extraction.

use serde_json::Value;

use allegiant_entity::version::VersionMetadata;

use super::checksum::generate_checksum;

/// Pull the summary fields out of a snapshot's `proposal` object and
/// compute its checksum.
///
/// Missing or wrongly-typed fields are left as `None`; this never fails.
/// Non-string entries in `proposal.technologies` are skipped.
pub fn extract_metadata(data: &Value) -> VersionMetadata {
    let proposal = data.get("proposal");
    let field = |name: &str| proposal.and_then(|p| p.get(name));

    VersionMetadata {
        capex: field("capex").and_then(Value::as_f64),
        opex: field("opex").and_then(Value::as_f64),
        efficiency: field("efficiency").and_then(Value::as_f64),
        technologies: field("technologies").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(|t| t.as_str().map(String::from))
                .collect()
        }),
        risks: field("risks").cloned(),
        timeline: field("timeline").cloned(),
        checksum: generate_checksum(data),
        approved_by: None,
        approved_at: None,
    }
}
