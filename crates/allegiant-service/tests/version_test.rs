//! End-to-end tests for creating, comparing, and transitioning versions.

mod helpers;

use serde_json::json;

use allegiant_core::config::versioning::ArrayPolicy;
use allegiant_core::error::ErrorKind;
use allegiant_entity::version::{
    ChangeType, ProjectVersion, SemanticVersion, VersionStatus, VersionType,
};
use allegiant_service::version::{
    DiffOptions, approve_version, archive_version, compare_versions, compare_versions_with,
    create_version, generate_checksum, restore_version, submit_for_review, verify_checksum,
};

use helpers::{PROJECT_ID, info, project_data, version};

#[test]
fn test_first_then_minor_version() {
    let data1 = json!({"proposal": {"capex": 100000, "technologies": ["UV"]}});
    let v1 = version(&data1, None, "Initial", VersionType::Patch);

    assert_eq!(v1.version.to_string(), "0.0.1");
    assert_eq!(v1.id, "v0.0.1");
    assert!(v1.changes.is_empty());
    assert_eq!(v1.metadata.capex, Some(100000.0));
    assert_eq!(v1.status, VersionStatus::Draft);

    let data2 = json!({"proposal": {"capex": 120000, "technologies": ["UV", "RO"]}});
    let v2 = version(&data2, Some(&v1), "Add RO", VersionType::Minor);

    assert_eq!(v2.version.to_string(), "0.1.0");
    assert_eq!(v2.changes.len(), 2);

    let capex = &v2.changes[0];
    assert_eq!(capex.change_type, ChangeType::Modified);
    assert_eq!(capex.section, "proposal");
    assert_eq!(capex.field, "capex");
    assert_eq!(capex.old_value, json!(100000));
    assert_eq!(capex.new_value, json!(120000));
    assert_eq!(capex.author, "System");

    let techs = &v2.changes[1];
    assert_eq!(techs.change_type, ChangeType::Modified);
    assert_eq!(techs.field, "technologies");
    assert_eq!(techs.new_value, json!(["UV", "RO"]));

    let comparison = compare_versions(&v1, &v2);
    assert_eq!(comparison.differences.len(), 2);
    assert_eq!(comparison.summary.capex_change, 20000.0);
    assert_eq!(comparison.summary.opex_change, 0.0);
    assert!(comparison.summary.technology_changes.contains(&"+RO".to_string()));
}

#[test]
fn test_added_proposal_key_between_versions() {
    let v1 = version(&json!({"proposal": {"capex": 100000}}), None, "Initial", VersionType::Patch);
    let v2 = version(
        &json!({"proposal": {"capex": 100000, "technologies": ["UV", "RO"]}}),
        Some(&v1),
        "Technologies",
        VersionType::Patch,
    );

    assert_eq!(v2.changes.len(), 1);
    assert_eq!(v2.changes[0].change_type, ChangeType::Added);
    assert_eq!(v2.changes[0].old_value, json!(""));
    assert_eq!(v2.changes[0].new_value, json!(["UV", "RO"]));
}

#[test]
fn test_snapshot_is_independent_of_caller_data() {
    let mut data = project_data(90000, &["UF"]);
    let v1 = version(&data, None, "Initial", VersionType::Major);
    let expected = data.clone();

    data["proposal"]["capex"] = json!(1);
    data["client"] = json!(null);

    assert_eq!(v1.project_data, expected);
    assert_eq!(restore_version(&v1), expected);

    let mut restored = restore_version(&v1);
    restored["proposal"]["technologies"] = json!([]);
    assert_eq!(v1.project_data, expected);
}

#[test]
fn test_changes_are_relative_to_previous_snapshot() {
    let mut live = project_data(100000, &["UV"]);
    let v1 = version(&live, None, "Initial", VersionType::Patch);

    live["proposal"]["capex"] = json!(110000);
    live["proposal"]["capex"] = json!(130000);
    let v2 = version(&live, Some(&v1), "Capex", VersionType::Patch);

    assert_eq!(v2.changes.len(), 1);
    assert_eq!(v2.changes[0].old_value, json!(100000));
    assert_eq!(v2.changes[0].new_value, json!(130000));
}

#[test]
fn test_overflowing_bump_fails_instead_of_wrapping() {
    let mut head = version(&project_data(1, &["UV"]), None, "Initial", VersionType::Patch);
    head.version = SemanticVersion::new(u64::MAX, 0, 0);

    let err = create_version(
        PROJECT_ID,
        &project_data(2, &["UV"]),
        Some(&head),
        &info("Next", VersionType::Major),
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let patch = version(&project_data(2, &["UV"]), Some(&head), "Next", VersionType::Patch);
    assert_eq!(patch.version, SemanticVersion::new(u64::MAX, 0, 1));
}

#[test]
fn test_lifecycle_transitions_do_not_mutate_input() {
    let v1 = version(&project_data(100000, &["UV"]), None, "Initial", VersionType::Patch);

    let reviewed = submit_for_review(&v1);
    assert_eq!(reviewed.status, VersionStatus::Review);

    let approved = approve_version(&reviewed, "lead.engineer");
    assert_eq!(approved.status, VersionStatus::Approved);
    assert_eq!(approved.metadata.approved_by.as_deref(), Some("lead.engineer"));
    assert!(approved.metadata.approved_at.is_some());
    assert_eq!(approved.project_data, v1.project_data);

    assert_eq!(v1.status, VersionStatus::Draft);
    assert_eq!(reviewed.status, VersionStatus::Review);
    assert!(reviewed.metadata.approved_by.is_none());
}

#[test]
fn test_archive_is_idempotent() {
    let v1 = version(&project_data(100000, &["UV"]), None, "Initial", VersionType::Patch);

    let once = archive_version(&v1);
    let twice = archive_version(&once);

    assert_eq!(twice.status, VersionStatus::Archived);
    assert_eq!(twice, once);
}

#[test]
fn test_checksum_tracks_snapshot() {
    let v1 = version(&project_data(100000, &["UV"]), None, "Initial", VersionType::Patch);
    assert_eq!(v1.metadata.checksum, generate_checksum(&v1.project_data));
    assert!(verify_checksum(&v1));

    let mut tampered = v1.clone();
    tampered.project_data["proposal"]["capex"] = json!(1);
    assert!(!verify_checksum(&tampered));
}

#[test]
fn test_compare_non_adjacent_versions() {
    let v1 = version(
        &json!({"proposal": {
            "capex": 100,
            "opex": 10,
            "efficiency": 0.8,
            "technologies": ["UV", "MBR"]
        }}),
        None,
        "Initial",
        VersionType::Patch,
    );
    let v2 = version(
        &json!({"proposal": {"capex": 150, "technologies": ["UV"]}}),
        Some(&v1),
        "Trim",
        VersionType::Patch,
    );
    let v3 = version(
        &json!({"proposal": {"capex": 175, "opex": 12, "technologies": ["UV", "RO"]}}),
        Some(&v2),
        "RO",
        VersionType::Major,
    );
    assert_eq!(v3.version.to_string(), "1.0.0");

    let comparison = compare_versions(&v1, &v3);
    assert_eq!(comparison.summary.capex_change, 75.0);
    assert_eq!(comparison.summary.opex_change, 2.0);
    assert!((comparison.summary.efficiency_change + 0.8).abs() < 1e-9);
    assert_eq!(comparison.summary.technology_changes, vec!["+RO", "-MBR"]);

    let removed: Vec<_> = comparison
        .differences
        .iter()
        .filter(|c| c.change_type == ChangeType::Removed)
        .map(|c| c.location())
        .collect();
    assert_eq!(removed, vec!["proposal.efficiency"]);
}

#[test]
fn test_compare_with_explicit_options() {
    let v1 = version(&project_data(1, &["UV", "RO"]), None, "a", VersionType::Patch);
    let v2 = version(&project_data(1, &["UV", "EDI"]), Some(&v1), "b", VersionType::Patch);
    assert!(compare_versions(&v1, &v2).differences.is_empty());

    let options = DiffOptions {
        system_author: "Allegiant Bot".to_string(),
        array_policy: ArrayPolicy::Atomic,
    };
    let comparison = compare_versions_with(&v1, &v2, &options);
    assert_eq!(comparison.differences.len(), 1);
    assert_eq!(comparison.differences[0].field, "technologies");
    assert_eq!(comparison.differences[0].author, "Allegiant Bot");
}

#[test]
fn test_wire_shape_roundtrip() {
    let v1 = version(&project_data(100000, &["UV"]), None, "Initial", VersionType::Patch);
    let v2 = version(&project_data(120000, &["UV"]), Some(&v1), "Capex", VersionType::Minor);

    let json = serde_json::to_value(&v2).expect("serialize");
    assert_eq!(json["version"], "0.1.0");
    assert_eq!(json["type"], "minor");
    assert_eq!(json["status"], "draft");
    assert_eq!(json["projectData"]["proposal"]["capex"], 120000);
    assert_eq!(json["changes"][0]["changeType"], "modified");
    assert_eq!(json["metadata"]["capex"], 120000.0);
    assert!(json["metadata"].get("approvedBy").is_none());

    let back: ProjectVersion = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, v2);
}
