//! Structural diff between two project states.
//!
//! The walk descends through objects key by key. Arrays are compared as
//! whole values according to [`ArrayPolicy`] and never element by element.
//! Values of different JSON kinds (including `null` against an object or
//! array, and an object against an array) produce one `modified` change at
//! that path without descending further.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};
use tracing::debug;

use allegiant_core::config::versioning::{ArrayPolicy, VersioningConfig};
use allegiant_core::types::ChangeId;
use allegiant_entity::version::{ChangeType, VersionChange};

/// Section name for changes at the root path.
const ROOT_SECTION: &str = "General";
/// Field name for changes at the root path.
const ROOT_FIELD: &str = "root";

/// Options controlling change detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// Author label stamped on every change.
    pub system_author: String,
    /// How arrays are compared.
    pub array_policy: ArrayPolicy,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self::from(&VersioningConfig::default())
    }
}

impl From<&VersioningConfig> for DiffOptions {
    fn from(config: &VersioningConfig) -> Self {
        Self {
            system_author: config.system_author.clone(),
            array_policy: config.array_policy,
        }
    }
}

/// Detect the changes that turn `old` into `new`.
///
/// Changes are emitted in path order, with object keys visited in sorted
/// order. Each change gets a fresh id, the detection time, and the
/// configured system author.
pub fn detect_changes(old: &Value, new: &Value, options: &DiffOptions) -> Vec<VersionChange> {
    let mut collector = ChangeCollector {
        options,
        timestamp: Utc::now(),
        changes: Vec::new(),
    };
    collector.walk(old, new, "");

    debug!(
        changes = collector.changes.len(),
        array_policy = %options.array_policy,
        "Detected project changes"
    );

    collector.changes
}

struct ChangeCollector<'a> {
    options: &'a DiffOptions,
    timestamp: DateTime<Utc>,
    changes: Vec<VersionChange>,
}

impl ChangeCollector<'_> {
    fn walk(&mut self, old: &Value, new: &Value, path: &str) {
        match (old, new) {
            (Value::Object(old_map), Value::Object(new_map)) => {
                self.walk_objects(old_map, new_map, path);
            }
            (Value::Array(old_items), Value::Array(new_items)) => {
                if self.arrays_differ(old_items, new_items) {
                    self.record(path, old.clone(), new.clone(), ChangeType::Modified);
                }
            }
            _ => {
                if !values_equal(old, new) {
                    self.record(path, old.clone(), new.clone(), ChangeType::Modified);
                }
            }
        }
    }

    fn walk_objects(&mut self, old: &Map<String, Value>, new: &Map<String, Value>, path: &str) {
        let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

        for key in keys {
            let child = child_path(path, key);
            match (old.get(key), new.get(key)) {
                (None, Some(added)) => {
                    self.record(&child, empty(), added.clone(), ChangeType::Added);
                }
                (Some(removed), None) => {
                    self.record(&child, removed.clone(), empty(), ChangeType::Removed);
                }
                (Some(old_value), Some(new_value)) => self.walk(old_value, new_value, &child),
                (None, None) => {}
            }
        }
    }

    fn arrays_differ(&self, old: &[Value], new: &[Value]) -> bool {
        match self.options.array_policy {
            ArrayPolicy::Length => old.len() != new.len(),
            ArrayPolicy::Atomic => !arrays_equal(old, new),
        }
    }

    fn record(&mut self, path: &str, old_value: Value, new_value: Value, change_type: ChangeType) {
        let (section, field) = split_path(path);
        self.changes.push(VersionChange {
            id: ChangeId::new(),
            section,
            field,
            old_value,
            new_value,
            change_type,
            timestamp: self.timestamp,
            author: self.options.system_author.clone(),
        });
    }
}

/// Placeholder recorded on the missing side of an added or removed key.
fn empty() -> Value {
    Value::String(String::new())
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Split a dotted path into its section and field.
///
/// A single-segment path uses the segment for both; the root path maps to
/// `General` / `root`.
fn split_path(path: &str) -> (String, String) {
    if path.is_empty() {
        return (ROOT_SECTION.to_string(), ROOT_FIELD.to_string());
    }

    match path.split_once('.') {
        Some((section, field)) => (section.to_string(), field.to_string()),
        None => (path.to_string(), path.to_string()),
    }
}

/// Structural equality where `1` and `1.0` are the same number.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(x), Value::Array(y)) => arrays_equal(x, y),
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, value)| y.get(key).is_some_and(|other| values_equal(value, other)))
        }
        _ => a == b,
    }
}

fn arrays_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y))
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    a.as_f64() == b.as_f64()
}
