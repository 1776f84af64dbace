//! # allegiant-entity
//!
//! Value types for project version control. Every struct here is a plain
//! value: versions own their snapshot outright and are never shared with
//! the live project state. All types derive `Debug`, `Clone`, `Serialize`,
//! and `Deserialize`, using the camelCase field names the front-end stores.

pub mod version;
