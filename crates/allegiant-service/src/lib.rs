//! # allegiant-service
//!
//! The project version control engine. Every operation is a free function
//! over explicit values: callers pass in the live project data and the
//! previous version, and get back new records. Nothing here holds state
//! between calls or performs I/O; persisting the version chain is the
//! caller's job ([`version::VersionHistory`] is an in-memory helper for it).

pub mod version;
