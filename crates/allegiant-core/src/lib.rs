//! # allegiant-core
//!
//! Core crate for H2O Allegiant project versioning. Contains configuration
//! schemas, typed identifiers, the logging bootstrap, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Allegiant crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
