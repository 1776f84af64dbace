//! Convenience result type alias for Allegiant.

use crate::error::AppError;

/// A specialized `Result` type for Allegiant operations.
pub type AppResult<T> = Result<T, AppError>;
