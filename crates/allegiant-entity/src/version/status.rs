//! Version status and bump type enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use allegiant_core::error::AppError;

/// Lifecycle status of a project version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    /// Freshly created, still open for discussion.
    Draft,
    /// Submitted for review.
    Review,
    /// Approved by a reviewer.
    Approved,
    /// Retired from active use.
    Archived,
}

impl VersionStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Approved => "approved",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VersionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "review" => Ok(Self::Review),
            "approved" => Ok(Self::Approved),
            "archived" => Ok(Self::Archived),
            other => Err(AppError::validation(format!(
                "Unknown version status '{other}'"
            ))),
        }
    }
}

/// Which component of the semantic version a new version increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    /// `M.N.P` becomes `(M+1).0.0`.
    Major,
    /// `M.N.P` becomes `M.(N+1).0`.
    Minor,
    /// `M.N.P` becomes `M.N.(P+1)`.
    Patch,
}

impl VersionType {
    /// Return the bump type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VersionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            other => Err(AppError::validation(format!(
                "Unknown version type '{other}', expected major, minor, or patch"
            ))),
        }
    }
}
