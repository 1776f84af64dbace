//! `MAJOR.MINOR.PATCH` version numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use allegiant_core::error::AppError;

use super::status::VersionType;

/// A semantic version number. Orders by major, then minor, then patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    /// Major component.
    pub major: u64,
    /// Minor component.
    pub minor: u64,
    /// Patch component.
    pub patch: u64,
}

impl SemanticVersion {
    /// Create a version from its components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The number a chain starts from before its first version: `0.0.0`.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Return the next version for the given bump type, or `None` if the
    /// bumped component would overflow.
    pub fn checked_bump(&self, version_type: VersionType) -> Option<Self> {
        match version_type {
            VersionType::Major => Some(Self::new(self.major.checked_add(1)?, 0, 0)),
            VersionType::Minor => Some(Self::new(self.major, self.minor.checked_add(1)?, 0)),
            VersionType::Patch => {
                Some(Self::new(self.major, self.minor, self.patch.checked_add(1)?))
            }
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(AppError::validation(format!(
                "Invalid version '{s}', expected MAJOR.MINOR.PATCH"
            )));
        }

        let component = |part: &str| {
            if !is_plain_number(part) {
                return Err(AppError::validation(format!(
                    "Invalid version component '{part}' in '{s}'"
                )));
            }
            part.parse::<u64>().map_err(|e| {
                AppError::validation(format!("Invalid version component '{part}' in '{s}': {e}"))
            })
        };

        Ok(Self::new(
            component(parts[0])?,
            component(parts[1])?,
            component(parts[2])?,
        ))
    }
}

/// Digits only, without a leading zero unless the component is `0`.
fn is_plain_number(part: &str) -> bool {
    part.bytes().all(|b| b.is_ascii_digit()) && !(part.len() > 1 && part.starts_with('0'))
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
