//! Semantic version numbering.

use allegiant_core::error::AppError;
use allegiant_core::result::AppResult;
use allegiant_entity::version::{ProjectVersion, SemanticVersion, VersionType};

/// Number for the version following `previous`; a chain without a previous
/// version continues from `0.0.0`.
///
/// Fails with a validation error when the bumped component would overflow.
pub fn next_version(
    previous: Option<&ProjectVersion>,
    version_type: VersionType,
) -> AppResult<SemanticVersion> {
    let current = previous
        .map(|v| v.version)
        .unwrap_or_else(SemanticVersion::initial);
    bump(&current, version_type)
}

/// Bump a raw `M.N.P` string by a raw bump type name.
///
/// Unknown bump types, malformed version strings, and overflowing
/// components are rejected with a validation error instead of returning the
/// input unchanged.
pub fn generate_version_number(current: &str, version_type: &str) -> AppResult<String> {
    let current: SemanticVersion = current.parse()?;
    let version_type: VersionType = version_type.parse()?;
    Ok(bump(&current, version_type)?.to_string())
}

fn bump(current: &SemanticVersion, version_type: VersionType) -> AppResult<SemanticVersion> {
    current.checked_bump(version_type).ok_or_else(|| {
        AppError::validation(format!(
            "Cannot apply a {version_type} bump to {current}: component overflow"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use allegiant_core::error::ErrorKind;

    #[test]
    fn test_generate_version_number() {
        assert_eq!(generate_version_number("1.2.3", "major").unwrap(), "2.0.0");
        assert_eq!(generate_version_number("1.2.3", "minor").unwrap(), "1.3.0");
        assert_eq!(generate_version_number("1.2.3", "patch").unwrap(), "1.2.4");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = generate_version_number("1.2.3", "build").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_malformed_version_is_rejected() {
        let err = generate_version_number("1.two.3", "patch").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_overflowing_bump_is_rejected() {
        let err = generate_version_number("18446744073709551615.0.0", "major").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = generate_version_number("0.0.18446744073709551615", "patch").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        assert_eq!(
            generate_version_number("18446744073709551615.0.0", "minor").unwrap(),
            "18446744073709551615.1.0"
        );
    }

    #[test]
    fn test_first_version_starts_from_zero() {
        let next = |t: VersionType| next_version(None, t).unwrap().to_string();
        assert_eq!(next(VersionType::Patch), "0.0.1");
        assert_eq!(next(VersionType::Minor), "0.1.0");
        assert_eq!(next(VersionType::Major), "1.0.0");
    }
}
