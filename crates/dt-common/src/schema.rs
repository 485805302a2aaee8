//! Schema versioning and compatibility.

/// Current schema version for all JSON payloads.
///
/// Follows semver: MAJOR.MINOR.PATCH
/// - MAJOR: Breaking changes (field removals, type changes)
/// - MINOR: Additive changes (new optional fields)
/// - PATCH: Bug fixes, documentation
pub const SCHEMA_VERSION: &str = "1.0.0";

fn major(version: &str) -> u32 {
    version
        .split('.')
        .next()
        .and_then(|part| part.parse().ok())
        .unwrap_or(0)
}

/// Check if a payload's schema version is compatible with current.
///
/// Compatibility is major-version equality; minor/patch differences are
/// additive by contract.
pub fn is_compatible(version: &str) -> bool {
    major(version) == major(SCHEMA_VERSION)
}
