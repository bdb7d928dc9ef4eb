// src/extension/compat/tests.rs
//!
//! Extension/host version compatibility checks

use super::*;

fn version(raw: &str) -> Version {
    Version::coerce(raw).unwrap()
}

fn compatible(host: &str, requirement: &str) -> bool {
    is_compatible(&version(host), requirement).unwrap()
}

// ============================================================================
// Normalizer (coercion)
// ============================================================================

#[test]
fn test_coerce_full_version() {
    assert_eq!(version("5.5.0"), Version::new(5, 5, 0));
}

#[test]
fn test_coerce_defaults_missing_components_to_zero() {
    assert_eq!(version("5.5"), Version::new(5, 5, 0));
    assert_eq!(version("10"), Version::new(10, 0, 0));
}

#[test]
fn test_coerce_ignores_leading_text_and_extra_components() {
    assert_eq!(version("v1.2.3"), Version::new(1, 2, 3));
    assert_eq!(version("version 10.1 build 7"), Version::new(10, 1, 0));
    assert_eq!(version("1.2.3.4"), Version::new(1, 2, 3));
}

#[test]
fn test_coerce_keeps_attached_prerelease() {
    let v = version("5.6.0-beta.3");
    assert_eq!(v.prerelease.as_deref(), Some("beta.3"));
    assert_eq!(v.to_string(), "5.6.0-beta.3");
}

#[test]
fn test_coerce_fails_without_any_version_token() {
    for raw in ["", "not a version", "beta", "-..-"] {
        let result = Version::coerce(raw);
        assert!(
            matches!(result, Err(CompatError::InvalidHostVersion { .. })),
            "expected failure for {raw:?}"
        );
    }
}

// ============================================================================
// Version ordering
// ============================================================================

#[test]
fn test_version_ordering_follows_semver_precedence() {
    let chain = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];

    for pair in chain.windows(2) {
        assert!(
            version(pair[0]) < version(pair[1]),
            "expected {} < {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_release_ranks_above_its_prereleases() {
    assert!(version("5.4.0-alpha.0") < version("5.4.0"));
    assert!(version("5.4.0") < version("5.4.1-alpha.0"));
}

// ============================================================================
// Validator (engine requirement grammar)
// ============================================================================

#[test]
fn test_parse_bare_and_caret_forms_share_one_floor() {
    for requirement in ["5.5.0", "^5.5.0", "5.5", "^5.5"] {
        let range = EngineRange::parse(requirement).unwrap();
        assert_eq!(range.floor(), &Version::new(5, 5, 0), "for {requirement:?}");
    }
}

#[test]
fn test_parse_keeps_prerelease_floor() {
    let range = EngineRange::parse("^5.4.0-alpha.0").unwrap();
    assert_eq!(range.floor().prerelease.as_deref(), Some("alpha.0"));
}

#[test]
fn test_parse_is_idempotent() {
    for requirement in ["5.5", "^5.4.0-alpha.0"] {
        assert_eq!(
            EngineRange::parse(requirement).unwrap(),
            EngineRange::parse(requirement).unwrap()
        );
    }
}

#[test]
fn test_parse_rejects_unsupported_range_syntax() {
    let rejected = [
        ">=2.0",
        "~2.0",
        "*",
        ">1.0",
        "<=3.1.0",
        "=1.2.3",
        "1.x",
        "1.2.x",
        "1.*",
        "1.2.3 - 2.0.0",
        "^1.0 || ^2.0",
        " 5.5.0",
        "5.5.0 ",
        "5",
        "",
    ];

    for requirement in rejected {
        let result = EngineRange::parse(requirement);
        assert!(
            matches!(result, Err(CompatError::UnsupportedRangeFormat { .. })),
            "expected rejection of {requirement:?}"
        );
    }
}

#[test]
fn test_rejection_message_indicates_invalid_format() {
    for requirement in [">=2.0", "~2.0", "*"] {
        let message = EngineRange::parse(requirement).unwrap_err().to_string();
        assert!(
            message.to_lowercase().contains("invalid format"),
            "message {message:?}"
        );
    }
}

// ============================================================================
// Evaluator (caret semantics)
// ============================================================================

#[test]
fn test_compatible_with_exact_version_match() {
    assert!(compatible("5.5.0", "5.5.0"));
}

#[test]
fn test_compatible_with_higher_host_patch() {
    assert!(compatible("5.5.5", "5.5.0"));
}

#[test]
fn test_compatible_with_higher_host_minor() {
    assert!(compatible("5.6.0", "5.5.0"));
}

#[test]
fn test_incompatible_across_major_versions_in_both_directions() {
    assert!(!compatible("6.0.0", "5.6.0"));
    assert!(!compatible("5.6.0", "6.0.0"));
}

#[test]
fn test_incompatible_below_the_floor() {
    assert!(!compatible("5.4.9", "^5.5.0"));
    assert!(!compatible("5.5.0", "^5.5.1"));
}

#[test]
fn test_prerelease_floor_is_honored() {
    assert!(compatible("5.5.0-alpha.0", "^5.4.0-alpha.0"));
    assert!(compatible("5.4.0-alpha.1", "^5.4.0-alpha.0"));
    assert!(!compatible("5.4.0-alpha.0", "^5.4.0-alpha.1"));
}

#[test]
fn test_prerelease_host_ranks_below_release_floor() {
    assert!(!compatible("5.4.0-alpha.0", "^5.4.0"));
    assert!(compatible("5.4.0", "^5.4.0-alpha.0"));
}

#[test]
fn test_short_requirement_behaves_like_caret() {
    assert!(compatible("5.5.1", "5.5"));
    assert!(compatible("5.9.0", "5.5"));
    assert!(!compatible("6.0.0", "5.5"));
}

#[test]
fn test_bare_three_component_requirement_is_caret_not_exact() {
    assert!(compatible("5.6.2", "5.5.0"));
}

#[test]
fn test_unsupported_format_is_an_error_not_a_verdict() {
    for (host, requirement) in [("2.0", ">=2.0"), ("2.0", "~2.0"), ("1.0", "*")] {
        let result = is_compatible(&version(host), requirement);
        assert!(
            matches!(result, Err(CompatError::UnsupportedRangeFormat { .. })),
            "expected error for {requirement:?} against host {host}"
        );
    }
}

// ============================================================================
// Host version
// ============================================================================

#[test]
fn test_host_version_matches_build_metadata() {
    assert_eq!(host_version(), &version(env!("CARGO_PKG_VERSION")));
}
