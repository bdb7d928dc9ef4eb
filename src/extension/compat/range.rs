// src/extension/compat/range.rs
//
// Validation of extension engine requirements. Only bare versions and
// caret ranges are accepted; every other range operator is rejected so an
// extension cannot declare itself compatible with future host majors.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extension::compat::error::CompatError;
use crate::extension::compat::version::Version;

lazy_static! {
    /// Accepted engine requirement grammar: optional caret, two or three
    /// numeric components, optional prerelease suffix. Anchored on both
    /// ends; comparator operators, wildcards and compound ranges do not
    /// match.
    static ref ENGINE_REQUIREMENT: Regex = Regex::new(
        r"^\^?(\d+)\.(\d+)(?:\.(\d+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    )
    .expect("engine requirement pattern is valid");
}

/// A validated engine requirement: a floor version with an implicit
/// exclusive ceiling at the next major version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRange {
    floor: Version,
}

impl EngineRange {
    /// Validate and canonicalize a declared engine requirement.
    ///
    /// `"5.5"` and `"5.5.0"` are shorthand for `"^5.5.0"`; a missing
    /// patch defaults to zero. Anything outside the caret/bare grammar
    /// fails with [`CompatError::UnsupportedRangeFormat`].
    pub fn parse(requirement: &str) -> Result<Self, CompatError> {
        let unsupported = || CompatError::UnsupportedRangeFormat {
            requirement: requirement.to_string(),
        };

        let caps = ENGINE_REQUIREMENT
            .captures(requirement)
            .ok_or_else(unsupported)?;

        let component = |idx: usize| -> Result<u64, CompatError> {
            match caps.get(idx) {
                None => Ok(0),
                Some(m) => m.as_str().parse().map_err(|_| unsupported()),
            }
        };

        Ok(Self {
            floor: Version {
                major: component(1)?,
                minor: component(2)?,
                patch: component(3)?,
                prerelease: caps.get(4).map(|m| m.as_str().to_string()),
            },
        })
    }

    /// Floor version of the range.
    pub fn floor(&self) -> &Version {
        &self.floor
    }

    /// Caret evaluation: `version` is admitted iff it shares the floor's
    /// major component and is at or above the floor, with prereleases
    /// ordered below their corresponding release.
    pub fn admits(&self, version: &Version) -> bool {
        version.major == self.floor.major && *version >= self.floor
    }
}
