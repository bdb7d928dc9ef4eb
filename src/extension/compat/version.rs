// src/extension/compat/version.rs
//
// Semantic version with coercion from free-form input.

use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::extension::compat::error::CompatError;

lazy_static! {
    /// First version-shaped token in a free-form string. Minor and patch
    /// are optional; a prerelease suffix counts only when attached with
    /// '-' directly after the numeric core.
    static ref VERSION_TOKEN: Regex = Regex::new(
        r"(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?"
    )
    .expect("version token pattern is valid");
}

/// A normalized semantic version. Ordering follows semver precedence:
/// major, minor, patch, then prerelease, where a prerelease ranks below
/// the release it precedes.
#[derive(Debug, Clone, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    /// Coerce a free-form version string into a fully-specified version.
    ///
    /// Leading text (`"v5.5"`), missing components (`"5.5"` becomes
    /// `5.5.0`) and trailing extras (`"1.2.3.4"` becomes `1.2.3`) are
    /// tolerated; a string with no version token at all fails with
    /// [`CompatError::InvalidHostVersion`].
    pub fn coerce(raw: &str) -> Result<Self, CompatError> {
        let caps = VERSION_TOKEN
            .captures(raw)
            .ok_or_else(|| CompatError::InvalidHostVersion {
                raw: raw.to_string(),
            })?;

        let component = |idx: usize| -> Result<u64, CompatError> {
            match caps.get(idx) {
                None => Ok(0),
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| CompatError::InvalidHostVersion {
                        raw: raw.to_string(),
                    }),
            }
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
            prerelease: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => cmp_prerelease(a, b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Manual impl keeps equality consistent with the ordering above.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{prerelease}")?;
        }
        Ok(())
    }
}

/// Prerelease precedence: dot-separated identifiers compared left to
/// right; numeric identifiers compare numerically and rank below
/// alphanumeric ones; when all shared identifiers are equal, the shorter
/// list ranks lower.
fn cmp_prerelease(a: &str, b: &str) -> Ordering {
    let mut lhs = a.split('.');
    let mut rhs = b.split('.');
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(xn), Ok(yn)) => xn.cmp(&yn),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
