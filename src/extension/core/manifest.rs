// src/extension/core/manifest.rs

use serde::{Deserialize, Serialize};

use crate::extension::compat::{self, Version};
use crate::extension::error::ExtensionError;

/// Engine requirements declared by an extension. Only the `skylight`
/// field is consumed by the compatibility gate; other engines (node
/// toolchains and the like) are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtensionEngines {
    #[serde(default)]
    pub skylight: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    pub name: String,
    #[serde(default = "default_version_value")]
    pub version: String,
    #[serde(default)]
    pub engines: ExtensionEngines,
    pub author: Option<String>,
    pub description: Option<String>,
}

fn default_version_value() -> String {
    "0.0.0-dev".to_string()
}

impl ExtensionManifest {
    /// The declared host engine requirement, if any.
    pub fn engine_requirement(&self) -> Option<&str> {
        self.engines.skylight.as_deref()
    }

    /// Whether this manifest's declared engine requirement admits `host`.
    ///
    /// A manifest with no `engines.skylight` entry cannot be verified and
    /// is a manifest error; an unsupported requirement grammar propagates
    /// as [`crate::extension::compat::CompatError`].
    pub fn is_compatible_with(&self, host: &Version) -> Result<bool, ExtensionError> {
        let requirement =
            self.engine_requirement()
                .ok_or_else(|| ExtensionError::ManifestError {
                    reason: format!(
                        "extension {:?} declares no engines.skylight requirement",
                        self.name
                    ),
                })?;

        Ok(compat::is_compatible(host, requirement)?)
    }
}
