// src/extension/core/types.rs

use std::path::PathBuf;

use crate::extension::core::manifest::ExtensionManifest;

/// An extension admitted by the compatibility gate.
#[derive(Debug, Clone)]
pub struct Extension {
    /// Directory name under the extensions root.
    pub id: String,
    pub path: PathBuf,
    pub manifest: ExtensionManifest,
}

/// An extension excluded from the active set, with the reason it was
/// excluded. Skips surface in logs and through the manager's skipped
/// list; they never abort discovery.
#[derive(Debug, Clone)]
pub struct SkippedExtension {
    pub id: String,
    pub path: PathBuf,
    pub reason: String,
}
