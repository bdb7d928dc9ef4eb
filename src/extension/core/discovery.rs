// src/extension/core/discovery.rs
//
// Extension discovery: scan the extensions directory, gate every manifest
// through the engine compatibility check, then activate or skip.

use std::path::Path;

use tracing::{debug, warn};

use crate::extension::compat::EngineRange;
use crate::extension::core::manager::ExtensionManager;
use crate::extension::core::manifest::ExtensionManifest;
use crate::extension::core::types::{Extension, SkippedExtension};
use crate::extension::error::ExtensionError;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

impl ExtensionManager {
    /// Scans `extensions_dir` and loads every compatible extension.
    ///
    /// One directory entry = one extension candidate. A candidate that
    /// cannot be verified (unreadable or malformed manifest, missing or
    /// unsupported engine requirement) or whose requirement does not
    /// admit the host version is skipped and recorded. Only a read
    /// failure on the extensions directory itself aborts the scan.
    pub async fn load_installed_extensions(
        &self,
        extensions_dir: &Path,
    ) -> Result<Vec<String>, ExtensionError> {
        // Drop the results of any previous scan.
        self.active_extensions
            .lock()
            .map_err(|e| ExtensionError::MutexPoisoned {
                reason: e.to_string(),
            })?
            .clear();
        self.skipped_extensions
            .lock()
            .map_err(|e| ExtensionError::MutexPoisoned {
                reason: e.to_string(),
            })?
            .clear();

        let mut entries = tokio::fs::read_dir(extensions_dir)
            .await
            .map_err(|e| ExtensionError::filesystem_with_path(extensions_dir.to_string_lossy(), e))?;

        let mut loaded_extension_ids = Vec::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ExtensionError::filesystem_with_path(extensions_dir.to_string_lossy(), e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| ExtensionError::filesystem_with_path(entry.path().to_string_lossy(), e))?;
            if !file_type.is_dir() {
                continue;
            }

            let id = entry.file_name().to_string_lossy().to_string();
            if let Some(extension) = self.load_extension_from_dir(&id, &entry.path()).await? {
                debug!(
                    id = %extension.id,
                    version = %extension.manifest.version,
                    "extension activated"
                );
                loaded_extension_ids.push(extension.id.clone());
                self.add_extension(extension)?;
            }
        }

        loaded_extension_ids.sort();
        Ok(loaded_extension_ids)
    }

    /// Load a single extension candidate.
    ///
    /// Returns `Ok(None)` when the candidate was skipped (and recorded),
    /// `Ok(Some)` when it passed the compatibility gate.
    async fn load_extension_from_dir(
        &self,
        id: &str,
        path: &Path,
    ) -> Result<Option<Extension>, ExtensionError> {
        let manifest = match self.read_manifest(path).await {
            Ok(manifest) => manifest,
            Err(e) => {
                self.skip(id, path, format!("cannot read manifest: {e}"))?;
                return Ok(None);
            }
        };

        let Some(requirement) = manifest.engine_requirement() else {
            self.skip(
                id,
                path,
                "manifest declares no engines.skylight requirement".to_string(),
            )?;
            return Ok(None);
        };

        // Unsupported grammar means "cannot be verified" and fails closed:
        // the extension is skipped, never loaded on a permissive parse.
        let range = match EngineRange::parse(requirement) {
            Ok(range) => range,
            Err(e) => {
                self.skip(id, path, e.to_string())?;
                return Ok(None);
            }
        };

        if !range.admits(self.host()) {
            self.skip(
                id,
                path,
                format!("requires skylight {requirement}, host is {}", self.host()),
            )?;
            return Ok(None);
        }

        Ok(Some(Extension {
            id: id.to_string(),
            path: path.to_path_buf(),
            manifest,
        }))
    }

    async fn read_manifest(&self, path: &Path) -> Result<ExtensionManifest, ExtensionError> {
        let manifest_path = path.join(MANIFEST_FILE_NAME);
        let content = tokio::fs::read_to_string(&manifest_path)
            .await
            .map_err(|e| ExtensionError::filesystem_with_path(manifest_path.to_string_lossy(), e))?;
        let manifest: ExtensionManifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    fn skip(&self, id: &str, path: &Path, reason: String) -> Result<(), ExtensionError> {
        warn!(id = %id, reason = %reason, "extension skipped");
        self.add_skipped(SkippedExtension {
            id: id.to_string(),
            path: path.to_path_buf(),
            reason,
        })
    }
}
