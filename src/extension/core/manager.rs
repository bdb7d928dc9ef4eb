// src/extension/core/manager.rs
//
// State for discovered extensions. The filesystem scan lives in
// discovery.rs.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::extension::compat::{host_version, Version};
use crate::extension::core::types::{Extension, SkippedExtension};
use crate::extension::error::ExtensionError;

pub struct ExtensionManager {
    /// Host version every candidate is checked against. Captured at
    /// construction; never changes for the manager's lifetime.
    host: Version,
    pub(crate) active_extensions: Mutex<HashMap<String, Extension>>,
    pub(crate) skipped_extensions: Mutex<Vec<SkippedExtension>>,
}

impl ExtensionManager {
    /// Manager for the running host, using the process-wide host version.
    pub fn new() -> Self {
        Self::with_host(host_version().clone())
    }

    /// Manager for an explicit host version. Discovery tests inject fixed
    /// versions through this.
    pub fn with_host(host: Version) -> Self {
        Self {
            host,
            active_extensions: Mutex::new(HashMap::new()),
            skipped_extensions: Mutex::new(Vec::new()),
        }
    }

    pub fn host(&self) -> &Version {
        &self.host
    }

    pub(crate) fn add_extension(&self, extension: Extension) -> Result<(), ExtensionError> {
        self.active_extensions
            .lock()
            .map_err(|e| ExtensionError::MutexPoisoned {
                reason: e.to_string(),
            })?
            .insert(extension.id.clone(), extension);
        Ok(())
    }

    pub(crate) fn add_skipped(&self, skipped: SkippedExtension) -> Result<(), ExtensionError> {
        self.skipped_extensions
            .lock()
            .map_err(|e| ExtensionError::MutexPoisoned {
                reason: e.to_string(),
            })?
            .push(skipped);
        Ok(())
    }

    /// Look up an active extension by id.
    pub fn get_extension(&self, id: &str) -> Result<Option<Extension>, ExtensionError> {
        Ok(self
            .active_extensions
            .lock()
            .map_err(|e| ExtensionError::MutexPoisoned {
                reason: e.to_string(),
            })?
            .get(id)
            .cloned())
    }

    /// Like `get_extension`, but a missing id is an error.
    pub fn require_extension(&self, id: &str) -> Result<Extension, ExtensionError> {
        self.get_extension(id)?
            .ok_or_else(|| ExtensionError::NotFound { id: id.to_string() })
    }

    /// Ids of all active extensions, sorted.
    pub fn active_extension_ids(&self) -> Result<Vec<String>, ExtensionError> {
        let mut ids: Vec<String> = self
            .active_extensions
            .lock()
            .map_err(|e| ExtensionError::MutexPoisoned {
                reason: e.to_string(),
            })?
            .keys()
            .cloned()
            .collect();
        ids.sort();
        Ok(ids)
    }

    /// Extensions excluded by the most recent discovery run.
    pub fn skipped_extensions(&self) -> Result<Vec<SkippedExtension>, ExtensionError> {
        Ok(self
            .skipped_extensions
            .lock()
            .map_err(|e| ExtensionError::MutexPoisoned {
                reason: e.to_string(),
            })?
            .clone())
    }
}

impl Default for ExtensionManager {
    fn default() -> Self {
        Self::new()
    }
}
