// src/extension/error.rs
use thiserror::Error;

use crate::extension::compat::CompatError;

#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("Extension not found: {id}")]
    NotFound { id: String },

    #[error("Filesystem operation failed: {source}")]
    Filesystem {
        #[from]
        source: std::io::Error,
    },

    #[error("Filesystem operation failed at '{path}': {source}")]
    FilesystemWithPath {
        path: String,
        source: std::io::Error,
    },

    #[error("Manifest error: {reason}")]
    ManifestError { reason: String },

    #[error("Engine compatibility check failed: {source}")]
    Compat {
        #[from]
        source: CompatError,
    },

    #[error("A mutex was poisoned: {reason}")]
    MutexPoisoned { reason: String },
}

impl ExtensionError {
    /// Helper to create a filesystem error with path context
    pub fn filesystem_with_path<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::FilesystemWithPath {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for ExtensionError {
    fn from(err: serde_json::Error) -> Self {
        ExtensionError::ManifestError {
            reason: err.to_string(),
        }
    }
}
