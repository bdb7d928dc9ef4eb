// src/extension/compat/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompatError {
    /// The host's own build version could not be coerced to a semantic
    /// version. No compatibility decision can be trusted without it, so
    /// this is a startup fault rather than a per-extension condition.
    #[error("Cannot determine host version: no semantic version in {raw:?}")]
    InvalidHostVersion { raw: String },

    /// The declared requirement uses a grammar outside the supported
    /// caret/bare-version subset. Display text keeps the "Invalid format"
    /// wording that callers and logs match on.
    #[error("Invalid format of engine requirement: {requirement:?}")]
    UnsupportedRangeFormat { requirement: String },
}
