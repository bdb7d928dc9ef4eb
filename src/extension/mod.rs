// src/extension/mod.rs

pub mod compat;
pub mod core;
pub mod error;

pub use compat::{host_version, CompatError, EngineRange, Version};
pub use self::core::{Extension, ExtensionManager, ExtensionManifest, SkippedExtension};
pub use error::ExtensionError;
