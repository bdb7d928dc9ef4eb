// src/lib.rs

pub mod extension;

pub use extension::compat::{host_version, CompatError, EngineRange, Version};
pub use extension::core::{Extension, ExtensionManager, ExtensionManifest, SkippedExtension};
pub use extension::error::ExtensionError;

/// Install a fmt subscriber honoring `RUST_LOG`. Later calls are no-ops,
/// so embedding hosts and tests can both call this unconditionally.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
}
