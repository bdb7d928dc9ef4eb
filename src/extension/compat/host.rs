// src/extension/compat/host.rs

use lazy_static::lazy_static;

use crate::extension::compat::version::Version;

lazy_static! {
    /// Version of the running host, coerced once at first use and shared
    /// read-only for the process lifetime. A build version that cannot be
    /// coerced is a host-configuration fault, fatal at startup.
    static ref HOST_VERSION: Version = Version::coerce(env!("CARGO_PKG_VERSION"))
        .expect("CARGO_PKG_VERSION is not a valid semantic version");
}

/// The running host's normalized version.
pub fn host_version() -> &'static Version {
    &HOST_VERSION
}
