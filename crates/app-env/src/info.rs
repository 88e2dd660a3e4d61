//! Application identity captured at compile time.

use std::fmt;

/// Name, version, and build number of the application.
///
/// There is no runtime bundle manifest to read on a bare binary, so the
/// fields are baked in at compile time. Construct with [`app_info!`](macro@crate::app_info)
/// so the *calling* crate's package metadata is captured, not this library's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    /// Package name (`CARGO_PKG_NAME` of the calling crate).
    pub name: &'static str,

    /// Marketing version (`CARGO_PKG_VERSION` of the calling crate).
    pub version: &'static str,

    /// Build number, from the `APP_BUILD_NUMBER` env at compile time.
    /// `"0"` when the build pipeline did not provide one.
    pub build: &'static str,
}

impl AppInfo {
    /// Combined version/build display string, e.g. `"v1.4.2 (317)"`.
    #[must_use]
    pub fn version_build(&self) -> String {
        format!("v{} ({})", self.version, self.build)
    }
}

impl fmt::Display for AppInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{} ({})", self.name, self.version, self.build)
    }
}

/// Capture the calling crate's [`AppInfo`] at compile time.
///
/// Expands `CARGO_PKG_NAME` / `CARGO_PKG_VERSION` in the caller's context and
/// reads the optional `APP_BUILD_NUMBER` environment variable the build
/// pipeline exports (absent in local builds, which report build `"0"`).
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            build: match option_env!("APP_BUILD_NUMBER") {
                Some(build) => build,
                None => "0",
            },
        }
    };
}
