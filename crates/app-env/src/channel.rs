//! Build channel and target environment flags.
//!
//! The channel is decided by how the binary was compiled, not by runtime
//! configuration, mirroring the usual debug/release split of mobile build
//! pipelines.

use std::fmt;

/// Which channel this binary was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildChannel {
    /// Debug build: assertions on, meant for development devices.
    Development,
    /// Release build: what ships to users.
    Production,
}

impl BuildChannel {
    /// The channel of the running binary.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Lowercase channel name for log and diagnostics output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for BuildChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True in debug builds.
#[must_use]
pub const fn is_development() -> bool {
    matches!(BuildChannel::current(), BuildChannel::Development)
}

/// True in release builds.
#[must_use]
pub const fn is_production() -> bool {
    !is_development()
}

/// True when running on a desktop emulator rather than device hardware.
///
/// Device hardware is ARM; an x86 target can only be an emulator or a
/// developer workstation.
#[must_use]
pub const fn is_emulator() -> bool {
    cfg!(any(target_arch = "x86", target_arch = "x86_64"))
}
