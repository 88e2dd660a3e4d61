//! Process-wide shared display density.
//!
//! Querying the platform for the display scale is expensive enough to matter
//! on hot layout paths, and the value never changes during a process's life.
//! The host reads it once at startup and publishes it here; afterwards any
//! thread may read it without synchronization cost beyond the `OnceLock`
//! fast path.
//!
//! ```
//! use display_metrics::{shared, PixelDensity};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! shared::init_display_density(PixelDensity::try_new(3.0)?)?;
//! assert_eq!(shared::display_density().map(PixelDensity::get), Some(3.0));
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

use crate::density::PixelDensity;

static DISPLAY_DENSITY: OnceLock<PixelDensity> = OnceLock::new();

/// Error returned when the shared density has already been published.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlreadyInitialized {
    /// The density that was set first and remains in effect.
    pub current: PixelDensity,
}

impl std::fmt::Display for AlreadyInitialized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "display density already initialized to {}", self.current)
    }
}

impl std::error::Error for AlreadyInitialized {}

/// Publish the process-wide display density. Single assignment.
///
/// # Errors
///
/// Returns [`AlreadyInitialized`] carrying the value set by the first call;
/// the stored density is left untouched.
pub fn init_display_density(density: PixelDensity) -> Result<(), AlreadyInitialized> {
    match DISPLAY_DENSITY.set(density) {
        Ok(()) => {
            tracing::debug!(density = density.get(), "display density initialized");
            Ok(())
        }
        Err(_) => Err(AlreadyInitialized {
            // set() only fails when a value is present
            current: DISPLAY_DENSITY.get().copied().unwrap_or(density),
        }),
    }
}

/// The published display density, or `None` before initialization.
#[must_use]
pub fn display_density() -> Option<PixelDensity> {
    DISPLAY_DENSITY.get().copied()
}
