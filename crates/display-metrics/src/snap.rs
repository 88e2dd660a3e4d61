//! Pixel-Grid Snapping
//!
//! Logical coordinates rarely land exactly on a physical pixel once a display
//! scale factor is involved; drawing at such a coordinate gets resampled and
//! blurs. These helpers map logical values onto the physical pixel grid.

use crate::density::PixelDensity;

/// Snap a logical coordinate to the nearest physical pixel boundary.
///
/// Computes `round(logical * density) / density`, rounding half away from
/// zero. Idempotent: snapping an already-snapped value returns it unchanged.
///
/// A non-positive or non-finite density (only constructible through
/// [`PixelDensity::new`]) propagates infinity/NaN per IEEE-754; it never
/// panics.
///
/// # Examples
/// ```
/// # use display_metrics::{pixel_snap, PixelDensity};
/// let d2 = PixelDensity::new(2.0);
/// assert_eq!(pixel_snap(10.3, d2), 10.5);
/// assert_eq!(pixel_snap(10.5, d2), 10.5);
/// assert_eq!(pixel_snap(-0.2, d2), 0.0);
/// ```
#[must_use]
pub fn pixel_snap(logical: f32, density: PixelDensity) -> f32 {
    libm::roundf(logical * density.get()) / density.get()
}

/// Convert a device-scaled quantity back to logical units.
///
/// Computes `value / density`. The inverse direction (logical to device) is
/// plain multiplication by [`PixelDensity::get`].
///
/// # Examples
/// ```
/// # use display_metrics::{density_scaled_value, PixelDensity};
/// let d2 = PixelDensity::new(2.0);
/// // A 1-pixel hairline on a 2x panel is half a logical unit wide.
/// assert_eq!(density_scaled_value(1.0, d2), 0.5);
/// ```
#[must_use]
pub fn density_scaled_value(value: f32, density: PixelDensity) -> f32 {
    value / density.get()
}

/// Check whether a logical value already lies on the physical pixel grid.
///
/// # Examples
/// ```
/// # use display_metrics::{is_pixel_aligned, PixelDensity};
/// let d2 = PixelDensity::new(2.0);
/// assert!(is_pixel_aligned(10.5, d2));
/// assert!(!is_pixel_aligned(10.3, d2));
/// ```
#[must_use]
pub fn is_pixel_aligned(logical: f32, density: PixelDensity) -> bool {
    pixel_snap(logical, density) == logical
}
