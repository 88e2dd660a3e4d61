//! Pixel-Density-Aware Numeric Utilities
//!
//! Small numeric helpers for GUI layout code: clamping, decimal rounding,
//! fixed-point formatting, and snapping logical coordinates onto the physical
//! pixel grid of a display.
//!
//! # Features
//!
//! - **no_std compatible** - Works on embedded systems
//! - **Validated density** - [`PixelDensity`] enforces the positive-scalar invariant
//! - **Serde support** - Optional serialization for TOML/JSON configs
//! - **Pixel snapping** - Align drawing to exact pixel boundaries to avoid blur
//!
//! # Example
//!
//! ```
//! use display_metrics::{clamp, pixel_snap, PixelDensity};
//!
//! let density = PixelDensity::try_new(2.0)?;
//!
//! // A logical coordinate that would land between physical pixels...
//! let x = 10.3_f32;
//! // ...snapped to the nearest physical pixel boundary.
//! assert_eq!(pixel_snap(x, density), 10.5);
//!
//! assert_eq!(clamp(15, 0, 10), 10);
//! # Ok::<(), display_metrics::InvalidDensity>(())
//! ```
//!
//! # Density injection
//!
//! Nothing in this crate queries the platform. The host reads the display
//! scale once at startup and either passes it down as a parameter or, on std
//! targets, publishes it process-wide via the `shared` module.

#![cfg_attr(not(feature = "std"), no_std)]

mod density;
mod numeric;
mod snap;
#[cfg(feature = "std")]
pub mod shared;

pub use density::{InvalidDensity, PixelDensity};
pub use numeric::{clamp, round_to_decimals, write_to_decimals};
#[cfg(feature = "std")]
pub use numeric::format_to_decimals;
pub use snap::{density_scaled_value, is_pixel_aligned, pixel_snap};
