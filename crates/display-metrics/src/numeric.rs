//! Clamping, decimal rounding, and fixed-point formatting.
//!
//! All functions are total over their documented domains and never panic.
//! Rounding is half away from zero (the C `round` rule), applied consistently
//! here and in [`pixel_snap`][crate::pixel_snap].

use core::fmt;

/// Restrict `value` to the inclusive range `[lo, hi]`.
///
/// Unlike [`Ord::clamp`] this never panics: callers must supply `lo <= hi`,
/// but inverted bounds degenerate to one of the bounds instead of asserting.
/// A NaN `value` compares false against both bounds and is returned as-is.
///
/// # Examples
/// ```
/// # use display_metrics::clamp;
/// assert_eq!(clamp(15, 0, 10), 10);
/// assert_eq!(clamp(-3, 0, 10), 0);
/// assert_eq!(clamp(7, 0, 10), 7);
/// assert_eq!(clamp(0.74_f32, 0.0, 0.5), 0.5);
/// ```
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Round `value` to `decimals` fractional digits.
///
/// Computes `round(value * 10^decimals) / 10^decimals`, rounding half away
/// from zero. Note that the tie is taken on the binary representation:
/// `1.005` is stored just below the tie point, so rounding it to two decimals
/// yields `1.0`, while the exactly-representable `0.375` yields `0.38`.
///
/// # Examples
/// ```
/// # use display_metrics::round_to_decimals;
/// assert_eq!(round_to_decimals(3.14159, 2), 3.14);
/// assert_eq!(round_to_decimals(0.375, 2), 0.38);
/// assert_eq!(round_to_decimals(-0.375, 2), -0.38);
/// ```
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = libm::pow(10.0, f64::from(decimals));
    libm::round(value * factor) / factor
}

/// Write `value` as a fixed-point decimal with exactly `decimals` fractional
/// digits, zero-padded, with `.` as the separator regardless of locale.
///
/// This is the allocation-free form for `no_std` callers; pair it with a
/// `heapless::String` of suitable capacity.
///
/// # Errors
///
/// Forwards the writer's `fmt::Error`, e.g. when a fixed-capacity string
/// overflows.
///
/// # Examples
/// ```
/// use core::fmt::Write;
/// use display_metrics::write_to_decimals;
///
/// let mut s = heapless::String::<16>::new();
/// write_to_decimals(&mut s, 3.1, 2)?;
/// assert_eq!(s.as_str(), "3.10");
/// # Ok::<(), core::fmt::Error>(())
/// ```
pub fn write_to_decimals<W: fmt::Write>(out: &mut W, value: f64, decimals: usize) -> fmt::Result {
    write!(out, "{value:.decimals$}")
}

/// [`write_to_decimals`] into a fresh `String`.
///
/// # Examples
/// ```
/// # use display_metrics::format_to_decimals;
/// assert_eq!(format_to_decimals(3.1, 2), "3.10");
/// assert_eq!(format_to_decimals(3.0, 0), "3");
/// ```
#[cfg(feature = "std")]
#[must_use]
pub fn format_to_decimals(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
