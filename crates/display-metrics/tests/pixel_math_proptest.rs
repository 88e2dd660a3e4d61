//! Property-based tests for pixel-grid math.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

use display_metrics::{
    clamp, density_scaled_value, is_pixel_aligned, pixel_snap, round_to_decimals,
    write_to_decimals, PixelDensity,
};

proptest::proptest! {
    /// clamp never leaves [lo, hi] for any ordered bounds.
    #[test]
    fn clamp_stays_within_bounds(v in -1e9f64..=1e9f64, a in -1e9f64..=1e9f64, b in -1e9f64..=1e9f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let clamped = clamp(v, lo, hi);
        assert!(lo <= clamped && clamped <= hi,
            "clamp({}, {}, {}) = {} escaped the range", v, lo, hi, clamped);
    }

    /// clamp is the identity for values already inside the range.
    #[test]
    fn clamp_is_identity_inside_range(a in -1e9f64..=1e9f64, b in -1e9f64..=1e9f64, t in 0.0f64..=1.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        // Interpolation round-off can overshoot the endpoints; pin v inside.
        let v = f64::min(f64::max(lo + (hi - lo) * t, lo), hi);
        assert_eq!(clamp(v, lo, hi), v);
    }

    /// Snapping an already-snapped coordinate changes nothing.
    #[test]
    fn pixel_snap_is_idempotent(x in -1e5f32..=1e5f32, d in 0.5f32..=4.0f32) {
        let density = PixelDensity::new(d);
        let snapped = pixel_snap(x, density);
        assert_eq!(pixel_snap(snapped, density), snapped,
            "pixel_snap not idempotent for x={}, d={}", x, d);
        assert!(is_pixel_aligned(snapped, density));
    }

    /// Scaling a snapped coordinate to device pixels and back recovers a
    /// grid-aligned value (round-trip law, up to a few ulps of the division).
    #[test]
    fn snap_round_trips_through_device_units(x in -1e5f32..=1e5f32, d in 0.5f32..=4.0f32) {
        let density = PixelDensity::new(d);
        let snapped = pixel_snap(x, density);
        let recovered = density_scaled_value(snapped * density.get(), density);
        let tolerance = snapped.abs().max(1.0) * f32::EPSILON * 4.0;
        assert!((recovered - snapped).abs() <= tolerance,
            "round trip drifted: x={}, d={}, snapped={}, recovered={}", x, d, snapped, recovered);
    }

    /// Rounding moves a value by at most half a step of the last kept digit.
    #[test]
    fn round_to_decimals_bounds_the_error(v in -1e6f64..=1e6f64, decimals in 0u32..=6) {
        let rounded = round_to_decimals(v, decimals);
        let step = 1.0 / 10f64.powi(i32::try_from(decimals).unwrap_or(0));
        // Slack for the scale-divide round-off at the range extremes.
        assert!((rounded - v).abs() <= step / 2.0 + v.abs() * f64::EPSILON * 4.0,
            "round_to_decimals({}, {}) = {} moved too far", v, decimals, rounded);
    }

    /// The formatted string always carries exactly the requested digits.
    #[test]
    fn formatting_pads_to_exact_digit_count(v in -1e6f64..=1e6f64, decimals in 0usize..=6) {
        let mut s = heapless::String::<32>::new();
        assert!(write_to_decimals(&mut s, v, decimals).is_ok());
        match s.as_str().split_once('.') {
            Some((_, frac)) => assert_eq!(frac.len(), decimals, "got {}", s),
            None => assert_eq!(decimals, 0, "got {}", s),
        }
    }
}
