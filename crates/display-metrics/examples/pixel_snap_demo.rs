//! Pixel Snapping Example
//!
//! Demonstrates snapping logical coordinates onto the physical pixel grid at
//! common mobile display densities.
//!
//! Run with: cargo run --example pixel_snap_demo --features std

use display_metrics::{density_scaled_value, format_to_decimals, pixel_snap, PixelDensity};

fn print_density_info(density: PixelDensity) {
    println!("\n{}", "=".repeat(48));
    println!("Density: {density}");
    println!("{}", "=".repeat(48));

    println!("  1 physical pixel = {} logical units", density.to_logical(1.0));

    for logical in [10.1_f32, 10.3, 10.5, 10.7] {
        let snapped = pixel_snap(logical, density);
        println!(
            "  {} -> {} ({} physical px)",
            format_to_decimals(f64::from(logical), 2),
            format_to_decimals(f64::from(snapped), 2),
            snapped * density.get(),
        );
    }

    println!(
        "  hairline width: {} logical units",
        density_scaled_value(1.0, density)
    );
}

fn main() {
    println!("Pixel-Grid Snapping");
    println!("===================");

    print_density_info(PixelDensity::ONE);
    print_density_info(PixelDensity::new(2.0));
    print_density_info(PixelDensity::new(3.0));

    println!("\nTip: snap positions before drawing 1px separators to avoid blur.");
}
