// File: crates/vernier-examples/src/bin/paths.rs
// Summary: Minimal example that prints polyline, smoothed, and area path data.

use vernier_core::{area_path, normalize, path_length, polyline_path, smooth_path};

fn main() {
    // Six weeks of weight samples
    let data = vec![82.0, 81.4, 81.6, 80.9, 80.2, 79.8];

    let points = normalize(&data, 320.0, 140.0).expect("normalize");
    println!("polyline: {}", polyline_path(&points));
    println!("smoothed: {}", smooth_path(&points));
    println!("area:     {}", area_path(&points, 140.0));
    println!("length:   {:.1}", path_length(&points));
}
