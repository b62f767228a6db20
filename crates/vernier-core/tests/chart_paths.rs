// File: crates/vernier-core/tests/chart_paths.rs
// Purpose: Validate series normalization, smoothing, and path construction.

use vernier_core::{
    area_path, moving_average, normalize, path_length, polyline_path, smooth_path, ChartPoint,
    CoreError,
};

const EPS: f32 = 1e-4;

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < EPS, "{a} != {b}");
}

#[test]
fn normalize_maps_min_to_bottom_and_max_to_top() {
    let pts = normalize(&[10.0, 20.0, 10.0], 100.0, 50.0).expect("normalize");
    assert_eq!(pts.len(), 3);
    assert_close(pts[0].x, 0.0);
    assert_close(pts[0].y, 50.0);
    assert_close(pts[1].x, 50.0);
    assert_close(pts[1].y, 0.0);
    assert_close(pts[2].x, 100.0);
    assert_close(pts[2].y, 50.0);
}

#[test]
fn flat_series_never_produces_nan() {
    let pts = normalize(&[5.0, 5.0, 5.0], 100.0, 50.0).expect("normalize");
    for p in &pts {
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_close(p.y, 50.0);
    }
}

#[test]
fn empty_series_is_rejected() {
    assert_eq!(normalize(&[], 100.0, 50.0).unwrap_err(), CoreError::EmptySeries);
}

#[test]
fn bad_box_is_rejected() {
    assert!(matches!(
        normalize(&[1.0, 2.0], 0.0, 50.0),
        Err(CoreError::BadBox { .. })
    ));
}

#[test]
fn single_sample_yields_degenerate_path() {
    let pts = normalize(&[42.0], 100.0, 50.0).expect("normalize");
    assert_eq!(pts.len(), 1);
    assert_close(pts[0].x, 0.0);
    // Flat fallback: single sample sits on the baseline.
    assert_close(pts[0].y, 50.0);
    assert_eq!(polyline_path(&pts), "M 0 50");
    assert_eq!(smooth_path(&pts), "M 0 50");
    assert_close(path_length(&pts), 0.0);
}

#[test]
fn polyline_path_data() {
    let pts = vec![
        ChartPoint { x: 0.0, y: 50.0 },
        ChartPoint { x: 50.0, y: 0.0 },
        ChartPoint { x: 100.0, y: 50.0 },
    ];
    assert_eq!(polyline_path(&pts), "M 0 50 L 50 0 L 100 50");
}

#[test]
fn area_path_closes_to_baseline() {
    let pts = normalize(&[3.0, 7.0, 5.0, 9.0], 90.0, 40.0).expect("normalize");
    let d = area_path(&pts, 40.0);
    // Regardless of input, the region drops to the baseline at the last x,
    // runs back to x = 0, and closes.
    assert!(d.ends_with("L 90 40 L 0 40 Z"), "got: {d}");
}

#[test]
fn smooth_path_interpolates_through_every_point() {
    let pts = normalize(&[1.0, 4.0, 2.0, 6.0, 3.0], 200.0, 100.0).expect("normalize");
    let d = smooth_path(&pts);
    assert!(d.starts_with("M 0 "));
    // One cubic segment per consecutive pair.
    assert_eq!(d.matches(" C ").count(), pts.len() - 1);
    // Each segment ends exactly on its target point.
    for p in pts.iter().skip(1) {
        let needle = format!(", {} ", trim(p.x));
        assert!(d.contains(&needle), "missing anchor x {} in {d}", p.x);
    }
}

fn trim(v: f32) -> String {
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[test]
fn smooth_path_endpoint_controls_substitute_missing_neighbors() {
    // Two points: each endpoint substitutes itself for its missing
    // neighbor, so both controls sit on the chord at 0.2 of its length.
    let pts = vec![ChartPoint { x: 0.0, y: 10.0 }, ChartPoint { x: 10.0, y: 0.0 }];
    let d = smooth_path(&pts);
    assert_eq!(d, "M 0 10 C 2 8, 8 2, 10 0");
}

#[test]
fn path_length_sums_segments() {
    let pts = vec![
        ChartPoint { x: 0.0, y: 0.0 },
        ChartPoint { x: 3.0, y: 4.0 },
        ChartPoint { x: 3.0, y: 10.0 },
    ];
    assert_close(path_length(&pts), 11.0);
}

#[test]
fn moving_average_clips_edge_windows() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let out = moving_average(&data, 1);
    // Edge windows are smaller and asymmetric: [1,2], [1,2,3], ... [4,5].
    assert_eq!(out, vec![1.5, 2.0, 3.0, 4.0, 4.5]);
}

#[test]
fn moving_average_window_zero_is_identity() {
    let data = [2.0, 8.0, 4.0];
    assert_eq!(moving_average(&data, 0), data.to_vec());
}

#[test]
fn moving_average_window_larger_than_series_averages_everything() {
    let data = [3.0, 6.0, 9.0];
    let out = moving_average(&data, 10);
    for v in out {
        assert!((v - 6.0).abs() < 1e-12);
    }
}
