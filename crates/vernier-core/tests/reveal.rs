// File: crates/vernier-core/tests/reveal.rs
// Purpose: Validate reveal animation progress, dash offset, and cancellation.

use std::time::Duration;

use vernier_core::{ease_out_cubic, Reveal};

const EPS: f32 = 1e-4;

#[test]
fn easing_endpoints_and_monotonicity() {
    assert!((ease_out_cubic(0.0) - 0.0).abs() < EPS);
    assert!((ease_out_cubic(1.0) - 1.0).abs() < EPS);
    // Clamped outside [0, 1].
    assert_eq!(ease_out_cubic(-2.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);

    let mut prev = 0.0;
    for i in 1..=100 {
        let e = ease_out_cubic(i as f32 / 100.0);
        assert!(e >= prev, "easing must not decrease");
        prev = e;
    }
}

#[test]
fn half_time_is_past_half_progress() {
    // Ease-out front-loads motion: 1 - 0.5^3 = 0.875.
    assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
}

#[test]
fn advance_saturates_at_one() {
    let mut r = Reveal::new(Duration::from_millis(1200));
    assert_eq!(r.progress(), 0.0);
    // 16 ms ticks, well past the duration.
    for _ in 0..200 {
        r.advance(Duration::from_millis(16));
    }
    assert!(r.is_done());
    assert!((r.progress() - 1.0).abs() < EPS);
    assert!((r.advance(Duration::from_millis(16)) - 1.0).abs() < EPS);
}

#[test]
fn dash_offset_shrinks_with_progress() {
    let mut r = Reveal::new(Duration::from_millis(1000));
    assert!((r.dash_offset(600.0) - 600.0).abs() < EPS);
    r.advance(Duration::from_millis(1000));
    assert!((r.dash_offset(600.0) - 0.0).abs() < EPS);
}

#[test]
fn lead_index_walks_the_points() {
    let mut r = Reveal::new(Duration::from_millis(1000));
    assert_eq!(r.lead_index(10), 0);
    r.advance(Duration::from_millis(1000));
    assert_eq!(r.lead_index(10), 9);
    // Degenerate point counts never index out of range.
    assert_eq!(r.lead_index(1), 0);
    assert_eq!(r.lead_index(0), 0);
}

#[test]
fn cancel_freezes_progress() {
    let mut r = Reveal::new(Duration::from_millis(1000));
    r.advance(Duration::from_millis(250));
    let frozen = r.progress();
    r.cancel();
    assert!(r.is_cancelled());
    // Pending ticks after teardown are no-ops.
    assert!((r.advance(Duration::from_millis(500)) - frozen).abs() < EPS);
    assert!(!r.is_done());
}

#[test]
fn zero_duration_is_immediately_done() {
    let r = Reveal::new(Duration::ZERO);
    assert!((r.progress() - 1.0).abs() < EPS);
    assert!(r.is_done());
}
