// File: crates/vernier-core/src/chart.rs
// Summary: Series normalization and SVG path data construction (polyline, smoothed, area).

use crate::types::CoreError;

/// Smoothing factor for cubic control points.
const SMOOTHING: f32 = 0.2;

/// A normalized point inside the chart box. Computed fresh on every data
/// change, never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f32,
    pub y: f32,
}

/// Map raw samples linearly into a `width` x `height` box.
///
/// `x = i / (len-1) * width`, `y = height - (v - min) / (max - min) * height`,
/// so the minimum lands on the bottom edge and the maximum on the top. A
/// flat series (`max == min`) uses denominator 1, placing every point at
/// `y = height` instead of propagating NaN. A single sample maps to `x = 0`.
///
/// An empty series is a precondition violation.
pub fn normalize(data: &[f64], width: f32, height: f32) -> Result<Vec<ChartPoint>, CoreError> {
    if data.is_empty() {
        return Err(CoreError::EmptySeries);
    }
    if !(width > 0.0) || !(height > 0.0) {
        return Err(CoreError::BadBox { width, height });
    }
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };
    let xstep = if data.len() > 1 { width / (data.len() - 1) as f32 } else { 0.0 };

    let points = data
        .iter()
        .enumerate()
        .map(|(i, &v)| ChartPoint {
            x: i as f32 * xstep,
            y: height - ((v - min) / span) as f32 * height,
        })
        .collect();
    Ok(points)
}

/// Straight segments between consecutive points: `M x y L x y ...`.
/// A single point yields the degenerate `M x y`.
pub fn polyline_path(points: &[ChartPoint]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        push_cmd(&mut d, op, p.x, p.y);
    }
    d
}

/// Polyline closed down to the baseline for gradient fill.
/// The final two vertices are always `(last.x, height)` and `(0, height)`.
pub fn area_path(points: &[ChartPoint], height: f32) -> String {
    let mut d = polyline_path(points);
    if let Some(last) = points.last() {
        push_cmd(&mut d, 'L', last.x, height);
        push_cmd(&mut d, 'L', 0.0, height);
        d.push_str(" Z");
    }
    d
}

/// Cubic interpolation between consecutive points.
///
/// Control points are derived from the angle and distance between each
/// point's neighbors, scaled by the smoothing factor; a missing neighbor at
/// either endpoint is substituted by the point itself, not extrapolated.
pub fn smooth_path(points: &[ChartPoint]) -> String {
    if points.len() < 2 {
        return polyline_path(points);
    }
    let mut d = String::new();
    push_cmd(&mut d, 'M', points[0].x, points[0].y);
    for i in 1..points.len() {
        let prev2 = if i >= 2 { Some(points[i - 2]) } else { None };
        let cps = control_point(points[i - 1], prev2, Some(points[i]), false);
        let cpe = control_point(points[i], Some(points[i - 1]), points.get(i + 1).copied(), true);
        d.push_str(&format!(
            " C {} {}, {} {}, {} {}",
            fmt(cps.x),
            fmt(cps.y),
            fmt(cpe.x),
            fmt(cpe.y),
            fmt(points[i].x),
            fmt(points[i].y)
        ));
    }
    d
}

/// Total polyline length, for sizing the reveal dash pattern.
pub fn path_length(points: &[ChartPoint]) -> f32 {
    points
        .windows(2)
        .map(|w| {
            let dx = w[1].x - w[0].x;
            let dy = w[1].y - w[0].y;
            (dx * dx + dy * dy).sqrt()
        })
        .sum()
}

fn control_point(
    current: ChartPoint,
    previous: Option<ChartPoint>,
    next: Option<ChartPoint>,
    reverse: bool,
) -> ChartPoint {
    let p = previous.unwrap_or(current);
    let n = next.unwrap_or(current);
    let dx = n.x - p.x;
    let dy = n.y - p.y;
    let length = (dx * dx + dy * dy).sqrt() * SMOOTHING;
    let angle = dy.atan2(dx) + if reverse { std::f32::consts::PI } else { 0.0 };
    ChartPoint {
        x: current.x + angle.cos() * length,
        y: current.y + angle.sin() * length,
    }
}

fn push_cmd(d: &mut String, op: char, x: f32, y: f32) {
    if !d.is_empty() {
        d.push(' ');
    }
    d.push(op);
    d.push(' ');
    d.push_str(&fmt(x));
    d.push(' ');
    d.push_str(&fmt(y));
}

/// Trim trailing zeros so path data stays compact and stable.
fn fmt(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
