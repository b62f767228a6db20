// File: crates/vernier-core/src/smooth.rs
// Summary: Centered moving-average smoothing with clipped edge windows.

/// Replace each sample with the mean of the centered window
/// `[i - window, i + window]`, clipped at the series boundaries.
///
/// Edge windows are smaller and asymmetric; there is no padding or
/// wrapping. `window == 0` returns the input unchanged.
pub fn moving_average(data: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || data.is_empty() {
        return data.to_vec();
    }
    let n = data.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(n);
        let sum: f64 = data[lo..hi].iter().sum();
        out.push(sum / (hi - lo) as f64);
    }
    out
}
