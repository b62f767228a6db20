// File: crates/vernier-core/src/anim.rs
// Summary: Reveal animation progress: eased scalar, dash offset, lead point index.

use std::time::Duration;

use crate::types::REVEAL_MS;

/// Ease-out cubic mapping on clamped `[0, 1]`.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Progressive stroke-reveal driven by scheduler ticks.
///
/// The owner advances elapsed time with `advance(dt)` and reads the eased
/// progress back; drawing code derives the dash offset and the lead dot
/// index from it. `cancel` freezes the animation so a torn-down host can
/// drop pending ticks without observing further motion.
pub struct Reveal {
    duration: Duration,
    elapsed: Duration,
    cancelled: bool,
}

impl Reveal {
    pub fn new(duration: Duration) -> Self {
        Self { duration, elapsed: Duration::ZERO, cancelled: false }
    }

    /// Advance by one tick and return the eased progress.
    /// Saturates at 1.0; a cancelled animation no longer advances.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        if !self.cancelled {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.progress()
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        ease_out_cubic(t)
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Stop advancing. Pending ticks become no-ops.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Dash offset that leaves `path_length * progress` of stroke visible
    /// when the dash pattern is sized to the full path length.
    pub fn dash_offset(&self, path_length: f32) -> f32 {
        path_length * (1.0 - self.progress())
    }

    /// Index of the lead dot: `floor(progress * (count - 1))`.
    pub fn lead_index(&self, point_count: usize) -> usize {
        if point_count < 2 {
            return 0;
        }
        let idx = (self.progress() * (point_count - 1) as f32).floor() as usize;
        idx.min(point_count - 1)
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new(Duration::from_millis(REVEAL_MS))
    }
}
