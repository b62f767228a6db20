// File: crates/vernier-core/src/types.rs
// Summary: Shared constants and the core error type.

use thiserror::Error;

/// Vertical spacing between consecutive wheel items, in drawing units.
pub const ITEM_PITCH: f32 = 44.0;
/// Number of items visible around the centered one.
pub const VISIBLE_ITEMS: usize = 3;

/// Default chart box width in drawing units.
pub const CHART_WIDTH: f32 = 320.0;
/// Default chart box height in drawing units.
pub const CHART_HEIGHT: f32 = 140.0;
/// Default reveal animation duration in milliseconds.
pub const REVEAL_MS: u64 = 1200;

/// Errors raised on precondition violations in the core.
///
/// Recoverable anomalies (absent initial value, day past end of month) are
/// corrected silently and never surface here.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("value list must not be empty")]
    EmptyList,
    #[error("value list must be strictly increasing at index {0}")]
    NotIncreasing(usize),
    #[error("value list contains a non-finite value at index {0}")]
    NonFinite(usize),
    #[error("item pitch must be positive, got {0}")]
    BadPitch(f32),
    #[error("series must contain at least one sample")]
    EmptySeries,
    #[error("chart box must have positive dimensions, got {width}x{height}")]
    BadBox { width: f32, height: f32 },
}
