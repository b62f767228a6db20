// File: crates/vernier-core/src/list.rs
// Summary: Immutable ordered value list with fixed item pitch.

use crate::types::{CoreError, ITEM_PITCH};

/// An immutable, strictly increasing sequence of selectable values.
///
/// The index is the sole addressing key during scroll tracking; `pitch` is
/// the fixed spacing between consecutive items in drawing units.
#[derive(Clone, Debug)]
pub struct OrderedValueList {
    values: Vec<f64>,
    pitch: f32,
}

impl OrderedValueList {
    /// Construct a list, enforcing invariants:
    /// non-empty, finite, strictly increasing, positive pitch.
    pub fn try_new(values: Vec<f64>, pitch: f32) -> Result<Self, CoreError> {
        if values.is_empty() {
            return Err(CoreError::EmptyList);
        }
        if !(pitch > 0.0) {
            return Err(CoreError::BadPitch(pitch));
        }
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(CoreError::NonFinite(i));
            }
            if i > 0 && values[i - 1] >= *v {
                return Err(CoreError::NotIncreasing(i));
            }
        }
        Ok(Self { values, pitch })
    }

    /// Convenience: inclusive integer range with the default pitch.
    pub fn from_range_inclusive(lo: i64, hi: i64) -> Result<Self, CoreError> {
        if lo > hi {
            return Err(CoreError::EmptyList);
        }
        let values = (lo..=hi).map(|v| v as f64).collect();
        Self::try_new(values, ITEM_PITCH)
    }

    /// Index of an exact member value, if present.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        self.values.iter().position(|v| *v == value)
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false by construction; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Snap a continuous offset to the nearest item index, clamped in range.
    pub fn snap(&self, offset: f32) -> usize {
        let idx = (offset / self.pitch).round();
        if idx <= 0.0 {
            return 0;
        }
        (idx as usize).min(self.values.len() - 1)
    }
}
