// File: crates/vernier-core/src/wheel.rs
// Summary: Wheel value selector: drag tracking, snapping, and single-commit settle.

use crate::list::OrderedValueList;

/// Motion phase of a selector.
///
/// Transitions: Settled -> Dragging on `begin_drag`, Dragging -> Settled on
/// `end_drag`. The initial phase is Settled with the initial index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Settled,
    Dragging,
}

type ChangeFn = Box<dyn FnMut(f64)>;
type FormatFn = Box<dyn Fn(f64) -> String>;

/// Maps continuous scroll offsets onto a discrete value from an
/// [`OrderedValueList`], committing exactly once per settle event.
///
/// During continuous motion (`drag_to`) the selected index is tentative and
/// the change callback never fires; `end_drag` snaps to the nearest item,
/// commits it, and fires the callback once. A detached selector commits
/// nothing.
pub struct WheelSelector {
    values: OrderedValueList,
    selected: usize,
    committed: f64,
    phase: Phase,
    alive: bool,
    unit: String,
    on_change: Option<ChangeFn>,
    format: Option<FormatFn>,
}

impl WheelSelector {
    /// Create a selector settled on `initial_value`.
    ///
    /// If `initial_value` is not a member of the list, selection silently
    /// falls back to index 0. No callback fires here.
    pub fn new(values: OrderedValueList, initial_value: f64) -> Self {
        let selected = values.index_of(initial_value).unwrap_or(0);
        // Index is in range by list construction.
        let committed = values.get(selected).unwrap_or_default();
        Self {
            values,
            selected,
            committed,
            phase: Phase::Settled,
            alive: true,
            unit: String::new(),
            on_change: None,
            format: None,
        }
    }

    /// Unit label used by the default display formatting.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Custom display formatting (e.g. zero-padding to two digits).
    pub fn with_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.format = Some(Box::new(f));
        self
    }

    /// Register the commit callback. Fired exactly once per settle event.
    pub fn on_value_change(&mut self, f: impl FnMut(f64) + 'static) {
        self.on_change = Some(Box::new(f));
    }

    /// Offset that centers the current selection on first layout.
    /// Positioning the strip here is a presentation concern and must not be
    /// reported as a value change.
    pub fn initial_offset(&self) -> f32 {
        self.selected as f32 * self.values.pitch()
    }

    /// Transition Settled -> Dragging on touch/drag start.
    pub fn begin_drag(&mut self) {
        self.phase = Phase::Dragging;
    }

    /// Track continuous motion. Updates the tentative index only.
    pub fn drag_to(&mut self, offset: f32) {
        self.phase = Phase::Dragging;
        self.selected = self.values.snap(offset);
    }

    /// Settle at `offset`: snap, commit, and fire the callback once.
    ///
    /// Returns the committed value, or `None` when the selector has been
    /// detached (no commit may happen after teardown).
    pub fn end_drag(&mut self, offset: f32) -> Option<f64> {
        self.phase = Phase::Settled;
        if !self.alive {
            return None;
        }
        self.selected = self.values.snap(offset);
        let value = self.values.get(self.selected)?;
        self.committed = value;
        if let Some(cb) = self.on_change.as_mut() {
            cb(value);
        }
        Some(value)
    }

    /// Signed integer distance of `index` from the centered index, for
    /// renderer opacity/scale falloff.
    pub fn distance_from_center(&self, index: usize) -> i32 {
        index as i32 - self.selected as i32
    }

    /// Display text for a value: injected formatter, else `"<value> <unit>"`.
    pub fn display_value(&self, value: f64) -> String {
        if let Some(f) = self.format.as_ref() {
            return f(value);
        }
        if self.unit.is_empty() {
            format!("{value}")
        } else {
            format!("{value} {}", self.unit)
        }
    }

    /// Suppress all further commits. Used on teardown mid-drag.
    pub fn detach(&mut self) {
        self.alive = false;
        self.on_change = None;
    }

    pub fn is_detached(&self) -> bool {
        !self.alive
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn committed_value(&self) -> f64 {
        self.committed
    }

    pub fn values(&self) -> &OrderedValueList {
        &self.values
    }

    /// Replace the value list, keeping the committed value when it survives
    /// and clamping the selection into the new range otherwise.
    /// Never fires the callback; callers decide how to report the change.
    pub(crate) fn replace_values(&mut self, values: OrderedValueList) {
        self.selected = match values.index_of(self.committed) {
            Some(i) => i,
            None => self.selected.min(values.len() - 1),
        };
        // Selection is in range, so the lookup cannot fail.
        self.committed = values.get(self.selected).unwrap_or_default();
        self.values = values;
    }
}
