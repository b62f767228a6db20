// File: crates/vernier-core/src/date.rs
// Summary: Calendar arithmetic and the day/month/year wheel composite.

use chrono::Datelike;

use crate::list::OrderedValueList;
use crate::types::CoreError;
use crate::wheel::WheelSelector;

/// Gregorian leap-year rule: divisible by 4 and not by 100, unless by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
/// Months outside 1-12 are treated as having 31 days; the composite never
/// produces them.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// A calendar date as selected by the composite.
/// Invariant (maintained by [`DateWheel`]): `day <= days_in_month(month, year)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl CalendarDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.month, self.year)
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self { day: 1, month: 1, year: 2000 }
    }
}

/// Payload of a composite date callback. The triple is always consistent;
/// `clamped` marks settles where the day was forced down by a shrinking
/// month/year range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateChange {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub clamped: bool,
}

/// Which of the three sub-wheels an interaction targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateField {
    Day,
    Month,
    Year,
}

type DateChangeFn = Box<dyn FnMut(DateChange)>;

/// Three wheel selectors composed into a single valid calendar date.
///
/// Whenever month or year settles, the day range is rebuilt from
/// `days_in_month` and the selected day is clamped downward (never raised)
/// when it exceeds the new maximum. Each settle fires the callback exactly
/// once with the full, currently consistent triple.
pub struct DateWheel {
    day: WheelSelector,
    month: WheelSelector,
    year: WheelSelector,
    alive: bool,
    on_change: Option<DateChangeFn>,
}

impl DateWheel {
    /// Composite over `[current_year - 100, current_year]`, settled on
    /// `initial` (defaults to 1.1.2000 via [`CalendarDate::default`]).
    pub fn new(initial: CalendarDate) -> Result<Self, CoreError> {
        Self::with_year_bound(initial, chrono::Local::now().year())
    }

    /// Same as [`DateWheel::new`] with an explicit upper year bound, so the
    /// year range is deterministic under test.
    pub fn with_year_bound(initial: CalendarDate, max_year: i32) -> Result<Self, CoreError> {
        let max_days = days_in_month(initial.month, initial.year);
        let init_day = initial.day.clamp(1, max_days);

        let day_list = OrderedValueList::from_range_inclusive(1, max_days as i64)?;
        let month_list = OrderedValueList::from_range_inclusive(1, 12)?;
        let year_list =
            OrderedValueList::from_range_inclusive((max_year - 100) as i64, max_year as i64)?;

        let day = WheelSelector::new(day_list, init_day as f64)
            .with_formatter(|v| format!("{:02}", v as i64));
        let month = WheelSelector::new(month_list, initial.month as f64)
            .with_formatter(|v| format!("{:02}", v as i64));
        let year = WheelSelector::new(year_list, initial.year as f64);

        Ok(Self { day, month, year, alive: true, on_change: None })
    }

    /// Register the composite callback; fired once per settled change to any
    /// of the three sub-wheels.
    pub fn on_date_change(&mut self, f: impl FnMut(DateChange) + 'static) {
        self.on_change = Some(Box::new(f));
    }

    /// Current consistent date.
    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            day: self.day.committed_value() as u32,
            month: self.month.committed_value() as u32,
            year: self.year.committed_value() as i32,
        }
    }

    pub fn begin_drag(&mut self, field: DateField) {
        self.wheel_mut(field).begin_drag();
    }

    /// Continuous motion on one sub-wheel; no commits, no callback.
    pub fn drag_to(&mut self, field: DateField, offset: f32) {
        self.wheel_mut(field).drag_to(offset);
    }

    /// Settle one sub-wheel. Rebuilds the day range after month/year
    /// changes, clamps the day if needed, and fires the callback once with
    /// the corrected triple. Returns the change, or `None` after detach.
    pub fn settle(&mut self, field: DateField, offset: f32) -> Option<DateChange> {
        if !self.alive {
            return None;
        }
        self.wheel_mut(field).end_drag(offset)?;

        let mut clamped = false;
        if matches!(field, DateField::Month | DateField::Year) {
            clamped = self.rebuild_day_range();
        }

        let d = self.date();
        let change = DateChange { day: d.day, month: d.month, year: d.year, clamped };
        if let Some(cb) = self.on_change.as_mut() {
            cb(change);
        }
        Some(change)
    }

    /// Suppress all further callbacks, composite and children alike.
    pub fn detach(&mut self) {
        self.alive = false;
        self.on_change = None;
        self.day.detach();
        self.month.detach();
        self.year.detach();
    }

    /// Read access for rendering (falloff distances, display text).
    pub fn wheel(&self, field: DateField) -> &WheelSelector {
        match field {
            DateField::Day => &self.day,
            DateField::Month => &self.month,
            DateField::Year => &self.year,
        }
    }

    fn wheel_mut(&mut self, field: DateField) -> &mut WheelSelector {
        match field {
            DateField::Day => &mut self.day,
            DateField::Month => &mut self.month,
            DateField::Year => &mut self.year,
        }
    }

    /// Regenerate day options for the current month/year.
    /// Returns true when the selected day had to be clamped down.
    fn rebuild_day_range(&mut self) -> bool {
        let month = self.month.committed_value() as u32;
        let year = self.year.committed_value() as i32;
        let max_days = days_in_month(month, year);
        if self.day.values().len() == max_days as usize {
            return false;
        }
        let clamped = self.day.committed_value() > max_days as f64;
        // 1..=28 at minimum, so construction cannot fail.
        if let Ok(list) = OrderedValueList::from_range_inclusive(1, max_days as i64) {
            self.day.replace_values(list);
        }
        clamped
    }
}
