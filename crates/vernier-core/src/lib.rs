// File: crates/vernier-core/src/lib.rs
// Summary: Core library entry point; exports public API for selectors, dates, and chart paths.

pub mod types;
pub mod list;
pub mod wheel;
pub mod date;
pub mod chart;
pub mod smooth;
pub mod anim;
pub mod flow;

pub use types::CoreError;
pub use list::OrderedValueList;
pub use wheel::{WheelSelector, Phase};
pub use date::{CalendarDate, DateChange, DateWheel, days_in_month, is_leap_year};
pub use chart::{ChartPoint, normalize, polyline_path, smooth_path, area_path, path_length};
pub use smooth::moving_average;
pub use anim::{Reveal, ease_out_cubic};
pub use flow::{Flow, Screen};
