//! # wd-time
//!
//! Dates, weekdays, holiday sets and the working-day engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Working-day classification, leave durations and next-working-day search.
pub mod calculator;

/// `WorkCalendar` — one organization's rules bundled together.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `DateRange` — an inclusive span of days.
pub mod date_range;

/// `HolidaySet` — dates excluded from working-day counts.
pub mod holiday_set;

/// `Month` — month of the year.
pub mod month;

/// `MonthView` — a date picker's month grid.
pub mod month_view;

/// `Settings` — engine settings decoded through the `config` crate.
pub mod settings;

/// `Weekday` and `WeekdaySet`.
pub mod weekday;

/// `WorkingDayConfig` — an organization's working weekdays.
pub mod working_day_config;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::{
    classify, duration, duration_with_policy, is_date_disabled, is_working_day,
    next_working_day, working_days, DayKind, DurationPolicy, DEFAULT_HORIZON_DAYS,
};
pub use calendar::{WorkCalendar, WorkCalendarBuilder};
pub use date::Date;
pub use date_range::DateRange;
pub use holiday_set::HolidaySet;
pub use month::Month;
pub use month_view::{DayCell, MonthView};
pub use settings::Settings;
pub use weekday::{Weekday, WeekdaySet};
pub use working_day_config::WorkingDayConfig;
