//! Working-day calculations.
//!
//! Pure functions over [`WorkingDayConfig`], [`HolidaySet`] and
//! [`DateRange`]: no I/O and no shared state, so every result is
//! re-derivable from the arguments alone.
//!
//! Two notions of "non-working" coexist:
//! * holidays are excluded from leave durations;
//! * weekdays outside the organization's working set only disable dates in
//!   pickers, unless [`DurationPolicy::WorkingDaysOnly`] is selected.

use crate::date::Date;
use crate::date_range::DateRange;
use crate::holiday_set::HolidaySet;
use crate::working_day_config::WorkingDayConfig;
use serde::{Deserialize, Serialize};
use wd_core::errors::{Error, Result};

/// Default number of days [`next_working_day`] scans past its start date.
pub const DEFAULT_HORIZON_DAYS: u32 = 20;

/// Why a date is, or is not, a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// A working weekday that is not a holiday.
    Working,
    /// A holiday; takes precedence over the weekday.
    Holiday,
    /// A weekday the organization does not work.
    Weekend,
}

impl DayKind {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            DayKind::Working => "working day",
            DayKind::Holiday => "holiday",
            DayKind::Weekend => "weekend",
        }
    }
}

/// How the duration of a leave request is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPolicy {
    /// Inclusive calendar days minus holidays. Weekends count.
    #[default]
    CalendarDaysMinusHolidays,
    /// Working days only: holidays and non-working weekdays are excluded.
    WorkingDaysOnly,
}

/// Classify `date`. Holidays win over the weekday.
pub fn classify(date: Date, config: &WorkingDayConfig, holidays: &HolidaySet) -> DayKind {
    if holidays.contains(date) {
        DayKind::Holiday
    } else if config.is_working_weekday(date.weekday()) {
        DayKind::Working
    } else {
        DayKind::Weekend
    }
}

/// Return `true` if `date` is a working weekday and not a holiday.
pub fn is_working_day(date: Date, config: &WorkingDayConfig, holidays: &HolidaySet) -> bool {
    classify(date, config, holidays) == DayKind::Working
}

/// Leave duration: inclusive calendar days minus the holidays inside the
/// range.
///
/// Ranges are normalized on construction, so the result is never negative;
/// it is `0` when every day of the range is a holiday.
pub fn duration(range: &DateRange, holidays: &HolidaySet) -> u32 {
    range.calendar_days() - holidays.count_in(range)
}

/// Number of working days in the inclusive range.
pub fn working_days(range: &DateRange, config: &WorkingDayConfig, holidays: &HolidaySet) -> u32 {
    range
        .iter()
        .filter(|d| is_working_day(*d, config, holidays))
        .count() as u32
}

/// Duration counted according to `policy`.
pub fn duration_with_policy(
    range: &DateRange,
    config: &WorkingDayConfig,
    holidays: &HolidaySet,
    policy: DurationPolicy,
) -> u32 {
    match policy {
        DurationPolicy::CalendarDaysMinusHolidays => duration(range, holidays),
        DurationPolicy::WorkingDaysOnly => working_days(range, config, holidays),
    }
}

/// First working day in `[from, from + horizon_days]`.
///
/// # Errors
/// * [`Error::NoWorkingDayFound`] if every candidate is non-working.
/// * [`Error::Date`] if the scan runs past the last representable date.
pub fn next_working_day(
    from: Date,
    holidays: &HolidaySet,
    config: &WorkingDayConfig,
    horizon_days: u32,
) -> Result<Date> {
    let mut candidate = from;
    for offset in 0..=horizon_days {
        if offset > 0 {
            candidate = candidate.succ()?;
        }
        match classify(candidate, config, holidays) {
            DayKind::Working => {
                tracing::debug!(%from, found = %candidate, offset, "next working day");
                return Ok(candidate);
            }
            kind => tracing::trace!(date = %candidate, reason = kind.label(), "skipping"),
        }
    }
    tracing::warn!(%from, horizon_days, "no working day within search horizon");
    Err(Error::NoWorkingDayFound {
        from: from.to_string(),
        horizon_days,
    })
}

/// Date-picker predicate: `true` if `date` must not be selectable.
///
/// A date is disabled when it is before `range_floor` (inclusive floor), a
/// holiday, or on a non-working weekday.
pub fn is_date_disabled(
    date: Date,
    range_floor: Date,
    holidays: &HolidaySet,
    config: &WorkingDayConfig,
) -> bool {
    date < range_floor || !is_working_day(date, config, holidays)
}
