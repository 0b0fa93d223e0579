//! `WorkCalendar` — an organization's working-day rules bundled together.
//!
//! The free functions in [`calculator`](crate::calculator) take every input
//! explicitly.  A form controller usually holds one organization's
//! configuration and holiday list for a whole session; `WorkCalendar` is
//! that bundle, passed around as a plain value instead of living in ambient
//! global state.

use crate::calculator::{self, DayKind, DurationPolicy, DEFAULT_HORIZON_DAYS};
use crate::date::Date;
use crate::date_range::DateRange;
use crate::holiday_set::HolidaySet;
use crate::working_day_config::WorkingDayConfig;
use std::sync::Arc;
use wd_core::errors::Result;

/// Working-day rules of one organization.
///
/// Cloning is cheap: the holiday set is shared.
#[derive(Debug, Clone)]
pub struct WorkCalendar {
    config: WorkingDayConfig,
    holidays: Arc<HolidaySet>,
    horizon_days: u32,
    policy: DurationPolicy,
}

impl WorkCalendar {
    /// Calendar with no holidays, the default horizon and the default
    /// duration policy.
    pub fn new(config: WorkingDayConfig) -> Self {
        Self::builder(config).build()
    }

    /// Begin building a calendar.
    pub fn builder(config: WorkingDayConfig) -> WorkCalendarBuilder {
        WorkCalendarBuilder {
            config,
            holidays: HolidaySet::new(),
            horizon_days: DEFAULT_HORIZON_DAYS,
            policy: DurationPolicy::default(),
        }
    }

    /// The working-day configuration.
    pub fn config(&self) -> &WorkingDayConfig {
        &self.config
    }

    /// The holiday set.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Days scanned by [`next_working_day`](Self::next_working_day).
    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Policy applied by [`request_duration`](Self::request_duration).
    pub fn duration_policy(&self) -> DurationPolicy {
        self.policy
    }

    /// A copy of this calendar with a different holiday set, e.g. after the
    /// picker moves into a year whose holidays were fetched separately.
    pub fn with_holidays(&self, holidays: HolidaySet) -> Self {
        Self {
            holidays: Arc::new(holidays),
            ..self.clone()
        }
    }

    /// See [`calculator::classify`].
    pub fn classify(&self, date: Date) -> DayKind {
        calculator::classify(date, &self.config, &self.holidays)
    }

    /// See [`calculator::is_working_day`].
    pub fn is_working_day(&self, date: Date) -> bool {
        calculator::is_working_day(date, &self.config, &self.holidays)
    }

    /// See [`calculator::duration`].
    pub fn duration(&self, range: &DateRange) -> u32 {
        calculator::duration(range, &self.holidays)
    }

    /// See [`calculator::working_days`].
    pub fn working_days(&self, range: &DateRange) -> u32 {
        calculator::working_days(range, &self.config, &self.holidays)
    }

    /// The duration submitted with a leave request, counted with this
    /// calendar's [`DurationPolicy`].
    pub fn request_duration(&self, start: Date, end: Date) -> u32 {
        let range = DateRange::new(start, end);
        calculator::duration_with_policy(&range, &self.config, &self.holidays, self.policy)
    }

    /// See [`calculator::next_working_day`]; scans this calendar's horizon.
    pub fn next_working_day(&self, from: Date) -> Result<Date> {
        calculator::next_working_day(from, &self.holidays, &self.config, self.horizon_days)
    }

    /// See [`calculator::is_date_disabled`].
    pub fn is_date_disabled(&self, date: Date, range_floor: Date) -> bool {
        calculator::is_date_disabled(date, range_floor, &self.holidays, &self.config)
    }

    /// Default selection for a start-date picker whose earliest allowed
    /// date is `floor` (usually today).
    pub fn first_selectable_day(&self, floor: Date) -> Result<Date> {
        self.next_working_day(floor)
    }

    /// Floor for the end-date picker once `start` is chosen: the end may
    /// not precede the start.
    pub fn end_date_floor(&self, start: Date) -> Date {
        start
    }
}

/// Builder for [`WorkCalendar`].
#[derive(Debug)]
pub struct WorkCalendarBuilder {
    config: WorkingDayConfig,
    holidays: HolidaySet,
    horizon_days: u32,
    policy: DurationPolicy,
}

impl WorkCalendarBuilder {
    /// Set the holiday set.
    pub fn holidays(mut self, holidays: HolidaySet) -> Self {
        self.holidays = holidays;
        self
    }

    /// Set the search horizon of `next_working_day`.
    pub fn horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Set the duration policy.
    pub fn duration_policy(mut self, policy: DurationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Finish building.
    pub fn build(self) -> WorkCalendar {
        WorkCalendar {
            config: self.config,
            holidays: Arc::new(self.holidays),
            horizon_days: self.horizon_days,
            policy: self.policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn calendar() -> WorkCalendar {
        WorkCalendar::builder(WorkingDayConfig::default())
            .holidays([date(2024, 1, 1)].into_iter().collect())
            .build()
    }

    #[test]
    fn defaults() {
        let cal = WorkCalendar::new(WorkingDayConfig::default());
        assert_eq!(cal.horizon_days(), DEFAULT_HORIZON_DAYS);
        assert_eq!(cal.duration_policy(), DurationPolicy::CalendarDaysMinusHolidays);
        assert!(cal.holidays().is_empty());
    }

    #[test]
    fn request_duration_normalizes_range() {
        let cal = calendar();
        assert_eq!(cal.request_duration(date(2023, 12, 29), date(2024, 1, 2)), 4);
        // end before start collapses to a single day
        assert_eq!(cal.request_duration(date(2024, 1, 2), date(2023, 12, 29)), 1);
    }

    #[test]
    fn request_duration_follows_policy() {
        let cal = WorkCalendar::builder(WorkingDayConfig::default())
            .holidays([date(2024, 1, 1)].into_iter().collect())
            .duration_policy(DurationPolicy::WorkingDaysOnly)
            .build();
        assert_eq!(cal.request_duration(date(2023, 12, 29), date(2024, 1, 2)), 2);
    }

    #[test]
    fn first_selectable_day_skips_holiday() {
        let cal = calendar();
        assert_eq!(cal.first_selectable_day(date(2024, 1, 1)).unwrap(), date(2024, 1, 2));
        // Saturday floor lands on Monday
        assert_eq!(cal.first_selectable_day(date(2024, 1, 6)).unwrap(), date(2024, 1, 8));
    }

    #[test]
    fn end_picker_disables_days_before_start() {
        let cal = calendar();
        let start = date(2024, 1, 3);
        let floor = cal.end_date_floor(start);
        assert!(cal.is_date_disabled(date(2024, 1, 2), floor));
        assert!(!cal.is_date_disabled(start, floor));
        assert!(!cal.is_date_disabled(date(2024, 1, 4), floor));
    }

    #[test]
    fn with_holidays_replaces_set_only() {
        let cal = calendar().with_holidays(HolidaySet::new());
        assert!(cal.is_working_day(date(2024, 1, 1)));
        assert_eq!(cal.horizon_days(), DEFAULT_HORIZON_DAYS);
    }

    #[test]
    fn zero_horizon_checks_only_start() {
        let cal = WorkCalendar::builder(WorkingDayConfig::default())
            .horizon_days(0)
            .build();
        assert!(cal.next_working_day(date(2024, 1, 6)).unwrap_err().is_no_working_day());
        assert_eq!(cal.next_working_day(date(2024, 1, 5)).unwrap(), date(2024, 1, 5));
    }
}
