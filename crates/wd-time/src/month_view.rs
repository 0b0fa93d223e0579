//! `MonthView` — the grid a date picker renders for one month.
//!
//! Columns follow the organization's `week_start_day`; every cell carries
//! its [`DayKind`] and whether the picker must disable it.

use crate::calculator::DayKind;
use crate::calendar::WorkCalendar;
use crate::date::Date;
use crate::date_range::DateRange;
use crate::month::Month;
use crate::weekday::Weekday;
use wd_core::errors::Result;

/// One day of a [`MonthView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The date shown in the cell.
    pub date: Date,
    /// Working day, holiday or weekend.
    pub kind: DayKind,
    /// Whether the picker must refuse this date.
    pub disabled: bool,
}

/// A month laid out in weeks of seven slots; `None` pads the first and
/// last week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    year: u16,
    month: Month,
    header: [Weekday; 7],
    weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthView {
    /// Lay out `month` of `year` for `calendar`, disabling dates before
    /// `floor`.
    ///
    /// # Errors
    /// Returns a date error for a month outside 1–12 or a year outside the
    /// supported range.
    pub fn build(year: u16, month: u8, calendar: &WorkCalendar, floor: Date) -> Result<Self> {
        let month = Month::try_from(month)?;
        let first = Date::from_ymd(year, month.number(), 1)?;
        let days = DateRange::new(first, first.end_of_month());
        let config = calendar.config();

        let mut weeks = Vec::with_capacity(6);
        let mut week: [Option<DayCell>; 7] = [None; 7];
        for date in days.iter() {
            let column = config.column_of(date.weekday());
            if column == 0 && week.iter().any(Option::is_some) {
                weeks.push(week);
                week = [None; 7];
            }
            week[column] = Some(DayCell {
                date,
                kind: calendar.classify(date),
                disabled: calendar.is_date_disabled(date, floor),
            });
        }
        weeks.push(week);

        tracing::debug!(year, %month, weeks = weeks.len(), "built month view");
        Ok(Self {
            year,
            month,
            header: config.week_order(),
            weeks,
        })
    }

    /// Year shown.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month shown.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Column headings, starting at the configured first day of the week.
    pub fn header(&self) -> &[Weekday; 7] {
        &self.header
    }

    /// Rows of the grid.
    pub fn weeks(&self) -> &[[Option<DayCell>; 7]] {
        &self.weeks
    }

    /// All cells of the month in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.weeks.iter().flatten().flatten()
    }

    /// Dates the picker must disable.
    pub fn disabled_dates(&self) -> Vec<Date> {
        self.days().filter(|c| c.disabled).map(|c| c.date).collect()
    }

    /// Number of working days in the month.
    pub fn working_day_count(&self) -> usize {
        self.days().filter(|c| c.kind == DayKind::Working).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::working_day_config::WorkingDayConfig;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn february_2024_monday_start() {
        let cal = WorkCalendar::new(WorkingDayConfig::default());
        let view = MonthView::build(2024, 2, &cal, date(2024, 1, 1)).unwrap();
        // 2024-02-01 is a Thursday
        assert_eq!(view.weeks()[0][3].unwrap().date, date(2024, 2, 1));
        assert!(view.weeks()[0][..3].iter().all(Option::is_none));
        assert_eq!(view.weeks().len(), 5);
        assert_eq!(view.days().count(), 29);
        assert_eq!(view.working_day_count(), 21);
        assert_eq!(view.month(), Month::February);
    }

    #[test]
    fn rejects_bad_month() {
        let cal = WorkCalendar::new(WorkingDayConfig::default());
        assert!(MonthView::build(2024, 13, &cal, date(2024, 1, 1)).is_err());
        assert!(MonthView::build(2300, 1, &cal, date(2024, 1, 1)).is_err());
    }
}
