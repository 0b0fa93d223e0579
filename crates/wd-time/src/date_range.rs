//! `DateRange` — an inclusive span of calendar days.

use crate::date::Date;

/// An inclusive `[start, end]` range of dates with `start <= end`.
///
/// The only constructor normalizes its input, so a range with `end` before
/// `start` cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Build a range, clamping `end` forward to `start` if it is earlier.
    pub fn new(start: Date, end: Date) -> Self {
        if end < start {
            tracing::debug!(%start, %end, "end date before start date, clamping to start");
            return Self { start, end: start };
        }
        Self { start, end }
    }

    /// A range covering exactly one day.
    pub fn single(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range (inclusive).
    pub fn end(&self) -> Date {
        self.end
    }

    /// Same start, new end; normalized like [`DateRange::new`].
    pub fn with_end(&self, end: Date) -> Self {
        Self::new(self.start, end)
    }

    /// Number of calendar days spanned, counting both endpoints.
    pub fn calendar_days(&self) -> u32 {
        (self.start.days_between(self.end) + 1) as u32
    }

    /// Return `true` if `start <= date <= end`.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate over every date in the range.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateRangeIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ().ok()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map_or(0, |d| (d.days_between(self.end) + 1) as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRangeIter {}
