//! `HolidaySet` — dates excluded from working-day counts.
//!
//! A holiday set is typically scoped to one country and one or two
//! consecutive years (the current year and the next).  A date in the set is
//! a non-working day whatever its weekday.

use crate::date::Date;
use crate::date_range::DateRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use wd_core::errors::Result;

/// An immutable, ordered set of holiday dates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    dates: BTreeSet<Date>,
}

impl HolidaySet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from ISO-8601 date strings as delivered by a holiday
    /// provider.  Any trailing time/offset is ignored.
    ///
    /// # Errors
    /// Returns the parse error of the first malformed entry.
    pub fn from_iso_dates<'a, I>(dates: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        dates
            .into_iter()
            .map(str::parse::<Date>)
            .collect::<Result<BTreeSet<_>>>()
            .map(|dates| Self { dates })
    }

    /// Holidays present in either set.
    pub fn union(&self, other: &HolidaySet) -> HolidaySet {
        Self {
            dates: self.dates.union(&other.dates).copied().collect(),
        }
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate over all holidays in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    /// Holidays falling inside `range` (both bounds inclusive).
    pub fn in_range(&self, range: &DateRange) -> impl Iterator<Item = Date> + '_ {
        self.dates.range(range.start()..=range.end()).copied()
    }

    /// Number of holidays inside `range` (both bounds inclusive).
    pub fn count_in(&self, range: &DateRange) -> u32 {
        self.in_range(range).count() as u32
    }

    /// The holidays of a single calendar year.
    pub fn for_year(&self, year: u16) -> HolidaySet {
        Self {
            dates: self.iter().filter(|d| d.year() == year).collect(),
        }
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<Date> for HolidaySet {
    fn extend<I: IntoIterator<Item = Date>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}
