//! # workdays
//!
//! Working-day and leave-duration calculation for HR applications.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than on the individual `wd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use workdays::time::{Date, DateRange, HolidaySet, WorkCalendar, WorkingDayConfig};
//!
//! let new_year = Date::from_ymd(2024, 1, 1).unwrap();
//! let holidays: HolidaySet = [new_year].into_iter().collect();
//! let calendar = WorkCalendar::builder(WorkingDayConfig::default())
//!     .holidays(holidays)
//!     .build();
//!
//! let leave = DateRange::new(Date::from_ymd(2023, 12, 29).unwrap(), Date::from_ymd(2024, 1, 2).unwrap());
//! assert_eq!(calendar.duration(&leave), 4);
//! assert_eq!(calendar.next_working_day(new_year).unwrap(), Date::from_ymd(2024, 1, 2).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and `Result` alias.
pub use wd_core as core;

/// Dates, holiday sets and the working-day engine.
pub use wd_time as time;

pub use wd_core::{Error, Result};
