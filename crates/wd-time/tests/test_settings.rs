//! Settings files decoded through the `config` crate, and the calendars
//! built from them.

use std::path::PathBuf;
use wd_time::{Date, DurationPolicy, HolidaySet, Settings, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn toml_file() {
    let settings = Settings::from_file(fixture("settings.toml")).unwrap();
    assert_eq!(settings.horizon_days, 10);
    assert_eq!(settings.duration_policy, DurationPolicy::CalendarDaysMinusHolidays);
    assert_eq!(settings.organization.week_start_day(), Weekday::Sunday);
    assert_eq!(settings.holidays.len(), 2);
}

#[test]
fn json_file_falls_back_to_defaults() {
    let settings = Settings::from_file(fixture("settings.json")).unwrap();
    assert_eq!(settings.horizon_days, 20);
    assert_eq!(settings.duration_policy, DurationPolicy::WorkingDaysOnly);
    assert!(settings.organization.is_working_weekday(Weekday::Saturday));
    assert_eq!(settings.organization.week_start_day(), Weekday::Monday);
    assert!(settings.holidays.is_empty());
}

#[test]
fn calendar_merges_fetched_holidays() {
    let settings = Settings::from_file(fixture("settings.toml")).unwrap();
    let fetched: HolidaySet = [date(2024, 5, 1)].into_iter().collect();
    let calendar = settings.calendar(&fetched);

    assert_eq!(calendar.holidays().len(), 3);
    assert_eq!(calendar.horizon_days(), 10);
    assert!(!calendar.is_working_day(date(2024, 1, 1)));
    assert!(!calendar.is_working_day(date(2024, 5, 1)));
    // Mon 2024-02-12 is listed in the file
    assert_eq!(calendar.request_duration(date(2024, 2, 9), date(2024, 2, 13)), 4);
}

#[test]
fn working_days_only_policy_from_file() {
    let settings = Settings::from_file(fixture("settings.json")).unwrap();
    let calendar = settings.calendar(&HolidaySet::new());
    // Fri 2024-01-05 .. Mon 2024-01-08; Saturday is worked, Sunday is not
    assert_eq!(calendar.request_duration(date(2024, 1, 5), date(2024, 1, 8)), 3);
}
