//! Integration tests for `Date`, `Weekday`, `DateRange` and `HolidaySet`
//! as callers receive them from a backend.

use std::collections::HashSet;

use wd_time::date::{days_in_month, is_leap_year};
use wd_time::{Date, DateRange, HolidaySet, Weekday, WorkingDayConfig};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn consecutive_dates() {
    let start = date(1999, 12, 1);
    let end = date(2001, 3, 1);

    let mut d = start;
    let mut weekday = d.weekday();
    while d < end {
        let next = d.succ().unwrap();
        assert_eq!(next - d, 1);
        assert_eq!(next.weekday(), weekday.succ(), "weekday does not advance at {next}");
        if next.month() == d.month() {
            assert_eq!(next.day_of_month(), d.day_of_month() + 1);
        } else {
            assert_eq!(next.day_of_month(), 1);
            assert_eq!(d.day_of_month(), days_in_month(d.year(), d.month()));
        }
        weekday = next.weekday();
        d = next;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn iso_text_roundtrip_for_a_year() {
    for d in DateRange::new(date(2024, 1, 1), date(2024, 12, 31)) {
        let text = d.to_string();
        assert_eq!(text.len(), 10);
        assert_eq!(text.parse::<Date>().unwrap(), d);
    }
}

#[test]
fn timezone_suffix_does_not_change_the_day() {
    let plain: Date = "2024-06-30".parse().unwrap();
    for text in [
        "2024-06-30T00:00:00Z",
        "2024-06-30T23:59:59-11:00",
        "2024-06-30T00:00:00.000+14:00",
        "2024-06-30 08:15",
    ] {
        assert_eq!(text.parse::<Date>().unwrap(), plain, "{text}");
    }
}

#[test]
fn dates_hash_by_calendar_day() {
    let set: HashSet<Date> = ["2024-01-01", "2024-01-01T12:00:00Z", "2024-01-02"]
        .into_iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn holiday_payload_from_backend_json() {
    let current: HolidaySet =
        serde_json::from_str(r#"["2024-01-01", "2024-12-25", "2024-12-26"]"#).unwrap();
    let next: HolidaySet = serde_json::from_str(r#"["2025-01-01", "2025-12-25"]"#).unwrap();
    let both = current.union(&next);

    assert_eq!(both.len(), 5);
    let december = DateRange::new(date(2024, 12, 1), date(2024, 12, 31));
    assert_eq!(both.count_in(&december), 2);
    assert_eq!(both.for_year(2025).len(), 2);

    assert!(serde_json::from_str::<HolidaySet>(r#"["2024-13-01"]"#).is_err());
}

#[test]
fn organization_config_from_backend_json() {
    let config: WorkingDayConfig = serde_json::from_str(
        r#"{"working_weekdays": ["Monday", "Tuesday", "Wednesday", "Thursday", "Saturday"], "week_start_day": "Saturday"}"#,
    )
    .unwrap();
    assert!(!config.is_working_weekday(Weekday::Friday));
    assert_eq!(config.week_order()[0], Weekday::Saturday);
    assert_eq!(config.week_order()[6], Weekday::Friday);
}

#[test]
fn date_serde_is_iso_string() {
    let d = date(2024, 2, 29);
    assert_eq!(serde_json::to_string(&d).unwrap(), r#""2024-02-29""#);
    assert_eq!(serde_json::from_str::<Date>(r#""2024-02-29""#).unwrap(), d);
    assert!(serde_json::from_str::<Date>(r#""2023-02-29""#).is_err());
}
