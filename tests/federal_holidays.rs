//! Observed federal holidays checked against published observance dates.

use std::collections::HashSet;
use std::path::Path;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use holidaychecker::configuration::Configuration;
use holidaychecker::time::calendar::holidaycalendar::HolidayCalendar;
use holidaychecker::time::calendar::unitedstates::{federal_calendar, UNITED_STATES_FEDERAL};
use holidaychecker::{is_federal_holiday, is_weekend};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn year_days(year: i32) -> impl Iterator<Item = NaiveDate> {
    date(year, 1, 1)
        .iter_days()
        .take_while(move |d| d.year() == year)
}

/// Every date of `year` flagged by `is_federal_holiday` must be expected,
/// and every expected date must be flagged.
fn check_holidays(year: i32, expected: &[NaiveDate]) {
    let calculated: Vec<NaiveDate> = year_days(year).filter(|&d| is_federal_holiday(d)).collect();
    let calc_set: HashSet<_> = calculated.iter().copied().collect();
    let exp_set: HashSet<_> = expected.iter().copied().collect();

    for &d in &calculated {
        assert!(exp_set.contains(&d), "{} ({}) calculated as holiday but not expected", d, d.weekday());
    }
    for &d in expected {
        assert!(calc_set.contains(&d), "{} ({}) expected as holiday but not found", d, d.weekday());
    }

    let listed: Vec<NaiveDate> = federal_calendar()
        .holidays_in_year(year)
        .into_iter()
        .map(|(d, _)| d)
        .collect();
    assert_eq!(listed, expected, "holiday list for {}", year);
}

// ─── Full years ───────────────────────────────────────────────────────────────

#[test]
fn test_2021_holidays() {
    check_holidays(2021, &[
        date(2021, 1, 1),
        date(2021, 1, 18),
        date(2021, 2, 15),
        date(2021, 5, 31),
        date(2021, 6, 18),   // Jun 19 on Saturday
        date(2021, 7, 5),    // Jul 4 on Sunday
        date(2021, 9, 6),
        date(2021, 10, 11),
        date(2021, 11, 11),
        date(2021, 11, 25),
        date(2021, 12, 24),  // Dec 25 on Saturday
        date(2021, 12, 31),  // Jan 1 2022 on Saturday
    ]);
}

#[test]
fn test_2022_holidays() {
    check_holidays(2022, &[
        date(2022, 1, 17),
        date(2022, 2, 21),
        date(2022, 5, 30),
        date(2022, 6, 20),   // Jun 19 on Sunday
        date(2022, 7, 4),
        date(2022, 9, 5),
        date(2022, 10, 10),
        date(2022, 11, 11),
        date(2022, 11, 24),
        date(2022, 12, 26),  // Dec 25 on Sunday
    ]);
}

#[test]
fn test_2023_holidays() {
    check_holidays(2023, &[
        date(2023, 1, 2),    // Jan 1 on Sunday
        date(2023, 1, 16),
        date(2023, 2, 20),
        date(2023, 5, 29),
        date(2023, 6, 19),
        date(2023, 7, 4),
        date(2023, 9, 4),
        date(2023, 10, 9),
        date(2023, 11, 10),  // Nov 11 on Saturday
        date(2023, 11, 23),
        date(2023, 12, 25),
    ]);
}

#[test]
fn test_2024_holidays() {
    check_holidays(2024, &[
        date(2024, 1, 1),
        date(2024, 1, 15),
        date(2024, 2, 19),
        date(2024, 5, 27),
        date(2024, 6, 19),
        date(2024, 7, 4),
        date(2024, 9, 2),
        date(2024, 10, 14),
        date(2024, 11, 11),
        date(2024, 11, 28),
        date(2024, 12, 25),
    ]);
}

// ─── Individual scenarios ─────────────────────────────────────────────────────

#[test]
fn new_year_observance_crosses_year_boundary() {
    assert!(is_federal_holiday(date(2025, 1, 1)));

    assert!(is_federal_holiday(date(2021, 12, 31)));
    assert!(!is_federal_holiday(date(2022, 1, 1)));

    assert!(is_federal_holiday(date(2023, 1, 2)));
    assert!(!is_federal_holiday(date(2023, 1, 1)));
    assert!(!is_federal_holiday(date(2022, 12, 30)));
}

#[test]
fn memorial_day_only_on_last_monday() {
    assert!(is_federal_holiday(date(2027, 5, 31)));
    for d in [3, 10, 17, 24] {
        assert!(!is_federal_holiday(date(2027, 5, d)), "2027-05-{:02}", d);
    }
}

#[test]
fn thanksgiving_only_on_fourth_thursday() {
    assert!(is_federal_holiday(date(2024, 11, 28)));
    assert!(!is_federal_holiday(date(2024, 11, 21)));
    assert!(!is_federal_holiday(date(2024, 11, 29)));
}

#[test]
fn veterans_day_observance() {
    // 2018-11-11 is a Sunday
    assert!(is_federal_holiday(date(2018, 11, 12)));
    assert!(!is_federal_holiday(date(2018, 11, 11)));
    // 2023-11-11 is a Saturday
    assert!(is_federal_holiday(date(2023, 11, 10)));
    assert!(!is_federal_holiday(date(2023, 11, 11)));
}

#[test]
fn fixed_dates_in_leap_and_common_years() {
    // 2028 is a leap year; Jul 4 falls on Tuesday, Dec 25 on Monday
    assert!(is_federal_holiday(date(2028, 7, 4)));
    assert!(is_federal_holiday(date(2028, 12, 25)));
    // 2027 is a common year; Jul 4 falls on Sunday, Dec 25 on Saturday
    assert!(is_federal_holiday(date(2027, 7, 5)));
    assert!(is_federal_holiday(date(2027, 12, 24)));
    assert!(!is_federal_holiday(date(2027, 7, 4)));
    assert!(!is_federal_holiday(date(2027, 12, 25)));
}

// ─── Weekends ─────────────────────────────────────────────────────────────────

#[test]
fn weekends_of_2025_follow_reference_saturday() {
    let first_saturday = date(2025, 1, 4);
    for d in year_days(2025) {
        let offset = (d - first_saturday).num_days().rem_euclid(7);
        assert_eq!(is_weekend(d), offset <= 1, "{}", d);
        assert_eq!(is_weekend(d), matches!(d.weekday(), Weekday::Sat | Weekday::Sun));
    }
}

#[test]
fn federal_calendar_reports_weekends_separately() {
    let calendar = federal_calendar();
    // 2022-12-25 is a Sunday; the holiday moved to Monday
    let sunday = calendar.classify(date(2022, 12, 25));
    assert!(sunday.is_weekend());
    assert!(!sunday.is_holiday());
    assert_eq!(sunday.reasons(), vec!["Weekend"]);

    let monday = calendar.classify(date(2022, 12, 26));
    assert!(!monday.is_weekend());
    assert_eq!(monday.holiday_name(), Some("Christmas Day"));
    assert_eq!(monday.reasons(), vec!["Holiday"]);

    assert_eq!(
        calendar.next_business_day(date(2022, 12, 23)),
        date(2022, 12, 23).checked_add_days(Days::new(4))
    );
}

// ─── JSON configuration ───────────────────────────────────────────────────────

#[test]
fn json_calendar_matches_built_in_table() {
    let config = Configuration::new();
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("json/calendar.json");
    config.from_reader(&path).unwrap();

    let from_json = config.holiday_calendar("UnitedStatesFederalJson").unwrap();
    let built_in = config.holiday_calendar(UNITED_STATES_FEDERAL).unwrap();

    for year in 2000..2031 {
        assert_eq!(from_json.holidays_in_year(year), built_in.holidays_in_year(year), "{}", year);
        for d in year_days(year) {
            assert_eq!(from_json.holiday_name(d), built_in.holiday_name(d), "{}", d);
            assert_eq!(from_json.is_weekend(d), built_in.is_weekend(d), "{}", d);
        }
    }
}
