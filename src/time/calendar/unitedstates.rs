//! United States federal holidays.
//!
//! The eleven holidays are kept as a data table evaluated by the shared
//! recurring-holiday rules:
//!
//! | Holiday                     | Rule                                   |
//! |-----------------------------|----------------------------------------|
//! | New Year's Day              | Jan 1, Sat → Fri, Sun → Mon            |
//! | Martin Luther King Jr. Day  | 3rd Monday of January                  |
//! | Presidents' Day             | 3rd Monday of February                 |
//! | Memorial Day                | last Monday of May                     |
//! | Juneteenth                  | Jun 19, Sat → Fri, Sun → Mon           |
//! | Independence Day            | Jul 4, Sat → Fri, Sun → Mon            |
//! | Labor Day                   | 1st Monday of September                |
//! | Columbus Day                | 2nd Monday of October                  |
//! | Veterans Day                | Nov 11, Sat → Fri, Sun → Mon           |
//! | Thanksgiving Day            | 4th Thursday of November               |
//! | Christmas Day               | Dec 25, Sat → Fri, Sun → Mon           |
//!
//! Observed dates are compared as full dates, so New Year's Day falling on
//! a Saturday is a holiday on Dec 31 of the previous year.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::{NamedHoliday, RecurringHoliday};

pub const UNITED_STATES_FEDERAL: &str = "UnitedStatesFederal";

#[derive(Clone, Copy, Debug)]
enum FederalRule {
    Observed { month: u32, day: u32 },
    NthWeekday { month: u32, n: u8, weekday: Weekday },
    LastWeekday { month: u32, weekday: Weekday }
}

const FEDERAL_HOLIDAY_TABLE: [(&str, FederalRule); 11] = [
    ("New Year's Day",             FederalRule::Observed { month: 1, day: 1 }),
    ("Martin Luther King Jr. Day", FederalRule::NthWeekday { month: 1, n: 3, weekday: Weekday::Mon }),
    ("Presidents' Day",            FederalRule::NthWeekday { month: 2, n: 3, weekday: Weekday::Mon }),
    ("Memorial Day",               FederalRule::LastWeekday { month: 5, weekday: Weekday::Mon }),
    ("Juneteenth",                 FederalRule::Observed { month: 6, day: 19 }),
    ("Independence Day",           FederalRule::Observed { month: 7, day: 4 }),
    ("Labor Day",                  FederalRule::NthWeekday { month: 9, n: 1, weekday: Weekday::Mon }),
    ("Columbus Day",               FederalRule::NthWeekday { month: 10, n: 2, weekday: Weekday::Mon }),
    ("Veterans Day",               FederalRule::Observed { month: 11, day: 11 }),
    ("Thanksgiving Day",           FederalRule::NthWeekday { month: 11, n: 4, weekday: Weekday::Thu }),
    ("Christmas Day",              FederalRule::Observed { month: 12, day: 25 }),
];

impl FederalRule {
    fn build(self) -> Option<Arc<dyn RecurringHoliday>> {
        let rule: Arc<dyn RecurringHoliday> = match self {
            FederalRule::Observed { month, day } => Arc::new(FixedDateHoliday::observed(month, day)?),
            FederalRule::NthWeekday { month, n, weekday } => Arc::new(NthWeekdayHoliday::new(month, n, weekday)?),
            FederalRule::LastWeekday { month, weekday } => Arc::new(LastWeekdayHoliday::new(month, weekday)?)
        };
        Some(rule)
    }
}

/// Builds the federal holiday table. `None` if any entry is malformed.
pub fn federal_holidays() -> Option<Vec<NamedHoliday>> {
    FEDERAL_HOLIDAY_TABLE
        .iter()
        .map(|&(name, rule)| rule.build().map(|r| NamedHoliday::new(name, r)))
        .collect()
}

pub fn united_states_federal_calendar() -> Option<SimpleCalendar> {
    let holidays = federal_holidays()?;
    debug!(n_holidays = holidays.len(), "built {} calendar", UNITED_STATES_FEDERAL);
    Some(SimpleCalendar::new(
        HashSet::from([Weekday::Sat, Weekday::Sun]),
        holidays
    ))
}

static FEDERAL_CALENDAR: LazyLock<SimpleCalendar> = LazyLock::new(|| {
    united_states_federal_calendar().expect("federal holiday table entries are valid")
});

pub fn federal_calendar() -> &'static SimpleCalendar {
    &FEDERAL_CALENDAR
}

#[inline]
pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True iff `d` is the observed date of one of the eleven federal holidays.
pub fn is_federal_holiday(d: NaiveDate) -> bool {
    federal_calendar().is_recurring_holiday(d)
}
