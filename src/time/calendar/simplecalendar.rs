use std::collections::HashSet;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::recurringholiday::NamedHoliday;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    fn weekend_list(&self) -> Vec<Weekday> {
        let mut weekdays = Vec::with_capacity(7);
        for day in 0..7u8 {
            if (self.0 & (1u8 << day)) != 0 {
                if let Ok(weekday) = Weekday::try_from(day) {
                    weekdays.push(weekday);
                }
            }
        }
        weekdays
    }
}

/// Calendar made of a weekend mask and a table of named recurring holidays.
///
/// Holiday rules are evaluated independently and OR-ed together; the first
/// matching entry in table order names the day.
#[derive(Debug)]
pub struct SimpleCalendar {
    weekends: WeekendMask,
    recurring_holidays: Vec<NamedHoliday>
}

const SEVEN_DAYS: Days = Days::new(7);

impl SimpleCalendar {
    pub fn new(
        weekends: HashSet<Weekday>,
        recurring_holidays: Vec<NamedHoliday>
    ) -> SimpleCalendar {
        SimpleCalendar {
            weekends: WeekendMask::new(&weekends),
            recurring_holidays
        }
    }

    pub fn recurring_holidays(&self) -> &[NamedHoliday] {
        &self.recurring_holidays
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        self.weekends.weekend_list().into_iter().collect()
    }

    pub fn is_recurring_holiday(&self, d: NaiveDate) -> bool {
        self.recurring_holidays.iter().any(|r| r.is_holiday(&d))
    }

    /// Names of every rule matching `d`. Real calendars yield at most one.
    pub fn matching_holidays(&self, d: NaiveDate) -> Vec<&str> {
        self.recurring_holidays
            .iter()
            .filter(|r| r.is_holiday(&d))
            .map(|r| r.name())
            .collect()
    }
}

impl HolidayCalendar for SimpleCalendar {
    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    fn holiday_name(&self, d: NaiveDate) -> Option<&str> {
        self.recurring_holidays
            .iter()
            .find(|r| r.is_holiday(&d))
            .map(|r| r.name())
    }

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.is_recurring_holiday(d)
    }

    fn holidays_in_year(&self, year: i32) -> Vec<(NaiveDate, String)> {
        let mut holidays: Vec<(NaiveDate, String)> = self.recurring_holidays
            .iter()
            .flat_map(|r| {
                r.get_holiday(year)
                    .into_iter()
                    .map(|d| (d, r.name().to_owned()))
            })
            .collect();
        holidays.sort();
        holidays
    }

    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate> {
        // ~104 weekend days plus a dozen holidays
        let mut holiday_set = HashSet::with_capacity(120);

        if let (Some(year_start), Some(year_end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31)
        ) {
            for target_weekday in self.weekends.weekend_list() {
                let offset = (target_weekday.num_days_from_monday() + 7
                              - year_start.weekday().num_days_from_monday()) % 7;
                let mut next = year_start.checked_add_days(Days::new(offset as u64));

                while let Some(current) = next.filter(|d| *d <= year_end) {
                    holiday_set.insert(current);
                    next = current.checked_add_days(SEVEN_DAYS);
                }
            }
        }

        for r in self.recurring_holidays.iter() {
            holiday_set.extend(r.get_holiday(year));
        }

        holiday_set
    }
}
