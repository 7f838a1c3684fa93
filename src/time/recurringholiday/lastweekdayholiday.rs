use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;
use crate::time::utility::{days_of_month, is_last_weekday_of_month};

#[derive(Clone, Debug)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Option<LastWeekdayHoliday> {
        if !(1..=12).contains(&month) {
            None
        } else {
            Some(LastWeekdayHoliday { month, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        let Some(end_of_month) = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month)) else {
            return holiday_set;
        };

        // walk back from the end of the month to the target weekday
        let days_back = (end_of_month.weekday().num_days_from_monday() as i32
                         - self.weekday.num_days_from_monday() as i32 + 7) % 7;

        if let Some(d) = end_of_month.checked_sub_days(Days::new(days_back as u64)) {
            holiday_set.insert(d);
        }
        holiday_set
    }

    #[inline]
    fn is_holiday(&self, d: &NaiveDate) -> bool {
        d.month() == self.month
            && d.weekday() == self.weekday
            && is_last_weekday_of_month(*d)
    }
}
