use std::collections::{HashMap, HashSet};

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};
use crate::time::utility::days_of_month;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum WeekendAdjustmentShiftCheck {
    MayShiftToPreviousYear = 1,
    MayShiftToNextYear = -1,
    None
}

#[derive(Clone, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    weekend_adjustment_rules: WeekendAdjustmentRule,
    shift_check: WeekendAdjustmentShiftCheck
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, weekend_adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> Option<FixedDateHoliday> {
        FixedDateHoliday::with_rule(month, day, WeekendAdjustmentRule::new(weekend_adjustment_map))
    }

    pub fn observed(month: u32, day: u32) -> Option<FixedDateHoliday> {
        FixedDateHoliday::with_rule(month, day, WeekendAdjustmentRule::federal_observance())
    }

    fn with_rule(month: u32, day: u32, weekend_adjustment_rules: WeekendAdjustmentRule) -> Option<FixedDateHoliday> {
        // validated against a leap year so that Feb 29 is accepted
        if !(1..=12).contains(&month) || day == 0 || day > days_of_month(2000, month) {
            return None;
        }

        let max_shift = weekend_adjustment_rules.max_shift();
        let shift_check = if max_shift > 0 {
            if month == 1 && day <= max_shift {
                WeekendAdjustmentShiftCheck::MayShiftToPreviousYear
            } else if month == 12 && day > 31 - max_shift {
                WeekendAdjustmentShiftCheck::MayShiftToNextYear
            } else {
                WeekendAdjustmentShiftCheck::None
            }
        } else {
            WeekendAdjustmentShiftCheck::None
        };

        Some(FixedDateHoliday {
            month,
            day,
            weekend_adjustment_rules,
            shift_check
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekend_adjustment_rules(&self) -> &WeekendAdjustmentRule {
        &self.weekend_adjustment_rules
    }

    /// Observed date of the occurrence nominally in `year`, which may land
    /// in the neighbouring year. `None` for Feb 29 outside leap years.
    pub fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .and_then(|d| self.weekend_adjustment_rules.adjust(d))
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holiday_set = HashSet::new();

        if let Some(d1) = self.observed_date(year) {
            if d1.year() == year {
                holiday_set.insert(d1);
            }
        }

        // The neighbouring year's occurrence can be observed in this year,
        // e.g. New Year's Day falling on Saturday is observed on Dec 31.
        if self.shift_check != WeekendAdjustmentShiftCheck::None {
            let d2 = year
                .checked_add(self.shift_check as i32)
                .and_then(|neighbour| self.observed_date(neighbour));
            if let Some(d2) = d2 {
                if d2.year() == year {
                    holiday_set.insert(d2);
                }
            }
        }

        holiday_set
    }

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        let neighbour = match self.shift_check {
            WeekendAdjustmentShiftCheck::MayShiftToPreviousYear => d.year().checked_add(1),
            WeekendAdjustmentShiftCheck::MayShiftToNextYear => d.year().checked_sub(1),
            WeekendAdjustmentShiftCheck::None => None
        };
        [Some(d.year()), neighbour]
            .into_iter()
            .flatten()
            .any(|year| self.observed_date(year) == Some(*d))
    }
}
