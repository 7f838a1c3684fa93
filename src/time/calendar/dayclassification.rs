use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const WEEKEND_REASON: &str = "Weekend";
pub const HOLIDAY_REASON: &str = "Holiday";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DayClassification {
    date: NaiveDate,
    weekend: bool,
    holiday: Option<String>
}

impl DayClassification {
    pub fn new(date: NaiveDate, weekend: bool, holiday: Option<String>) -> DayClassification {
        DayClassification { date, weekend, holiday }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_weekend(&self) -> bool {
        self.weekend
    }

    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    pub fn holiday_name(&self) -> Option<&str> {
        self.holiday.as_deref()
    }

    pub fn requires_confirmation(&self) -> bool {
        self.weekend || self.is_holiday()
    }

    pub fn reasons(&self) -> Vec<&'static str> {
        let mut reasons = Vec::with_capacity(2);
        if self.weekend {
            reasons.push(WEEKEND_REASON);
        }
        if self.is_holiday() {
            reasons.push(HOLIDAY_REASON);
        }
        reasons
    }
}

impl fmt::Display for DayClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.date, self.date.weekday())?;
        match (&self.holiday, self.weekend) {
            (Some(name), _) => write!(f, ": {}", name),
            (None, true) => write!(f, ": weekend"),
            (None, false) => write!(f, ": working day")
        }
    }
}
