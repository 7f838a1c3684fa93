use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};


pub trait RecurringHoliday: Send + Sync {

    /// Observed dates of this holiday falling inside `year`.
    fn get_holiday(&self, year: i32) -> HashSet<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        let holiday_set = self.get_holiday(d.year());
        holiday_set.contains(d)
    }
}

#[derive(Clone)]
pub struct NamedHoliday {
    name: String,
    rule: Arc<dyn RecurringHoliday>
}

impl NamedHoliday {
    pub fn new(name: impl Into<String>, rule: Arc<dyn RecurringHoliday>) -> NamedHoliday {
        NamedHoliday { name: name.into(), rule }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &Arc<dyn RecurringHoliday> {
        &self.rule
    }

    #[inline]
    pub fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.rule.is_holiday(d)
    }

    pub fn get_holiday(&self, year: i32) -> HashSet<NaiveDate> {
        self.rule.get_holiday(year)
    }
}

impl fmt::Debug for NamedHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedHoliday").field("name", &self.name).finish()
    }
}
