use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::time::calendar::dayclassification::DayClassification;

const ONE_DAY: Days = Days::new(1);

/// A calendar of weekends and observed holidays.
///
/// `is_holiday` answers for observed holidays only; weekends are reported
/// separately by `is_weekend`, and a business day is neither.
pub trait HolidayCalendar: Send + Sync {
    fn is_weekend(&self, d: NaiveDate) -> bool;

    fn holiday_name(&self, d: NaiveDate) -> Option<&str>;

    fn holidays_in_year(&self, year: i32) -> Vec<(NaiveDate, String)>;

    /// Every non-business day of `year`, weekends included.
    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate>;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holiday_name(d).is_some()
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_weekend(d) && !self.is_holiday(d)
    }

    fn classify(&self, d: NaiveDate) -> DayClassification {
        let classification = DayClassification::new(
            d,
            self.is_weekend(d),
            self.holiday_name(d).map(str::to_owned)
        );
        trace!(date = %d, weekend = classification.is_weekend(), holiday = ?classification.holiday_name(), "classified date");
        classification
    }

    /// Moves `n` business days away from `horizon`, backwards when `n` is
    /// negative. Returns `None` only when the walk leaves chrono's date range.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Option<NaiveDate> {
        let shift_one_day: fn(NaiveDate) -> Option<NaiveDate> = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d)?;
            m -= self.is_business_day(d) as u32;
        }
        Some(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, -1)
    }
}
