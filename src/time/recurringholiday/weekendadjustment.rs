use std::collections::HashMap;

use chrono::{
    Datelike,
    Duration,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};


#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Observance shift table indexed by `Weekday::num_days_from_monday()`.
/// `None` leaves a date on that weekday where it is.
#[derive(Clone, Debug)]
pub struct WeekendAdjustmentRule {
    rule: [Option<i64>; 7]
}

impl WeekendAdjustmentRule {
    /// Compiles an adjustment map into day shifts.
    ///
    /// Each mapped weekday is walked in its adjustment direction until a
    /// weekday outside the map is reached, so consecutive weekend days all
    /// land on the nearest working day.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule: [Option<i64>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let mut to_weekday = weekday;
            let next_weekday = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut shift_days = 0;
            let one_day = adj as i64;

            while adjustment_map.contains_key(&to_weekday) {
                to_weekday = next_weekday(&to_weekday);
                shift_days += one_day;
                // every weekday mapped: nowhere to go
                if to_weekday == weekday {
                    shift_days = 0;
                    break;
                }
            }

            if shift_days != 0 {
                let idx = weekday.num_days_from_monday() as usize;
                rule[idx] = Some(shift_days);
            }
        }

        WeekendAdjustmentRule { rule }
    }

    pub fn federal_observance() -> WeekendAdjustmentRule {
        let adjustment_map = HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]);
        WeekendAdjustmentRule::new(&adjustment_map)
    }

    pub fn max_shift(&self) -> u32 {
        self.rule
            .iter()
            .flatten()
            .map(|n| n.unsigned_abs() as u32)
            .max()
            .unwrap_or(0)
    }

    pub fn shift_days(&self, weekday: Weekday) -> i64 {
        self.rule[weekday.num_days_from_monday() as usize].unwrap_or(0)
    }

    /// `None` when the shifted date leaves chrono's supported range.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        let idx = d.weekday().num_days_from_monday() as usize;

        match self.rule[idx] {
            Some(n) => d.checked_add_signed(Duration::days(n)),
            None => Some(d),
        }
    }
}
