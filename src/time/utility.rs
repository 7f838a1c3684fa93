use chrono::{Datelike, NaiveDate};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Which occurrence of its weekday `d` is within its month, 1-indexed
/// (the 15th of a month is always the 3rd occurrence of its weekday).
#[inline]
pub fn weekday_ordinal_in_month (d: NaiveDate) -> u32 {
    d.day0() / 7 + 1
}

/// True if no later day of the same month shares the weekday of `d`.
#[inline]
pub fn is_last_weekday_of_month (d: NaiveDate) -> bool {
    d.day() + 7 > days_of_month(d.year(), d.month())
}
