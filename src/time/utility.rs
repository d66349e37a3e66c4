use chrono::{Datelike, NaiveDate, Weekday};

use crate::time::calendar::calendarerror::CalendarError;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


/// # Panics
/// If `month` is not in `1..=12`.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    assert!(month >= 1 && month <= 12, "month must be in 1..=12");

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

#[inline]
pub const fn days_of_year (year: i32) -> u32 {
    if is_leap(year) { 366 } else { 365 }
}

/// Years the holiday engine accepts: positive, and inside chrono's date range.
pub fn checked_year(year: i32) -> Result<i32, CalendarError> {
    if year < 1 || year > NaiveDate::MAX.year() {
        Err(CalendarError::InvalidYear(year))
    } else {
        Ok(year)
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Domingo",
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado"
    }
}
