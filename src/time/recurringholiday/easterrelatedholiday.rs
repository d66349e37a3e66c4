use chrono::{Datelike, Duration, NaiveDate};

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::holiday::{Holiday, HolidayKind};
use crate::time::utility::checked_year;
use super::recurringholiday::RecurringHoliday;
use super::weekdayshift::WeekdayShiftRule;

/// Gregorian Easter Sunday (anonymous Meeus/Jones/Butcher algorithm).
///
/// Integer arithmetic only. Years before 1583 get the proleptic
/// Gregorian result; years below 1 are rejected.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    let year = checked_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidYear(year))
}

#[derive(Clone, Debug)]
pub struct EasterRelatedHoliday {
    name: String,
    shift_days: i64,
    shift_rule: WeekdayShiftRule
}

impl EasterRelatedHoliday {
    pub fn new(name: impl Into<String>, shift_days: i64, shift_rule: WeekdayShiftRule) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            name: name.into(),
            shift_days,
            shift_rule
        }
    }

    pub fn unadjusted(name: impl Into<String>, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday::new(name, shift_days, WeekdayShiftRule::unadjusted())
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }

    pub fn shift_rule(&self) -> &WeekdayShiftRule {
        &self.shift_rule
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> HolidayKind {
        HolidayKind::Moveable
    }

    fn get_holiday(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        let easter = easter_sunday(year)?;
        let d = easter
            .checked_add_signed(Duration::days(self.shift_days))
            .and_then(|d| self.shift_rule.adjust(d))
            .ok_or(CalendarError::DateOutOfRange(easter))?;

        let mut holidays = Vec::with_capacity(1);
        if d.year() == year {
            holidays.push(Holiday::new(d, self.name.clone(), HolidayKind::Moveable));
        }
        Ok(holidays)
    }
}
