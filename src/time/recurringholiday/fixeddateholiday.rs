use chrono::{
    Datelike,
    NaiveDate
};

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::holiday::{Holiday, HolidayKind};
use crate::time::utility::{checked_year, days_of_month};
use super::recurringholiday::RecurringHoliday;
use super::weekdayshift::WeekdayShiftRule;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum YearCrossingCheck {
    MayShiftFromPreviousYear,
    MayShiftFromNextYear,
    None
}

#[derive(Clone, Debug)]
pub struct FixedDateHoliday {
    name: String,
    month: u32,
    day: u32,
    shift_rule: WeekdayShiftRule,
    crossing_check: YearCrossingCheck
}

impl FixedDateHoliday {
    /// Feb 29 is accepted and simply has no occurrence in common years.
    pub fn new(name: impl Into<String>,
               month: u32,
               day: u32,
               shift_rule: WeekdayShiftRule) -> Result<FixedDateHoliday, CalendarError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_of_month(2000, month) {
            return Err(CalendarError::InvalidMonthDay { month, day });
        }

        let forward = shift_rule.max_forward_days();
        let backward = shift_rule.max_backward_days();
        let crossing_check = if month == 12 && (day as i64) > 31 - forward {
            YearCrossingCheck::MayShiftFromPreviousYear
        } else if month == 1 && (day as i64) <= backward {
            YearCrossingCheck::MayShiftFromNextYear
        } else {
            YearCrossingCheck::None
        };

        Ok(FixedDateHoliday {
            name: name.into(),
            month,
            day,
            shift_rule,
            crossing_check
        })
    }

    pub fn unadjusted(name: impl Into<String>, month: u32, day: u32) -> Result<FixedDateHoliday, CalendarError> {
        FixedDateHoliday::new(name, month, day, WeekdayShiftRule::unadjusted())
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn shift_rule(&self) -> &WeekdayShiftRule {
        &self.shift_rule
    }

    fn occurrence(&self, year: i32) -> Result<Option<NaiveDate>, CalendarError> {
        let year = checked_year(year)?;
        match NaiveDate::from_ymd_opt(year, self.month, self.day) {
            Some(d) => self.shift_rule.adjust(d)
                .map(Some)
                .ok_or(CalendarError::DateOutOfRange(d)),
            None => Ok(None)
        }
    }

    fn to_holiday(&self, d: NaiveDate) -> Holiday {
        Holiday::new(d, self.name.clone(), HolidayKind::Fixed)
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> HolidayKind {
        HolidayKind::Fixed
    }

    fn get_holiday(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        let mut holidays = Vec::with_capacity(1);

        if let Some(d) = self.occurrence(year)? {
            if d.year() == year {
                holidays.push(self.to_holiday(d));
            }
        }

        // An adjacent year's occurrence may have been shifted into this one.
        let adjacent = match self.crossing_check {
            YearCrossingCheck::MayShiftFromPreviousYear => Some(year - 1),
            YearCrossingCheck::MayShiftFromNextYear => Some(year + 1),
            YearCrossingCheck::None => None
        };
        if let Some(Ok(Some(d))) = adjacent.map(|y| self.occurrence(y)) {
            if d.year() == year {
                holidays.push(self.to_holiday(d));
            }
        }

        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unadjusted_holiday_stays_on_its_date() {
        let navidad = FixedDateHoliday::unadjusted("Navidad", 12, 25).unwrap();
        let holidays = navidad.get_holiday(2022).unwrap();
        assert_eq!(holidays.len(), 1);
        // 2022-12-25 is a Sunday, still not moved
        assert_eq!(holidays[0].date(), ymd(2022, 12, 25));
        assert_eq!(holidays[0].name(), "Navidad");
        assert_eq!(holidays[0].kind(), HolidayKind::Fixed);
    }

    #[test]
    fn rejects_malformed_month_day() {
        assert_eq!(
            FixedDateHoliday::unadjusted("x", 13, 1).unwrap_err(),
            CalendarError::InvalidMonthDay { month: 13, day: 1 }
        );
        assert!(FixedDateHoliday::unadjusted("x", 4, 31).is_err());
        assert!(FixedDateHoliday::unadjusted("x", 1, 0).is_err());
    }

    #[test]
    fn february_29_only_in_leap_years() {
        let h = FixedDateHoliday::unadjusted("Bisiesto", 2, 29).unwrap();
        assert_eq!(h.get_holiday(2024).unwrap().len(), 1);
        assert!(h.get_holiday(2025).unwrap().is_empty());
    }

    #[test]
    fn monday_shift_moves_reyes_magos() {
        let reyes = FixedDateHoliday::new("Reyes Magos", 1, 6, WeekdayShiftRule::next_monday()).unwrap();
        // 2025-01-06 is a Monday, 2026-01-06 a Tuesday
        assert_eq!(reyes.get_holiday(2025).unwrap()[0].date(), ymd(2025, 1, 6));
        assert_eq!(reyes.get_holiday(2026).unwrap()[0].date(), ymd(2026, 1, 12));
    }

    #[test]
    fn monday_shift_can_cross_into_next_year() {
        let h = FixedDateHoliday::new("Fin de año", 12, 31, WeekdayShiftRule::next_monday()).unwrap();
        // 2025-12-31 is a Wednesday, moves to Monday 2026-01-05
        assert!(h.get_holiday(2025).unwrap().is_empty());
        let in_2026: Vec<NaiveDate> = h.get_holiday(2026).unwrap().iter().map(|h| h.date()).collect();
        assert_eq!(in_2026, vec![ymd(2026, 1, 5)]);
    }

    #[test]
    fn invalid_year_is_an_error() {
        let h = FixedDateHoliday::unadjusted("Año Nuevo", 1, 1).unwrap();
        assert_eq!(h.get_holiday(0).unwrap_err(), CalendarError::InvalidYear(0));
        assert!(h.is_holiday(&ymd(2025, 1, 1)).unwrap());
        assert!(!h.is_holiday(&ymd(2025, 1, 2)).unwrap());
    }
}
