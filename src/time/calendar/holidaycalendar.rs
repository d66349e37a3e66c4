use chrono::{Datelike, Days, NaiveDate};
use tracing::warn;

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::dayinfo::DayInfo;
use crate::time::holiday::Holiday;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::{checked_year, days_of_month, weekday_name};

const ONE_DAY: Days = Days::new(1);

/// Upper bound on consecutive non-business days crossed while stepping to a
/// business day. Real calendars never come close; tripping it means a broken
/// holiday table.
pub const BUSINESS_DAY_SEARCH_LIMIT: u32 = 30;

/// Holiday set of the date's own year. A valid `NaiveDate` whose year the
/// holiday rules reject (year < 1) is a caller bug.
fn holidays_of_date_year<C: HolidayCalendar + ?Sized>(calendar: &C, d: NaiveDate) -> Vec<Holiday> {
    match calendar.holidays_for_year(d.year()) {
        Ok(holidays) => holidays,
        Err(error) => panic!("calendar '{}' cannot classify {}: {}", calendar.name(), d, error)
    }
}

fn step_to_business_day<C: HolidayCalendar + ?Sized>(calendar: &C,
                                                     start: NaiveDate,
                                                     forward: bool) -> Result<NaiveDate, CalendarError> {
    let mut d = start;
    for _ in 0..BUSINESS_DAY_SEARCH_LIMIT {
        let stepped = if forward {
            d.checked_add_days(ONE_DAY)
        } else {
            d.checked_sub_days(ONE_DAY)
        };
        d = stepped
            .filter(|next| checked_year(next.year()).is_ok())
            .ok_or(CalendarError::DateOutOfRange(d))?;
        if calendar.is_business_day(d) {
            return Ok(d);
        }
    }
    warn!(calendar = calendar.name(), %start, forward, "business day search exhausted");
    Err(CalendarError::BusinessDaySearchExhausted { start, limit: BUSINESS_DAY_SEARCH_LIMIT })
}

/// Business-day classification over a set of yearly holidays plus weekends.
///
/// Implementors provide the holiday set per year and the weekend rule; every
/// other query derives from those two. All queries are pure.
pub trait HolidayCalendar: Send + Sync {
    fn name(&self) -> &str;

    /// Holidays of `year` sorted ascending by date.
    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError>;

    fn is_weekend(&self, d: NaiveDate) -> bool;

    /// # Panics
    /// If the holidays of `d.year()` cannot be computed (year < 1).
    fn is_holiday(&self, d: NaiveDate) -> bool {
        holidays_of_date_year(self, d).iter().any(|h| h.date() == d)
    }

    /// `None` is the normal answer for ordinary days.
    ///
    /// # Panics
    /// Same as [`HolidayCalendar::is_holiday`].
    fn holiday_name(&self, d: NaiveDate) -> Option<String> {
        holidays_of_date_year(self, d)
            .into_iter()
            .find(|h| h.date() == d)
            .map(|h| h.name().to_owned())
    }

    fn is_non_business_day(&self, d: NaiveDate) -> bool {
        self.is_weekend(d) || self.is_holiday(d)
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_non_business_day(d)
    }

    fn describe_day(&self, d: NaiveDate) -> DayInfo {
        let is_weekend = self.is_weekend(d);
        let holiday_name = self.holiday_name(d);
        let is_holiday = holiday_name.is_some();
        DayInfo {
            is_non_business_day: is_weekend || is_holiday,
            is_weekend,
            is_holiday,
            holiday_name,
            day_of_week_name: weekday_name(d.weekday())
        }
    }

    /// First business day strictly after `d`.
    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        step_to_business_day(self, d, true)
    }

    /// Last business day strictly before `d`.
    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        step_to_business_day(self, d, false)
    }

    /// Moves `n` business days away from `horizon`; `n == 0` returns `horizon` as is.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate, CalendarError> {
        let mut d = horizon;
        for _ in 0..n.unsigned_abs() {
            d = if n > 0 {
                self.next_business_day(d)?
            } else {
                self.previous_business_day(d)?
            };
        }
        Ok(d)
    }

    /// Business days in `(d1, d2]`, negated when `d2 < d1`.
    fn business_days_between(&self, d1: NaiveDate, d2: NaiveDate) -> i64 {
        if d1 == d2 {
            return 0;
        }
        let (from, to, sign) = if d1 < d2 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = RangeOfDates::new(from, to)
            .iter()
            .skip(1)
            .filter(|d| self.is_business_day(*d))
            .count() as i64;
        sign * count
    }

    fn first_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
        let year = checked_year(year)?;
        let fom = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::InvalidMonthDay { month, day: 1 })?;
        if self.is_business_day(fom) {
            return Ok(fom);
        }
        let d = self.next_business_day(fom)?;
        if d.month() == month {
            Ok(d)
        } else {
            Err(CalendarError::BusinessDaySearchExhausted { start: fom, limit: days_of_month(year, month) })
        }
    }

    fn last_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
        let year = checked_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonthDay { month, day: 1 });
        }
        let last_day = days_of_month(year, month);
        let eom = NaiveDate::from_ymd_opt(year, month, last_day)
            .ok_or(CalendarError::InvalidYear(year))?;
        if self.is_business_day(eom) {
            return Ok(eom);
        }
        let d = self.previous_business_day(eom)?;
        if d.month() == month {
            Ok(d)
        } else {
            Err(CalendarError::BusinessDaySearchExhausted { start: eom, limit: last_day })
        }
    }

    /// Holidays within the inclusive range, in date order. Argument order does not matter.
    fn holidays_between(&self, d1: NaiveDate, d2: NaiveDate) -> Result<Vec<Holiday>, CalendarError> {
        let range = RangeOfDates::new(d1, d2);
        let mut holidays = Vec::new();
        for year in range.start_date().year()..=range.end_date().year() {
            holidays.extend(
                self.holidays_for_year(year)?
                    .into_iter()
                    .filter(|h| range.contain(h.date()))
            );
        }
        Ok(holidays)
    }
}
