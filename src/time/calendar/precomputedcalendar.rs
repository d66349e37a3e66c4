use std::fmt;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::holiday::Holiday;
use crate::time::utility::checked_year;

/// Holiday dates of one year as a bitset over day-of-year (0 = Jan 1).
/// 3 × u128 covers 366 days.
#[derive(Clone)]
struct YearBitset {
    bits: [u128; 3],
}

impl YearBitset {
    fn new() -> Self {
        YearBitset { bits: [0; 3] }
    }

    #[inline]
    fn set(&mut self, day_of_year: u32) {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        if block < 3 {
            self.bits[block] |= 1u128 << bit;
        }
    }

    #[inline]
    fn is_set(&self, day_of_year: u32) -> bool {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        block < 3 && (self.bits[block] & (1u128 << bit)) != 0
    }

    fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }
}

struct PrecomputedYear {
    bitset: YearBitset,
    holidays: Vec<Holiday>
}

/// Holiday sets of `[start_year, end_year]` computed once up front.
///
/// Entries are keyed by year only and never invalidated: a year's holidays
/// cannot change. Years outside the range are computed on demand by the raw
/// calendar.
pub struct PrecomputedCalendar {
    raw_calendar: SimpleCalendar,
    start_year: i32,
    years: Vec<PrecomputedYear>
}

impl PrecomputedCalendar {
    pub fn new(raw_calendar: SimpleCalendar,
               start_year: i32,
               end_year: i32) -> Result<PrecomputedCalendar, CalendarError> {
        let start_year = checked_year(start_year)?;
        let end_year = checked_year(end_year)?;
        let n_years = (end_year - start_year + 1).max(0) as usize;
        let mut years = Vec::with_capacity(n_years);

        for year in start_year..=end_year {
            let holidays = raw_calendar.holidays_for_year(year)?;
            let mut bitset = YearBitset::new();
            for h in holidays.iter() {
                bitset.set(h.date().ordinal0());
            }
            years.push(PrecomputedYear { bitset, holidays });
        }

        debug!(calendar = raw_calendar.name(), start_year, end_year, "precomputed holiday sets");

        Ok(PrecomputedCalendar {
            raw_calendar,
            start_year,
            years
        })
    }

    pub fn raw_calendar(&self) -> &SimpleCalendar {
        &self.raw_calendar
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + (self.len() as i32) - 1
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn in_precomputation_range(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year()
    }

    fn precomputed(&self, year: i32) -> Option<&PrecomputedYear> {
        if self.in_precomputation_range(year) {
            self.years.get((year - self.start_year) as usize)
        } else {
            None
        }
    }

    pub fn stats(&self) -> PrecomputedStats {
        PrecomputedStats {
            num_years: self.len(),
            start_year: self.start_year,
            end_year: self.end_year(),
            total_holidays: self.years.iter().map(|y| y.bitset.count()).sum()
        }
    }
}

pub struct PrecomputedStats {
    pub num_years: usize,
    pub start_year: i32,
    pub end_year: i32,
    pub total_holidays: u32
}

impl fmt::Display for PrecomputedStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "years {}-{} ({} years), {} distinct holiday dates",
            self.start_year,
            self.end_year,
            self.num_years,
            self.total_holidays
        )
    }
}

impl HolidayCalendar for PrecomputedCalendar {
    fn name(&self) -> &str {
        self.raw_calendar.name()
    }

    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        match self.precomputed(year) {
            Some(precomputed) => Ok(precomputed.holidays.clone()),
            None => self.raw_calendar.holidays_for_year(year)
        }
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.raw_calendar.is_weekend(d)
    }

    #[inline]
    fn is_holiday(&self, d: NaiveDate) -> bool {
        match self.precomputed(d.year()) {
            Some(precomputed) => precomputed.bitset.is_set(d.ordinal0()),
            None => self.raw_calendar.is_holiday(d)
        }
    }
}
