use std::collections::HashSet;
use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holiday::Holiday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::utility::checked_year;

pub const COLOMBIA: &str = "Colombia";

/// Weekend days as a bitmask: Mon(0), Tue(1), ..., Sun(6).
#[derive(Clone, Copy, Debug)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    fn to_hashset(&self) -> HashSet<Weekday> {
        (0..7u8)
            .filter(|day| (self.0 & (1u8 << day)) != 0)
            .filter_map(|day| Weekday::try_from(day).ok())
            .collect()
    }
}

pub struct SimpleCalendar {
    name: String,
    weekends: WeekendMask,
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
    additional_holidays: Vec<Holiday>
}

impl SimpleCalendar {
    /// Creates a new SimpleCalendar.
    ///
    /// # Arguments
    /// * `name` - Registry name of the calendar
    /// * `weekends` - Weekdays that are never business days
    /// * `recurring_holidays` - Yearly holiday rules; their order breaks ties between same-date holidays
    /// * `additional_holidays` - One-off holidays
    pub fn new(
        name: impl Into<String>,
        weekends: HashSet<Weekday>,
        recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
        additional_holidays: Vec<Holiday>
    ) -> SimpleCalendar {
        SimpleCalendar {
            name: name.into(),
            weekends: WeekendMask::new(&weekends),
            recurring_holidays,
            additional_holidays
        }
    }

    /// Colombian public holidays as used for scheduling: six fixed dates and
    /// five Easter-relative dates, none moved to Monday.
    pub fn colombia() -> SimpleCalendar {
        let fixed = [
            ("Año Nuevo", 1, 1),
            ("Día del Trabajo", 5, 1),
            ("Independencia de Colombia", 7, 20),
            ("Batalla de Boyacá", 8, 7),
            ("Inmaculada Concepción", 12, 8),
            ("Navidad", 12, 25)
        ];
        let moveable = [
            ("Jueves Santo", -3),
            ("Viernes Santo", -2),
            ("Ascensión del Señor", 40),
            ("Corpus Christi", 60),
            ("Sagrado Corazón de Jesús", 68)
        ];

        let mut recurring_holidays: Vec<Arc<dyn RecurringHoliday>> = Vec::with_capacity(11);
        for (name, month, day) in fixed {
            let holiday = FixedDateHoliday::unadjusted(name, month, day)
                .expect("built-in Colombian holiday table is valid");
            recurring_holidays.push(Arc::new(holiday));
        }
        for (name, shift_days) in moveable {
            recurring_holidays.push(Arc::new(EasterRelatedHoliday::unadjusted(name, shift_days)));
        }

        SimpleCalendar::new(
            COLOMBIA,
            HashSet::from([Weekday::Sat, Weekday::Sun]),
            recurring_holidays,
            Vec::new()
        )
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        self.weekends.to_hashset()
    }

    pub fn recurring_holidays(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.recurring_holidays
    }

    pub fn additional_holidays(&self) -> &[Holiday] {
        &self.additional_holidays
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays_for_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarError> {
        let year = checked_year(year)?;
        let mut holidays = Vec::with_capacity(self.recurring_holidays.len());
        for r in self.recurring_holidays.iter() {
            holidays.extend(r.get_holiday(year)?);
        }
        holidays.extend(
            self.additional_holidays
                .iter()
                .filter(|h| h.date().year() == year)
                .cloned()
        );
        // stable: same-date holidays keep rule order
        holidays.sort_by_key(|h| h.date());
        Ok(holidays)
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }
}
