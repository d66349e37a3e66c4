use chrono::{Datelike, NaiveDate};

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::holiday::{Holiday, HolidayKind};


pub trait RecurringHoliday: Send + Sync {

    fn name(&self) -> &str;

    fn kind(&self) -> HolidayKind;

    /// Occurrences of this rule that fall inside `year`, usually exactly one.
    fn get_holiday(&self, year: i32) -> Result<Vec<Holiday>, CalendarError>;

    fn is_holiday(&self, d: &NaiveDate) -> Result<bool, CalendarError> {
        let holidays = self.get_holiday(d.year())?;
        Ok(holidays.iter().any(|h| h.date() == *d))
    }
}
