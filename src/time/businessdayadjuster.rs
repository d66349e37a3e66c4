use chrono::{
    Datelike,
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;

type Adjuster = fn(NaiveDate, &dyn HolidayCalendar) -> Result<NaiveDate, CalendarError>;

fn unadjust(d: NaiveDate, _calendar: &dyn HolidayCalendar) -> Result<NaiveDate, CalendarError> {
    Ok(d)
}

fn following(d: NaiveDate, calendar: &dyn HolidayCalendar) -> Result<NaiveDate, CalendarError> {
    calendar.next_business_day(d)
}

fn preceding(d: NaiveDate, calendar: &dyn HolidayCalendar) -> Result<NaiveDate, CalendarError> {
    calendar.previous_business_day(d)
}

fn modified_following(d: NaiveDate, calendar: &dyn HolidayCalendar) -> Result<NaiveDate, CalendarError> {
    let adjusted = calendar.next_business_day(d)?;
    if adjusted.month() != d.month() {
        calendar.previous_business_day(d)
    } else {
        Ok(adjusted)
    }
}

fn modified_preceding(d: NaiveDate, calendar: &dyn HolidayCalendar) -> Result<NaiveDate, CalendarError> {
    let adjusted = calendar.previous_business_day(d)?;
    if adjusted.month() != d.month() {
        calendar.next_business_day(d)
    } else {
        Ok(adjusted)
    }
}

/// Ties go to the earlier date.
fn nearest(d: NaiveDate, calendar: &dyn HolidayCalendar) -> Result<NaiveDate, CalendarError> {
    let previous_day = calendar.previous_business_day(d)?;
    let next_day = calendar.next_business_day(d)?;
    if (next_day - d).num_days() < (d - previous_day).num_days() {
        Ok(next_day)
    } else {
        Ok(previous_day)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    Unadjusted,
    Following,
    Preceding,
    ModifiedFollowing,
    ModifiedPreceding,
    Nearest
}

/// Moves a non-business day onto a business day following a convention.
#[derive(Clone, Copy)]
pub struct BusinessDayAdjuster {
    convention: BusinessDayConvention,
    adjuster: Adjuster
}

impl BusinessDayAdjuster {
    pub fn new(convention: BusinessDayConvention) -> BusinessDayAdjuster {
        let adjuster: Adjuster = match convention {
            BusinessDayConvention::Unadjusted => unadjust,
            BusinessDayConvention::Following => following,
            BusinessDayConvention::Preceding => preceding,
            BusinessDayConvention::ModifiedFollowing => modified_following,
            BusinessDayConvention::ModifiedPreceding => modified_preceding,
            BusinessDayConvention::Nearest => nearest
        };
        BusinessDayAdjuster { convention, adjuster }
    }

    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Business days are returned untouched.
    pub fn adjust(&self, d: NaiveDate, calendar: &dyn HolidayCalendar) -> Result<NaiveDate, CalendarError> {
        if calendar.is_non_business_day(d) {
            (self.adjuster)(d, calendar)
        } else {
            Ok(d)
        }
    }
}

impl From<BusinessDayConvention> for BusinessDayAdjuster {
    fn from(convention: BusinessDayConvention) -> Self {
        BusinessDayAdjuster::new(convention)
    }
}
