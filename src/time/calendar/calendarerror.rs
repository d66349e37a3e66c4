use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("year {0} is outside the supported range (1 ..= chrono max)")]
    InvalidYear(i32),

    #[error("invalid month/day {month}/{day} for a fixed-date holiday")]
    InvalidMonthDay { month: u32, day: u32 },

    #[error("stepping from {0} leaves the representable date range")]
    DateOutOfRange(NaiveDate),

    #[error("no business day found within {limit} days of {start}")]
    BusinessDaySearchExhausted { start: NaiveDate, limit: u32 },
}
