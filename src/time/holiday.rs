use std::fmt;

use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum HolidayKind {
    /// Same Gregorian month/day every year.
    Fixed,
    /// Offset in days from Easter Sunday.
    Moveable
}

/// One occurrence of a public holiday. Dates carry no time of day.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct Holiday {
    date: NaiveDate,
    name: String,
    kind: HolidayKind
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>, kind: HolidayKind) -> Holiday {
        Holiday { date, name: name.into(), kind }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> HolidayKind {
        self.kind
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.name)
    }
}
