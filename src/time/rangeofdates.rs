use chrono::{
    Days,
    NaiveDate
};

/// Inclusive range of calendar dates; endpoints are reordered if reversed.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    /// Jan 1 through Dec 31 of `year`, or `None` outside chrono's range.
    pub fn year(year: i32) -> Option<RangeOfDates> {
        let start_date = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end_date = NaiveDate::from_ymd_opt(year, 12, 31)?;
        Some(RangeOfDates { start_date, end_date })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            next: Some(self.start_date),
            end_date: self.end_date
        }
    }

    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.iter().collect()
    }
}

impl IntoIterator for RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> RangeOfDatesIterator {
        self.iter()
    }
}

pub struct RangeOfDatesIterator {
    next: Option<NaiveDate>,
    end_date: NaiveDate
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end_date)?;
        self.next = current.checked_add_days(Days::new(1));
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reversed_endpoints_are_reordered() {
        let range = RangeOfDates::new(ymd(2025, 1, 10), ymd(2025, 1, 1));
        assert_eq!(range.start_date(), ymd(2025, 1, 1));
        assert_eq!(range.len(), 10);
        assert!(range.contain(ymd(2025, 1, 10)));
        assert!(!range.contain(ymd(2025, 1, 11)));
    }

    #[test]
    fn whole_year_ranges() {
        assert_eq!(RangeOfDates::year(2024).unwrap().len(), 366);
        let dates = RangeOfDates::year(2025).unwrap().to_vec();
        assert_eq!(dates.len(), 365);
        assert_eq!(dates.first(), Some(&ymd(2025, 1, 1)));
        assert_eq!(dates.last(), Some(&ymd(2025, 12, 31)));
    }

    #[test]
    fn iteration_stops_at_chrono_max() {
        let range = RangeOfDates::new(NaiveDate::MAX, NaiveDate::MAX);
        assert_eq!(range.into_iter().count(), 1);
    }
}
