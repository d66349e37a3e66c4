use std::collections::HashMap;

use chrono::{
    Datelike,
    Duration,
    NaiveDate,
    Weekday
};

/// Array-based weekday shift rule for O(1) lookup.
/// Indexed by `Weekday::num_days_from_monday()` (0=Monday, 6=Sunday);
/// `None` leaves dates on that weekday where they are.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct WeekdayShiftRule {
    rule: [Option<i64>; 7]
}

impl WeekdayShiftRule {
    pub fn new(shift_map: &HashMap<Weekday, i64>) -> WeekdayShiftRule {
        let mut rule: [Option<i64>; 7] = [None; 7];
        for (&weekday, &shift_days) in shift_map {
            if shift_days != 0 {
                rule[weekday.num_days_from_monday() as usize] = Some(shift_days);
            }
        }
        WeekdayShiftRule { rule }
    }

    pub fn unadjusted() -> WeekdayShiftRule {
        WeekdayShiftRule::default()
    }

    /// Ley Emiliani: a holiday not falling on a Monday moves to the following Monday.
    pub fn next_monday() -> WeekdayShiftRule {
        let mut rule: [Option<i64>; 7] = [None; 7];
        for idx in 1..7 {
            rule[idx] = Some(7 - idx as i64);
        }
        WeekdayShiftRule { rule }
    }

    pub fn is_unadjusted(&self) -> bool {
        self.rule.iter().all(Option::is_none)
    }

    /// Largest forward shift; a fixed date this close to Dec 31 may land in the next year.
    pub fn max_forward_days(&self) -> i64 {
        self.rule.iter().flatten().copied().max().unwrap_or(0).max(0)
    }

    /// Largest backward shift, as a positive number of days.
    pub fn max_backward_days(&self) -> i64 {
        -self.rule.iter().flatten().copied().min().unwrap_or(0).min(0)
    }

    pub fn shift_map(&self) -> HashMap<Weekday, i64> {
        let mut result = HashMap::new();
        for (idx, shift) in self.rule.iter().enumerate() {
            if let (Some(days), Ok(weekday)) = (shift, Weekday::try_from(idx as u8)) {
                result.insert(weekday, *days);
            }
        }
        result
    }

    /// Returns `None` only when the shift leaves chrono's date range.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        match self.rule[d.weekday().num_days_from_monday() as usize] {
            Some(days) => d.checked_add_signed(Duration::days(days)),
            None => Some(d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn next_monday_moves_every_other_weekday() {
        let rule = WeekdayShiftRule::next_monday();
        // 2025-01-06 is a Monday
        assert_eq!(rule.adjust(ymd(2025, 1, 6)), Some(ymd(2025, 1, 6)));
        for offset in 1..7 {
            let d = ymd(2025, 1, 6) + Duration::days(offset);
            assert_eq!(rule.adjust(d), Some(ymd(2025, 1, 13)));
        }
        assert_eq!(rule.max_forward_days(), 6);
        assert_eq!(rule.max_backward_days(), 0);
    }

    #[test]
    fn unadjusted_is_identity() {
        let rule = WeekdayShiftRule::unadjusted();
        assert!(rule.is_unadjusted());
        assert_eq!(rule.adjust(ymd(2025, 3, 19)), Some(ymd(2025, 3, 19)));
        assert!(rule.shift_map().is_empty());
    }

    #[test]
    fn shift_map_round_trips_through_new() {
        let mut map = HashMap::new();
        map.insert(Weekday::Sat, -1);
        map.insert(Weekday::Sun, 1);
        let rule = WeekdayShiftRule::new(&map);
        assert_eq!(rule.shift_map(), map);
        assert_eq!(rule.max_backward_days(), 1);
    }
}
