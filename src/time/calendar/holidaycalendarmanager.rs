use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use tracing::debug;

use crate::manager::manager::{IManager, Manager};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::precomputedcalendar::PrecomputedCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::holiday::{Holiday, HolidayKind};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekdayshift::WeekdayShiftRule;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;

pub type HolidayCalendarManager = Manager<dyn HolidayCalendar>;

fn shift_rule(move_to_monday: bool) -> WeekdayShiftRule {
    if move_to_monday {
        WeekdayShiftRule::next_monday()
    } else {
        WeekdayShiftRule::unadjusted()
    }
}

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    name: String,
    shift_days: i64,
    #[serde(default)]
    move_to_monday: bool
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    let holiday = EasterRelatedHoliday::new(
        json_prop.name,
        json_prop.shift_days,
        shift_rule(json_prop.move_to_monday)
    );
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    name: String,
    month: u32,
    day: u32,
    #[serde(default)]
    move_to_monday: bool
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(
        json_prop.name,
        json_prop.month,
        json_prop.day,
        shift_rule(json_prop.move_to_monday)
    )?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(json),
        HolidayType::FixedDate     => fixed_date_holiday_from_json(json)
    }
}

#[derive(Deserialize)]
enum CalendarType {
    SimpleCalendar
}

#[derive(Deserialize)]
struct AdditionalHolidayJsonProp {
    date: NaiveDate,
    name: String
}

#[derive(Deserialize, Default)]
struct SimpleCalendarPrecomputationJsonProp {
    apply: bool,
    #[serde(default)]
    start_year: i32,
    #[serde(default)]
    end_year: i32
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    name: String,
    #[allow(dead_code)]
    calendar_type: CalendarType,
    weekends: HashSet<Weekday>,
    recurring_holidays: Vec<serde_json::Value>,
    #[serde(default)]
    additional_holidays: Vec<AdditionalHolidayJsonProp>,
    #[serde(default)]
    precomputation: SimpleCalendarPrecomputationJsonProp
}

/// Builds a calendar from its JSON definition, e.g.
///
/// ```json
/// {
///   "name": "ColombiaEmiliani",
///   "calendar_type": "SimpleCalendar",
///   "weekends": ["Sat", "Sun"],
///   "recurring_holidays": [
///     { "holiday_type": "FixedDate", "name": "Reyes Magos", "month": 1, "day": 6, "move_to_monday": true },
///     { "holiday_type": "EasterRelated", "name": "Viernes Santo", "shift_days": -2 }
///   ],
///   "additional_holidays": [ { "date": "2026-03-08", "name": "Elecciones legislativas" } ],
///   "precomputation": { "apply": true, "start_year": 2020, "end_year": 2035 }
/// }
/// ```
pub fn get_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let calendar_json: SimpleCalendarJsonProp = parse_json_value(json_value)?;
    let mut recurring_holidays: Vec<Arc<dyn RecurringHoliday>> = Vec::with_capacity(calendar_json.recurring_holidays.len());
    for recurring_holiday_json in calendar_json.recurring_holidays.into_iter() {
        recurring_holidays.push(get_recurring_holiday_from_json(recurring_holiday_json)?);
    }
    let additional_holidays: Vec<Holiday> = calendar_json.additional_holidays
        .into_iter()
        .map(|h| Holiday::new(h.date, h.name, HolidayKind::Fixed))
        .collect();

    debug!(
        calendar = calendar_json.name.as_str(),
        recurring = recurring_holidays.len(),
        additional = additional_holidays.len(),
        "loaded holiday calendar definition"
    );

    let simple_calendar = SimpleCalendar::new(
        calendar_json.name,
        calendar_json.weekends,
        recurring_holidays,
        additional_holidays
    );

    if calendar_json.precomputation.apply {
        let precomputed = PrecomputedCalendar::new(
            simple_calendar,
            calendar_json.precomputation.start_year,
            calendar_json.precomputation.end_year
        )?;
        Ok(Arc::new(precomputed))
    } else {
        Ok(Arc::new(simple_calendar))
    }
}

/// Manager preloaded with the built-in Colombian calendar.
pub fn new_holiday_calendar_manager() -> HolidayCalendarManager {
    let manager: HolidayCalendarManager = Manager::new(get_calendar_from_json);
    let colombia = SimpleCalendar::colombia();
    manager.map().insert(colombia.name().to_owned(), Arc::new(colombia));
    manager
}
