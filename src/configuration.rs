use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::IManager;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::{
    HolidayCalendarManager,
    new_holiday_calendar_manager
};
use crate::time::calendar::simplecalendar::COLOMBIA;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>,
    #[serde(default)]
    default_calendar: Option<String>
}

pub struct Configuration {
    holiday_calendar_manager_cell: RefCell<HolidayCalendarManager>,
    default_calendar_cell: RefCell<String>
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            holiday_calendar_manager_cell: RefCell::new(new_holiday_calendar_manager()),
            default_calendar_cell: RefCell::new(COLOMBIA.to_owned())
        }
    }

    pub fn holiday_calendar_manager(&self) -> RefMut<'_, HolidayCalendarManager> {
        self.holiday_calendar_manager_cell.borrow_mut()
    }

    pub fn default_calendar_name(&self) -> String {
        self.default_calendar_cell.borrow().clone()
    }

    pub fn default_calendar(&self) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
        let name = self.default_calendar_name();
        self.holiday_calendar_manager().get(&name)
    }

    pub fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.apply(json_prop)
    }

    pub fn from_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.apply(json_prop)
    }

    fn apply(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        let manager = self.holiday_calendar_manager();
        manager.insert_obj_from_json_vec(&json_prop.holiday_calendar)?;
        if let Some(name) = json_prop.default_calendar {
            // must name a registered calendar
            manager.get(&name)?;
            *self.default_calendar_cell.borrow_mut() = name;
        }
        debug!(
            calendars = json_prop.holiday_calendar.len(),
            default_calendar = self.default_calendar_name().as_str(),
            "configuration loaded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn defaults_to_colombia() {
        let config = Configuration::new();
        assert_eq!(config.default_calendar_name(), "Colombia");
        let calendar = config.default_calendar().unwrap();
        assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 8, 7).unwrap()));
    }

    #[test]
    fn loads_calendars_and_switches_default() {
        let config = Configuration::new();
        config.from_str(r#"{
            "holiday_calendar": [
                {
                    "name": "SoloFinesDeSemana",
                    "calendar_type": "SimpleCalendar",
                    "weekends": ["Sat", "Sun"],
                    "recurring_holidays": []
                }
            ],
            "default_calendar": "SoloFinesDeSemana"
        }"#).unwrap();
        let calendar = config.default_calendar().unwrap();
        assert_eq!(calendar.name(), "SoloFinesDeSemana");
        assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }

    #[test]
    fn unknown_default_calendar_is_rejected() {
        let config = Configuration::new();
        let result = config.from_str(r#"{ "default_calendar": "Narnia" }"#);
        assert!(matches!(result, Err(ManagerError::NameNotFoundError(_))));
        assert_eq!(config.default_calendar_name(), "Colombia");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let config = Configuration::new();
        let result = config.from_reader(Path::new("/nonexistent/colcalendar.json"));
        assert!(matches!(result, Err(ManagerError::IOError(_))));
    }
}
