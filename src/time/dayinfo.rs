use serde::Serialize;

/// Everything a date picker needs to render a single day.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayInfo {
    pub is_non_business_day: bool,
    pub is_weekend: bool,
    pub is_holiday: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    pub day_of_week_name: &'static str
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let info = DayInfo {
            is_non_business_day: true,
            is_weekend: false,
            is_holiday: true,
            holiday_name: Some("Año Nuevo".to_owned()),
            day_of_week_name: "Miércoles"
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["isNonBusinessDay"], true);
        assert_eq!(json["holidayName"], "Año Nuevo");
        assert_eq!(json["dayOfWeekName"], "Miércoles");
    }

    #[test]
    fn omits_missing_holiday_name() {
        let info = DayInfo {
            is_non_business_day: false,
            is_weekend: false,
            is_holiday: false,
            holiday_name: None,
            day_of_week_name: "Martes"
        };
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("holidayName").is_none());
    }
}
