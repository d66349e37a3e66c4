use std::env;
use std::path::Path;
use std::process::ExitCode;

use chrono::NaiveDate;
use serde_json::json;

use colcalendar::configuration::Configuration;
use colcalendar::manager::managererror::ManagerError;
use colcalendar::time::calendar::holidaycalendar::HolidayCalendar;

const USAGE: &str = "usage: colcalendar [--config <file.json>] <YYYY | YYYY-MM-DD>";

fn run(args: &[String]) -> Result<String, String> {
    let config = Configuration::new();
    let mut query: Option<&str> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter.next().ok_or(USAGE)?;
            config.from_reader(Path::new(path)).map_err(|e: ManagerError| e.to_string())?;
        } else {
            query = Some(arg.as_str());
        }
    }
    let query = query.ok_or(USAGE)?;
    let calendar = config.default_calendar().map_err(|e| e.to_string())?;

    if let Ok(d) = NaiveDate::parse_from_str(query, "%Y-%m-%d") {
        let next = calendar.next_business_day(d).map_err(|e| e.to_string())?;
        let previous = calendar.previous_business_day(d).map_err(|e| e.to_string())?;
        let output = json!({
            "date": d,
            "calendar": calendar.name(),
            "day": calendar.describe_day(d),
            "nextBusinessDay": next,
            "previousBusinessDay": previous
        });
        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    } else {
        let year: i32 = query.parse().map_err(|_| USAGE.to_owned())?;
        let holidays = calendar.holidays_for_year(year).map_err(|e| e.to_string())?;
        Ok(holidays.iter().map(|h| h.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn year_query_lists_holidays_one_per_line() {
        let output = run(&args(&["2025"])).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "2025-01-01 Año Nuevo");
        assert_eq!(lines[10], "2025-12-25 Navidad");
    }

    #[test]
    fn date_query_describes_day_and_neighbours() {
        let output = run(&args(&["2025-12-24"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["date"], "2025-12-24");
        assert_eq!(json["calendar"], "Colombia");
        assert_eq!(json["day"]["isNonBusinessDay"], false);
        assert_eq!(json["day"]["dayOfWeekName"], "Miércoles");
        assert_eq!(json["nextBusinessDay"], "2025-12-26");
        assert_eq!(json["previousBusinessDay"], "2025-12-23");
    }

    #[test]
    fn bad_arguments_report_usage_or_error() {
        assert_eq!(run(&args(&[])).unwrap_err(), USAGE);
        assert_eq!(run(&args(&["--config"])).unwrap_err(), USAGE);
        assert_eq!(run(&args(&["next-year"])).unwrap_err(), USAGE);
        assert!(run(&args(&["--config", "/nonexistent/colcalendar.json", "2025"])).is_err());
        assert!(run(&args(&["0000-06-01"])).is_err());
    }
}
