use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::IManager;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::{
    HolidayCalendarManager,
    new_holiday_calendar_manager
};
use crate::time::calendar::unitedstates::{
    UNITED_STATES_FEDERAL,
    united_states_federal_calendar
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>
}

/// Named calendars available to the application.
///
/// A fresh configuration already holds the built-in
/// `"UnitedStatesFederal"` calendar; loading a file adds calendars and
/// replaces any with the same name.
pub struct Configuration {
    holiday_calendar_manager_cell: RefCell<HolidayCalendarManager>
}


impl Configuration {
    pub fn new() -> Configuration {
        let holiday_calendar_manager = new_holiday_calendar_manager();
        if let Some(calendar) = united_states_federal_calendar() {
            holiday_calendar_manager.insert(UNITED_STATES_FEDERAL.to_owned(), Arc::new(calendar));
        }
        Configuration {
            holiday_calendar_manager_cell: RefCell::new(holiday_calendar_manager)
        }
    }

    pub fn holiday_calendar_manager(&self) -> RefMut<'_, HolidayCalendarManager> {
        self.holiday_calendar_manager_cell.borrow_mut()
    }

    pub fn holiday_calendar(&self, name: &str) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
        self.holiday_calendar_manager().get(name)
    }

    pub fn from_json_value(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        let holiday_calendar_manager = self.holiday_calendar_manager();
        holiday_calendar_manager.insert_obj_from_json_vec(&json_prop.holiday_calendar)?;
        info!(n_calendars = json_prop.holiday_calendar.len(), "loaded holiday calendars");
        Ok(())
    }

    pub fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        info!(path = %file_path.display(), "reading configuration");
        self.from_json_value(json_value)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn built_in_calendar_is_registered() {
        let config = Configuration::new();
        let calendar = config.holiday_calendar(UNITED_STATES_FEDERAL).unwrap();
        assert!(calendar.is_holiday(date(2024, 11, 28)));
    }

    #[test]
    fn unknown_calendar_is_an_error() {
        let config = Configuration::new();
        assert!(matches!(
            config.holiday_calendar("Atlantis"),
            Err(ManagerError::NameNotFoundError(_))
        ));
    }

    #[test]
    fn json_calendars_are_added() {
        let config = Configuration::new();
        config.from_json_value(json!({
            "holiday_calendar": [{
                "name": "FourDayWeek",
                "weekends": ["Fri", "Sat", "Sun"],
                "recurring_holidays": []
            }]
        })).unwrap();
        let calendar = config.holiday_calendar("FourDayWeek").unwrap();
        // 2025-01-03 is a Friday
        assert!(calendar.is_weekend(date(2025, 1, 3)));
        assert_eq!(
            config.holiday_calendar_manager().names(),
            vec!["FourDayWeek".to_owned(), UNITED_STATES_FEDERAL.to_owned()]
        );
    }

    #[test]
    fn empty_document_loads_nothing() {
        let config = Configuration::new();
        config.from_json_value(json!({})).unwrap();
        assert_eq!(config.holiday_calendar_manager().names().len(), 1);
    }
}
