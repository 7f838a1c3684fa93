use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;
use tracing::debug;

use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::recurringholiday::{NamedHoliday, RecurringHoliday};
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustment;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;

pub type HolidayCalendarManager = Manager<Arc<dyn HolidayCalendar>>;

fn federal_adjustment_map() -> HashMap<Weekday, WeekendAdjustment> {
    HashMap::from([
        (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
        (Weekday::Sun, WeekendAdjustment::NextWeekday)
    ])
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_recurring_holiday(
            name,
            format!("month {} / occurrence {} out of range", json_prop.month, json_prop.n)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

fn last_weekday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    let holiday = LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)
        .ok_or_else(|| ManagerError::invalid_recurring_holiday(
            name,
            format!("month {} out of range", json_prop.month)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    #[serde(default = "federal_adjustment_map")]
    weekend_adjustment_map: HashMap<Weekday, WeekendAdjustment>
}

fn fixed_date_holiday_from_json(name: &str, json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.month, json_prop.day, &json_prop.weekend_adjustment_map)
        .ok_or_else(|| ManagerError::invalid_recurring_holiday(
            name,
            format!("{}/{} is not a calendar date", json_prop.month, json_prop.day)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    FixedDate,
    NthWeekday,
    LastWeekday
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    name: String,
    holiday_type: HolidayType
}

pub fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<NamedHoliday, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    let name = holiday_type_obj.name.as_str();
    let rule = match holiday_type_obj.holiday_type {
        HolidayType::FixedDate   => fixed_date_holiday_from_json(name, json)?,
        HolidayType::LastWeekday => last_weekday_from_json(name, json)?,
        HolidayType::NthWeekday  => nth_weekday_from_json(name, json)?
    };
    debug!(holiday = name, "loaded recurring holiday");
    Ok(NamedHoliday::new(holiday_type_obj.name, rule))
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    weekends: HashSet<Weekday>,
    recurring_holidays: Vec<serde_json::Value>
}

pub fn get_simple_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let holiday_calendar_json: SimpleCalendarJsonProp = parse_json_value(json_value)?;
    let mut recurring_holidays: Vec<NamedHoliday> = Vec::with_capacity(holiday_calendar_json.recurring_holidays.len());
    for recurring_holiday_json in holiday_calendar_json.recurring_holidays {
        recurring_holidays.push(get_recurring_holiday_from_json(recurring_holiday_json)?);
    }

    let simple_calendar = SimpleCalendar::new(
        holiday_calendar_json.weekends,
        recurring_holidays
    );
    Ok(Arc::new(simple_calendar))
}

pub fn new_holiday_calendar_manager() -> HolidayCalendarManager {
    Manager::new(get_simple_calendar_from_json)
}
