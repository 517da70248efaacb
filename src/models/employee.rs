use crate::models::catalog::{Incoming, Skill};
use crate::models::review::Review;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Working hours for one weekday. Both ends empty means a day off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl DaySchedule {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
        }
    }

    pub fn is_off(&self) -> bool {
        blank(&self.start_time) && blank(&self.end_time)
    }
}

fn blank(v: &Option<String>) -> bool {
    v.as_deref().is_none_or(|s| s.trim().is_empty())
}

/// Fixed seven-day mapping, keyed `MONDAY`..`SUNDAY` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct WorkSchedule {
    #[serde(default)]
    pub monday: DaySchedule,
    #[serde(default)]
    pub tuesday: DaySchedule,
    #[serde(default)]
    pub wednesday: DaySchedule,
    #[serde(default)]
    pub thursday: DaySchedule,
    #[serde(default)]
    pub friday: DaySchedule,
    #[serde(default)]
    pub saturday: DaySchedule,
    #[serde(default)]
    pub sunday: DaySchedule,
}

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Wire name of a weekday (`MONDAY`, ...).
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

pub fn weekday_from_key(key: &str) -> Option<Weekday> {
    WEEK.iter()
        .copied()
        .find(|d| weekday_key(*d).eq_ignore_ascii_case(key.trim()))
}

impl WorkSchedule {
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, schedule: DaySchedule) {
        *self.day_mut(day) = schedule;
    }
}

/// The backend nests the schedule one level deep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkScheduleEnvelope {
    #[serde(default)]
    pub work_schedule: WorkSchedule,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub complete_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub work_schedule: WorkScheduleEnvelope,
    #[serde(default)]
    pub skills: Vec<Incoming<Skill>>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub hire_date: Option<String>,
    #[serde(default)]
    pub current_status: Option<String>,
    #[serde(default)]
    pub appointments: Vec<String>,
}

/// Body of `POST /api/admin/create-employee`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeCredentials {
    pub complete_name: String,
    pub email: String,
    pub work_schedule: WorkScheduleEnvelope,
    pub skills: Vec<Skill>,
    pub hire_date: String,
}

/// Body of `POST /api/admin/update-employee/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeCredentials {
    pub complete_name: String,
    pub email: String,
    pub skills: Vec<Skill>,
}
