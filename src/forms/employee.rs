use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::{AppError, AppResult};
use crate::forms::{FormOutcome, INVALID_EMAIL, ensure, has_min_len, is_valid_email};
use crate::models::catalog::{Skill, known};
use crate::models::employee::{
    CreateEmployeeCredentials, DaySchedule, Employee, UpdateEmployeeCredentials, WEEK,
    WorkSchedule, WorkScheduleEnvelope, weekday_key,
};
use crate::utils::date::{parse_date, parse_time, today};
use chrono::{NaiveDate, NaiveTime};

const MISSING_ID: &str = "The employee doesn't have an id";

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub employee_id: Option<String>,
    pub complete_name: String,
    pub email: String,
    pub skills: Vec<Skill>,
    pub work_schedule: WorkSchedule,
    pub hire_date: NaiveDate,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            employee_id: None,
            complete_name: String::new(),
            email: String::new(),
            skills: Vec::new(),
            work_schedule: WorkSchedule::default(),
            hire_date: today(),
        }
    }
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: Some(employee.employee_id.clone()),
            complete_name: employee.complete_name.clone(),
            email: employee.email.clone(),
            skills: known(&employee.skills),
            work_schedule: employee.work_schedule.work_schedule.clone(),
            hire_date: employee
                .hire_date
                .as_deref()
                .and_then(|d| parse_date(d.get(..10).unwrap_or(d)))
                .unwrap_or_else(today),
        }
    }

    fn validate_fields(&self) -> AppResult<()> {
        ensure(
            has_min_len(&self.complete_name, 3),
            "The employee name must be at least 3 characters long",
        )?;
        ensure(is_valid_email(&self.email), INVALID_EMAIL)?;
        ensure(
            !self.skills.is_empty(),
            "The employee must have at least one skill",
        )?;
        Ok(())
    }

    /// A day is either off (both ends empty) or runs from an earlier start
    /// to a later end.
    fn validate_schedule(&self) -> AppResult<()> {
        for day in WEEK {
            let hours = self.work_schedule.day(day);
            if hours.is_off() {
                continue;
            }
            ensure(
                parse_hours(hours).is_some_and(|(start, end)| start < end),
                &format!(
                    "Invalid schedule for {}: start time must be before end time",
                    weekday_key(day)
                ),
            )?;
        }
        Ok(())
    }

    pub fn validate_create(&self) -> AppResult<()> {
        self.validate_fields()?;
        self.validate_schedule()
    }

    pub fn validate_update(&self) -> AppResult<()> {
        self.validate_fields()?;
        self.require_id().map(|_| ())
    }

    fn require_id(&self) -> AppResult<&str> {
        self.employee_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_ID.to_string()))
    }

    pub fn create_credentials(&self) -> CreateEmployeeCredentials {
        CreateEmployeeCredentials {
            complete_name: self.complete_name.trim().to_string(),
            email: self.email.trim().to_string(),
            work_schedule: WorkScheduleEnvelope {
                work_schedule: self.work_schedule.clone(),
            },
            skills: self.skills.clone(),
            hire_date: self.hire_date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn update_credentials(&self) -> UpdateEmployeeCredentials {
        UpdateEmployeeCredentials {
            complete_name: self.complete_name.trim().to_string(),
            email: self.email.trim().to_string(),
            skills: self.skills.clone(),
        }
    }

    pub fn create<T: Transport>(&self, api: &SalonApi<T>) -> FormOutcome {
        FormOutcome::from_result(
            self.validate_create()
                .and_then(|_| api.create_employee(&self.create_credentials())),
        )
    }

    pub fn update<T: Transport>(&self, api: &SalonApi<T>) -> FormOutcome {
        FormOutcome::from_result(self.validate_update().and_then(|_| {
            let id = self.require_id()?;
            api.update_employee(id, &self.update_credentials())
        }))
    }

    pub fn delete<T: Transport>(&self, api: &SalonApi<T>) -> FormOutcome {
        FormOutcome::from_result(self.require_id().and_then(|id| api.delete_employee(id)))
    }
}

fn parse_hours(hours: &DaySchedule) -> Option<(NaiveTime, NaiveTime)> {
    let start = parse_time(hours.start_time.as_deref()?)?;
    let end = parse_time(hours.end_time.as_deref()?)?;
    Some((start, end))
}
