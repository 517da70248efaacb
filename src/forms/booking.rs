use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::{AppError, AppResult};
use crate::forms::{FormOutcome, ensure};
use crate::models::appointment::{AvailableHours, BookAppointmentCredentials};
use crate::models::catalog::{Skill, codes};
use crate::utils::date::{parse_date_time, today};
use chrono::NaiveDate;

const MISSING_RANGE: &str = "Please select a date range and at least one service.";
const MISSING_SLOT: &str = "Please select a date and hour for the appointment";
const REVERSED_RANGE: &str = "Start date cannot be after end date.";

/// Availability search followed by booking one of the returned slots.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub services: Vec<Skill>,
    /// `YYYY-MM-DDTHH:MM`, as built by [`crate::utils::date::slot`].
    pub selected_slot: Option<String>,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            start_date: Some(today()),
            end_date: None,
            services: Vec::new(),
            selected_slot: None,
        }
    }
}

impl BookingForm {
    pub fn validate_search(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err(AppError::Validation(MISSING_RANGE.to_string()));
        };
        ensure(!self.services.is_empty(), MISSING_RANGE)?;
        ensure(start <= end, REVERSED_RANGE)?;
        Ok((start, end))
    }

    pub fn available_hours<T: Transport>(&self, api: &SalonApi<T>) -> AppResult<AvailableHours> {
        let (start, end) = self.validate_search()?;
        api.get_available_hours(start, end, &self.services)
    }

    pub fn validate_booking(&self, client_id: Option<&str>) -> AppResult<(String, String)> {
        let slot = self
            .selected_slot
            .as_deref()
            .filter(|s| parse_date_time(s).is_some())
            .ok_or_else(|| AppError::Validation(MISSING_SLOT.to_string()))?;
        let client_id = client_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::Validation("The client doesn't have an id".to_string()))?;
        Ok((slot.to_string(), client_id.to_string()))
    }

    pub fn book<T: Transport>(&self, api: &SalonApi<T>, client_id: Option<&str>) -> FormOutcome {
        FormOutcome::from_result(self.validate_booking(client_id).and_then(|(slot, id)| {
            api.book_appointment(
                &id,
                &BookAppointmentCredentials {
                    date: slot,
                    services_list: codes(&self.services),
                },
            )
        }))
    }
}
