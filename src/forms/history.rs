//! Actions on one appointment of the client's history.

use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::{AppError, AppResult};
use crate::forms::{FormOutcome, ensure, has_min_len};
use crate::models::appointment::Appointment;
use crate::models::review::{MAX_RATING, MIN_RATING, Review};
use chrono::NaiveDateTime;

fn appointment_id(appointment: &Appointment) -> AppResult<&str> {
    appointment
        .appointment_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("The appointment doesn't have an id".to_string()))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewForm {
    pub comment: String,
    pub rating: Option<u8>,
}

impl ReviewForm {
    /// Only appointments that already took place can be reviewed.
    pub fn validate(&self, appointment: &Appointment, now: NaiveDateTime) -> AppResult<Review> {
        ensure(
            has_min_len(&self.comment, 10),
            "The review must be at least 10 characters long",
        )?;
        let rating = self
            .rating
            .ok_or_else(|| AppError::Validation("Please enter a rating".to_string()))?;
        ensure(
            (MIN_RATING..=MAX_RATING).contains(&rating),
            "The rating must be between 1 - 5",
        )?;
        ensure(
            appointment.is_past(now),
            "Only past appointments can be reviewed",
        )?;
        Ok(Review {
            comment: self.comment.trim().to_string(),
            rating,
        })
    }

    pub fn submit<T: Transport>(
        &self,
        api: &SalonApi<T>,
        appointment: &Appointment,
        now: NaiveDateTime,
    ) -> FormOutcome {
        FormOutcome::from_result(self.validate(appointment, now).and_then(|review| {
            let id = appointment_id(appointment)?;
            api.leave_review(id, &review)
        }))
    }
}

/// Cancel an upcoming appointment.
pub fn cancel<T: Transport>(
    api: &SalonApi<T>,
    client_id: &str,
    appointment: &Appointment,
    now: NaiveDateTime,
) -> FormOutcome {
    let result = ensure(
        !appointment.is_past(now),
        "Past appointments cannot be cancelled",
    )
    .and_then(|_| appointment_id(appointment))
    .and_then(|id| api.cancel_appointment(client_id, id));
    FormOutcome::from_result(result)
}
