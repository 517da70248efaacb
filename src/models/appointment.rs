use crate::models::catalog::{Incoming, Skill};
use crate::models::review::Review;
use crate::utils::date::parse_date_time;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Appointment as listed by the admin and history endpoints.
/// `price` and `status` are computed by the backend and shown verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default)]
    pub appointment_id: Option<String>,
    pub client_id: String,
    pub employee_id: String,
    pub appointment_date_time: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub status: String,
}

impl Appointment {
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        parse_date_time(&self.appointment_date_time)
    }

    /// An appointment whose date cannot be read counts as upcoming.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.scheduled_at().is_some_and(|at| at < now)
    }
}

/// Client record resolved from an appointment's `clientId`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
}

/// Reduced employee record used by the team screen and appointment details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub complete_name: String,
    #[serde(default)]
    pub skills: Vec<Incoming<Skill>>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Free slots per day: `"2025-06-01" -> ["09:00:00", "10:00:00"]`.
pub type AvailableHours = BTreeMap<String, Vec<String>>;

/// Body of `POST /api/client/{id}/book-appointment`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentCredentials {
    /// `YYYY-MM-DDTHH:MM`
    pub date: String,
    pub services_list: Vec<String>,
}
