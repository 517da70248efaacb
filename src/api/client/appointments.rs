use crate::api::SalonApi;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::appointment::{AvailableHours, BookAppointmentCredentials};
use crate::models::catalog::{Catalog, Skill};
use chrono::NaiveDate;

impl<T: Transport> SalonApi<T> {
    /// Free slots per day for the given services, computed by the backend.
    pub fn get_available_hours(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        services: &[Skill],
    ) -> AppResult<AvailableHours> {
        let services = services
            .iter()
            .map(|s| s.code())
            .collect::<Vec<_>>()
            .join(",");
        let request = ApiRequest::get("/api/client/get-available-hours")
            .query("startDate", start.format("%Y-%m-%d"))
            .query("endDate", end.format("%Y-%m-%d"))
            .query("services", services);
        self.fetch_data(request)
    }

    pub fn book_appointment(
        &self,
        client_id: &str,
        credentials: &BookAppointmentCredentials,
    ) -> AppResult<String> {
        let path = format!("/api/client/{}/book-appointment", client_id);
        self.fetch_message(ApiRequest::post(path).json(credentials)?)
    }
}
