use crate::api::SalonApi;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::appointment::{Appointment, EmployeeSummary};
use crate::models::page::Page;
use crate::models::review::Review;

impl<T: Transport> SalonApi<T> {
    pub fn get_appointment_history(&self, client_id: &str, page: u32) -> AppResult<Page<Appointment>> {
        self.fetch_page(&format!("/api/client/{}/appointment-history", client_id), page)
    }

    pub fn cancel_appointment(&self, client_id: &str, appointment_id: &str) -> AppResult<String> {
        self.fetch_message(ApiRequest::post(format!(
            "/api/client/{}/cancel-appointment/{}",
            client_id, appointment_id
        )))
    }

    pub fn leave_review(&self, appointment_id: &str, review: &Review) -> AppResult<String> {
        let path = format!("/api/client/{}/leave-review", appointment_id);
        self.fetch_message(ApiRequest::post(path).json(review)?)
    }

    pub fn get_employee(&self, employee_id: &str) -> AppResult<EmployeeSummary> {
        self.fetch_data(ApiRequest::get(format!(
            "/api/client/get-employee/{}",
            employee_id
        )))
    }
}
