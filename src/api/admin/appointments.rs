use crate::api::SalonApi;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::appointment::{Appointment, ClientInfo, EmployeeSummary};
use crate::models::page::Page;

impl<T: Transport> SalonApi<T> {
    pub fn get_all_appointments(&self, page: u32) -> AppResult<Page<Appointment>> {
        self.fetch_page("/api/admin/get-all-appointments", page)
    }

    pub fn get_client_info(&self, client_id: &str) -> AppResult<ClientInfo> {
        self.fetch_data(ApiRequest::get(format!(
            "/api/admin/get-client-info/{}",
            client_id
        )))
    }

    pub fn get_employee_info(&self, employee_id: &str) -> AppResult<EmployeeSummary> {
        self.fetch_data(ApiRequest::get(format!(
            "/api/admin/get-employee-info/{}",
            employee_id
        )))
    }
}
