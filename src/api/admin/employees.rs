use crate::api::SalonApi;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::employee::{CreateEmployeeCredentials, Employee, UpdateEmployeeCredentials};
use crate::models::page::Page;

impl<T: Transport> SalonApi<T> {
    pub fn get_all_employees(&self, page: u32) -> AppResult<Page<Employee>> {
        self.fetch_page("/api/admin/get-all-employees", page)
    }

    pub fn create_employee(&self, credentials: &CreateEmployeeCredentials) -> AppResult<String> {
        self.fetch_message(ApiRequest::post("/api/admin/create-employee").json(credentials)?)
    }

    pub fn update_employee(
        &self,
        employee_id: &str,
        credentials: &UpdateEmployeeCredentials,
    ) -> AppResult<String> {
        let path = format!("/api/admin/update-employee/{}", employee_id);
        self.fetch_message(ApiRequest::post(path).json(credentials)?)
    }

    pub fn delete_employee(&self, employee_id: &str) -> AppResult<String> {
        self.fetch_message(ApiRequest::post(format!(
            "/api/admin/delete-employee/{}",
            employee_id
        )))
    }
}
