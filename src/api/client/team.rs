use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::AppResult;
use crate::models::appointment::EmployeeSummary;
use crate::models::page::Page;

impl<T: Transport> SalonApi<T> {
    /// Team members as shown to clients (name, skills, reviews).
    pub fn get_team(&self, page: u32) -> AppResult<Page<EmployeeSummary>> {
        self.fetch_page("/api/client/get-all-employees", page)
    }
}
