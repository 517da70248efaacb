use crate::api::SalonApi;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::report::GeneralReport;
use chrono::NaiveDate;

impl<T: Transport> SalonApi<T> {
    /// Returns the report together with the server's message, if any.
    pub fn get_general_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<(GeneralReport, Option<String>)> {
        let request = ApiRequest::get("/api/admin/get-general-report")
            .query("startDate", start.format("%Y-%m-%d"))
            .query("endDate", end.format("%Y-%m-%d"));
        let envelope = self.envelope::<GeneralReport>(request)?;
        let message = envelope.message.clone();
        Ok((envelope.expect_data()?, message))
    }
}
