use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::{AppError, AppResult};
use crate::forms::{FormOutcome, ensure};
use crate::models::report::GeneralReport;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsForm {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl StatisticsForm {
    pub fn validate(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err(AppError::Validation(
                "Both start date and end date are required.".to_string(),
            ));
        };
        ensure(start <= end, "Start date cannot be after end date.")?;
        Ok((start, end))
    }

    /// Fetch the report; the outcome carries the server message or a
    /// fixed confirmation when the server sent none.
    pub fn generate<T: Transport>(&self, api: &SalonApi<T>) -> (FormOutcome, Option<GeneralReport>) {
        let result = self
            .validate()
            .and_then(|(start, end)| api.get_general_report(start, end));
        match result {
            Ok((report, message)) => (
                FormOutcome::ok(
                    message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| "Reports generated successfully.".to_string()),
                ),
                Some(report),
            ),
            Err(e) => (FormOutcome::fail(e.user_message()), None),
        }
    }
}
