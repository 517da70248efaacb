use crate::api::SalonApi;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::account::{Account, UpdateAccountCredentials};
use serde_json::Value;

impl<T: Transport> SalonApi<T> {
    pub fn get_account_information(&self, client_id: &str) -> AppResult<Account> {
        self.fetch_data(ApiRequest::get(format!(
            "/api/client/{}/account-information",
            client_id
        )))
    }

    /// The message is optional here; callers supply their own fallback.
    pub fn update_account(
        &self,
        client_id: &str,
        credentials: &UpdateAccountCredentials,
    ) -> AppResult<Option<String>> {
        let path = format!("/api/client/{}/update-client", client_id);
        let envelope = self.envelope::<Value>(ApiRequest::post(path).json(credentials)?)?;
        Ok(envelope.message)
    }

    pub fn delete_account(&self, client_id: &str) -> AppResult<Option<String>> {
        let path = format!("/api/client/{}/delete-account", client_id);
        Ok(self.envelope::<Value>(ApiRequest::post(path))?.message)
    }
}
