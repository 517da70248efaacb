use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::AppResult;
use crate::forms::{FormOutcome, INVALID_EMAIL, SHORT_USERNAME, ensure, has_min_len, is_valid_email};
use crate::models::account::{Account, UpdateAccountCredentials};

pub const ACCOUNT_FETCH_ERROR: &str = "An error occurred while getting the account information.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountForm {
    pub email: String,
    pub username: String,
}

impl AccountForm {
    pub fn from_account(account: &Account) -> Self {
        Self {
            email: account.email.clone(),
            username: account.username.clone(),
        }
    }

    /// Load the current values; any failure collapses to one message.
    pub fn load<T: Transport>(api: &SalonApi<T>, client_id: &str) -> Result<Self, FormOutcome> {
        api.get_account_information(client_id)
            .map(|a| Self::from_account(&a))
            .map_err(|_| FormOutcome::fail(ACCOUNT_FETCH_ERROR))
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure(is_valid_email(&self.email), INVALID_EMAIL)?;
        ensure(has_min_len(&self.username, 3), SHORT_USERNAME)?;
        Ok(())
    }

    /// Full name and phone number are not editable here and are sent empty.
    pub fn update<T: Transport>(&self, api: &SalonApi<T>, client_id: &str) -> FormOutcome {
        let result = self.validate().and_then(|_| {
            api.update_account(
                client_id,
                &UpdateAccountCredentials {
                    full_name: String::new(),
                    phone_number: String::new(),
                    email: self.email.trim().to_string(),
                    username: self.username.trim().to_string(),
                },
            )
        });
        FormOutcome::from_result(result.map(|m| or_fallback(m, "Account updated successfully.")))
    }

    pub fn delete<T: Transport>(api: &SalonApi<T>, client_id: &str) -> FormOutcome {
        FormOutcome::from_result(
            api.delete_account(client_id)
                .map(|m| or_fallback(m, "Account deleted successfully.")),
        )
    }
}

fn or_fallback(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
