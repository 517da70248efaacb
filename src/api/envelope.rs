//! The uniform `{status, message, data}` wrapper every endpoint returns.

use crate::api::transport::RawResponse;
use crate::errors::{AppError, AppResult, GENERIC_ERROR};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Numeric or textual depending on the endpoint; never interpreted.
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a raw response.
    ///
    /// A non-2xx status fails with the server's `message`; a body that is
    /// not an envelope at all fails with a decode error.
    pub fn decode(raw: &RawResponse) -> AppResult<Self> {
        if !raw.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&raw.body)
                .ok()
                .and_then(|e| e.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_ERROR.to_string());
            return Err(AppError::Api(message));
        }
        Ok(serde_json::from_str(&raw.body)?)
    }

    pub fn expect_data(self) -> AppResult<T> {
        self.data.ok_or(AppError::UnexpectedFormat)
    }

    pub fn expect_message(self) -> AppResult<String> {
        self.message.ok_or(AppError::UnexpectedFormat)
    }
}
