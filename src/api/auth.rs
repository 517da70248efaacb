use crate::api::SalonApi;
use crate::api::transport::{ApiRequest, Transport};
use crate::errors::AppResult;
use crate::models::account::{
    LoginCredentials, RecoverCodeRequest, RecoverPasswordCredentials, SignupCredentials,
};
use crate::session::Role;

impl<T: Transport> SalonApi<T> {
    /// Register a client account. Returns the new client id and the
    /// server's welcome message.
    pub fn sign_up(&self, credentials: &SignupCredentials) -> AppResult<(String, Option<String>)> {
        let envelope =
            self.envelope::<String>(ApiRequest::post("/api/auth/client/register").json(credentials)?)?;
        let message = envelope.message.clone();
        Ok((envelope.expect_data()?, message))
    }

    /// Authenticate as admin or client; `data` is the account id.
    pub fn login(&self, role: Role, credentials: &LoginCredentials) -> AppResult<String> {
        let path = format!("/api/auth/{}/login", role.path_segment());
        self.fetch_data(ApiRequest::post(path).json(credentials)?)
    }

    pub fn send_recover_code(&self, request: &RecoverCodeRequest) -> AppResult<String> {
        self.fetch_message(ApiRequest::post("/api/auth/client/send-recover-code").json(request)?)
    }

    pub fn recover_password(&self, credentials: &RecoverPasswordCredentials) -> AppResult<String> {
        self.fetch_message(ApiRequest::post("/api/auth/client/recover-password").json(credentials)?)
    }
}
