use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::AppResult;
use crate::forms::{
    FormOutcome, INVALID_EMAIL, SHORT_PASSWORD, SHORT_USERNAME, ensure, has_min_len,
    is_valid_email,
};
use crate::models::account::{
    LoginCredentials, RecoverCodeRequest, RecoverPasswordCredentials, SignupCredentials,
};
use crate::session::{Role, Session, SessionStore};

/// Outcome of a login or sign-up: the displayed message and, on success,
/// the role whose dashboard should open.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    pub outcome: FormOutcome,
    pub signed_in: Option<Role>,
}

impl AuthOutcome {
    fn failed(message: String) -> Self {
        Self {
            outcome: FormOutcome::fail(message),
            signed_in: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    pub role: Role,
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> AppResult<()> {
        ensure(
            !self.username.trim().is_empty() && !self.password.is_empty(),
            "Please enter your username and password",
        )
    }

    /// Authenticate and persist the returned id under the role's keys.
    pub fn submit<T: Transport>(&self, api: &SalonApi<T>, store: &mut dyn SessionStore) -> AuthOutcome {
        let result = self.validate().and_then(|_| {
            let id = api.login(
                self.role,
                &LoginCredentials {
                    username: self.username.trim().to_string(),
                    password: self.password.clone(),
                },
            )?;
            Session::sign_in(store, self.role, &id)
        });
        match result {
            Ok(_) => AuthOutcome {
                outcome: FormOutcome::ok(format!("Logged in as {}", self.username.trim())),
                signed_in: Some(self.role),
            },
            Err(e) => AuthOutcome::failed(e.user_message()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> AppResult<()> {
        ensure(is_valid_email(&self.email), INVALID_EMAIL)?;
        ensure(has_min_len(&self.username, 3), SHORT_USERNAME)?;
        ensure(self.password.chars().count() >= 4, SHORT_PASSWORD)?;
        Ok(())
    }

    /// Register a client and sign in with the new id. Shows the server's
    /// message on success.
    pub fn submit<T: Transport>(&self, api: &SalonApi<T>, store: &mut dyn SessionStore) -> AuthOutcome {
        let credentials = SignupCredentials {
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        };
        let result = self.validate().and_then(|_| {
            let (id, message) = api.sign_up(&credentials)?;
            Session::sign_in(store, Role::Client, &id)?;
            Ok(message.unwrap_or_else(|| format!("Welcome, {}!", credentials.username)))
        });
        match result {
            Ok(message) => AuthOutcome {
                outcome: FormOutcome::ok(message),
                signed_in: Some(Role::Client),
            },
            Err(e) => AuthOutcome::failed(e.user_message()),
        }
    }
}

/// Two-step password restore: request a code, then submit it with the
/// new password.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestoreForm {
    pub email: String,
    pub verification_code: String,
    pub new_password: String,
}

impl RestoreForm {
    pub fn send_code<T: Transport>(&self, api: &SalonApi<T>) -> FormOutcome {
        FormOutcome::from_result(api.send_recover_code(&RecoverCodeRequest {
            email: self.email.trim().to_string(),
        }))
    }

    pub fn validate(&self) -> AppResult<()> {
        ensure(
            self.new_password.chars().count() >= 4,
            "Password must be at least 4 characters long.",
        )
    }

    pub fn recover<T: Transport>(&self, api: &SalonApi<T>) -> FormOutcome {
        FormOutcome::from_result(self.validate().and_then(|_| {
            api.recover_password(&RecoverPasswordCredentials {
                email: self.email.trim().to_string(),
                verification_code: self.verification_code.trim().to_string(),
                new_password: self.new_password.clone(),
            })
        }))
    }
}
