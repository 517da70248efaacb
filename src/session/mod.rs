//! Session context: the identifiers saved at login, read back on every
//! invocation and passed explicitly to the commands that need them.

pub mod guard;
pub mod store;

pub use guard::{Navigation, Route, guard, require};
pub use store::{MemorySessionStore, SessionStore, SqliteSessionStore};

use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    AdminId,
    ClientId,
    UserId,
}

impl SessionKey {
    pub const ALL: [SessionKey; 3] = [SessionKey::AdminId, SessionKey::ClientId, SessionKey::UserId];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::AdminId => "adminId",
            SessionKey::ClientId => "clientId",
            SessionKey::UserId => "userId",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Admin,
    Client,
}

impl Role {
    /// Segment used in `/api/auth/{role}/login`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Client => "client",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "client" | "user" => Some(Role::Client),
            _ => None,
        }
    }

    /// Dashboard reached after a successful login.
    pub fn dashboard(&self) -> Route {
        match self {
            Role::Admin => Route::AdminDashboard,
            Role::Client => Route::UserDashboard,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Snapshot of the stored identifiers. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    admin_id: Option<String>,
    client_id: Option<String>,
    user_id: Option<String>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

impl Session {
    pub fn load(store: &dyn SessionStore) -> AppResult<Self> {
        Ok(Self {
            admin_id: non_empty(store.get(SessionKey::AdminId)?),
            client_id: non_empty(store.get(SessionKey::ClientId)?),
            user_id: non_empty(store.get(SessionKey::UserId)?),
        })
    }

    pub fn admin_id(&self) -> Option<&str> {
        self.admin_id.as_deref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_present(&self, key: SessionKey) -> bool {
        match key {
            SessionKey::AdminId => self.admin_id.is_some(),
            SessionKey::ClientId => self.client_id.is_some(),
            SessionKey::UserId => self.user_id.is_some(),
        }
    }

    /// Client id used as a path parameter by the client endpoints.
    pub fn require_client_id(&self) -> AppResult<&str> {
        self.client_id()
            .ok_or_else(|| AppError::Validation("The client doesn't have an id".into()))
    }

    /// Persist the id returned by a successful login or sign-up.
    ///
    /// A client id is written under both `userId` and `clientId`.
    pub fn sign_in(store: &mut dyn SessionStore, role: Role, id: &str) -> AppResult<Self> {
        match role {
            Role::Admin => store.set(SessionKey::AdminId, id)?,
            Role::Client => {
                store.set(SessionKey::UserId, id)?;
                store.set(SessionKey::ClientId, id)?;
            }
        }
        Self::load(store)
    }

    pub fn sign_out(store: &mut dyn SessionStore) -> AppResult<()> {
        store.clear()
    }
}
