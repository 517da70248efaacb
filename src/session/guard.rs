//! Route table and the client-side guard deciding whether a dashboard
//! renders or bounces to the login screen.

use crate::errors::{AppError, AppResult};
use crate::session::Session;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    AdminDashboard,
    UserDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::AdminDashboard => "/admin-dashboard",
            Route::UserDashboard => "/user-dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim() {
            "/" | "" => Some(Route::Root),
            "/login" => Some(Route::Login),
            "/admin-dashboard" => Some(Route::AdminDashboard),
            "/user-dashboard" => Some(Route::UserDashboard),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// Decide what happens when `route` is requested with `session`.
///
/// Only presence of a non-empty id is checked; nothing expires.
pub fn guard(session: &Session, route: Route) -> Navigation {
    match route {
        Route::Root => Navigation::Redirect(Route::Login),
        Route::Login => Navigation::Render(Route::Login),
        Route::AdminDashboard if session.admin_id().is_some() => {
            Navigation::Render(Route::AdminDashboard)
        }
        Route::UserDashboard if session.user_id().is_some() => {
            Navigation::Render(Route::UserDashboard)
        }
        Route::AdminDashboard | Route::UserDashboard => Navigation::Redirect(Route::Login),
    }
}

/// Like [`guard`] but turns a redirect into `NotAuthenticated`.
pub fn require(session: &Session, route: Route) -> AppResult<()> {
    match guard(session, route) {
        Navigation::Render(r) if r == route => Ok(()),
        _ => Err(AppError::NotAuthenticated(route)),
    }
}
