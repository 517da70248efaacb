use crate::api::SalonApi;
use crate::api::transport::HttpTransport;
use crate::config::Config;
use crate::db::log::record;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::forms::FormOutcome;
use crate::session::{Route, Session, SqliteSessionStore, require};

/// Everything a screen command needs: the local database, the backend
/// client and the session read from the database.
pub struct Context {
    pub pool: DbPool,
    pub api: SalonApi<HttpTransport>,
    pub session: Session,
}

impl Context {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let session = Session::load(&SqliteSessionStore::new(&pool.conn))?;
        let api = SalonApi::new(HttpTransport::new(&cfg.base_url)?);
        Ok(Self { pool, api, session })
    }

    /// Open the context and check the guard for `route` before anything
    /// touches the network.
    pub fn for_route(cfg: &Config, route: Route) -> AppResult<Self> {
        let ctx = Self::open(cfg)?;
        require(&ctx.session, route)?;
        Ok(ctx)
    }

    pub fn store(&self) -> SqliteSessionStore<'_> {
        SqliteSessionStore::new(&self.pool.conn)
    }

    pub fn log(&self, operation: &str, target: &str, message: &str) {
        record(&self.pool.conn, operation, target, message);
    }

    /// Log a form result under `operation` (or `operation_failed`).
    pub fn log_outcome(&self, operation: &str, target: &str, outcome: &FormOutcome) {
        if outcome.success {
            self.log(operation, target, &outcome.message);
        } else {
            self.log(&format!("{}_failed", operation), target, &outcome.message);
        }
    }
}
