use crate::db::queries::{delete_session_value, get_session_value, set_session_value};
use crate::errors::AppResult;
use crate::session::SessionKey;
use rusqlite::Connection;
use std::collections::HashMap;

/// Synchronous key/value storage for the session identifiers.
pub trait SessionStore {
    fn get(&self, key: SessionKey) -> AppResult<Option<String>>;
    fn set(&mut self, key: SessionKey, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: SessionKey) -> AppResult<()>;

    /// Drop every session key.
    fn clear(&mut self) -> AppResult<()> {
        for key in SessionKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// Session keys persisted in the local SQLite `session` table.
pub struct SqliteSessionStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteSessionStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl SessionStore for SqliteSessionStore<'_> {
    fn get(&self, key: SessionKey) -> AppResult<Option<String>> {
        get_session_value(self.conn, key.as_str())
    }

    fn set(&mut self, key: SessionKey, value: &str) -> AppResult<()> {
        set_session_value(self.conn, key.as_str(), value)
    }

    fn remove(&mut self, key: SessionKey) -> AppResult<()> {
        delete_session_value(self.conn, key.as_str())
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: HashMap<&'static str, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> AppResult<Option<String>> {
        Ok(self.values.get(key.as_str()).cloned())
    }

    fn set(&mut self, key: SessionKey, value: &str) -> AppResult<()> {
        self.values.insert(key.as_str(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: SessionKey) -> AppResult<()> {
        self.values.remove(key.as_str());
        Ok(())
    }
}
