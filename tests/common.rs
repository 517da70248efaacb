#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use jokisalon::db::pool::DbPool;
use jokisalon::db::queries::save_cursor;
use jokisalon::session::{Role, Session, SessionKey, SessionStore, SqliteSessionStore};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Nothing listens here: every request fails at connect time.
pub const DEAD_BACKEND: &str = "http://127.0.0.1:9";

pub fn jsc() -> Command {
    cargo_bin_cmd!("jokisalon")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jokisalon.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// `jokisalon --db <db> --base-url <dead backend> <args...>`
pub fn jsc_offline(db_path: &str, args: &[&str]) -> Command {
    let mut cmd = jsc();
    cmd.args(["--db", db_path, "--base-url", DEAD_BACKEND]);
    cmd.args(args);
    cmd
}

/// Initialize the DB through the CLI (test mode leaves the config alone)
pub fn init_db(db_path: &str) {
    jsc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Store a session id directly, as a successful login would.
pub fn seed_session(db_path: &str, role: Role, id: &str) {
    let pool = DbPool::open_initialized(db_path).expect("open db");
    let mut store = SqliteSessionStore::new(&pool.conn);
    Session::sign_in(&mut store, role, id).expect("sign in");
}

/// Pretend a list was last shown at `current` (zero-based) of `total` pages.
pub fn seed_cursor(db_path: &str, view: &str, current: u32, total: u32) {
    let pool = DbPool::open_initialized(db_path).expect("open db");
    save_cursor(&pool.conn, view, current, total).expect("save cursor");
}

/// Write a single session key, leaving the others untouched.
pub fn seed_value(db_path: &str, key: SessionKey, value: &str) {
    let pool = DbPool::open_initialized(db_path).expect("open db");
    let mut store = SqliteSessionStore::new(&pool.conn);
    store.set(key, value).expect("set");
}
