use jokisalon::db::migrate::run_pending_migrations;
use jokisalon::db::pool::DbPool;
use jokisalon::db::queries::{clear_cursors, load_cursor, save_cursor};
use jokisalon::session::{Role, Session, SessionKey, SessionStore, SqliteSessionStore};

#[test]
fn test_migrations_run_once() {
    let pool = DbPool::in_memory().expect("db");
    assert_eq!(run_pending_migrations(&pool.conn).expect("migrate"), 0);

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .expect("count");
    assert_eq!(applied, 2);
}

#[test]
fn test_session_keys_persist() {
    let pool = DbPool::in_memory().expect("db");
    let mut store = SqliteSessionStore::new(&pool.conn);

    Session::sign_in(&mut store, Role::Client, "c-7").expect("sign in");
    assert_eq!(store.get(SessionKey::ClientId).expect("get"), Some("c-7".into()));

    store.set(SessionKey::ClientId, "c-8").expect("overwrite");
    assert_eq!(store.get(SessionKey::ClientId).expect("get"), Some("c-8".into()));

    Session::sign_out(&mut store).expect("sign out");
    for key in SessionKey::ALL {
        assert_eq!(store.get(key).expect("get"), None);
    }
}

#[test]
fn test_cursor_roundtrip_and_clear() {
    let pool = DbPool::in_memory().expect("db");
    assert_eq!(load_cursor(&pool.conn, "client.team").expect("load"), None);

    save_cursor(&pool.conn, "client.team", 1, 4).expect("save");
    save_cursor(&pool.conn, "client.team", 2, 4).expect("save");
    assert_eq!(load_cursor(&pool.conn, "client.team").expect("load"), Some((2, 4)));

    clear_cursors(&pool.conn).expect("clear");
    assert_eq!(load_cursor(&pool.conn, "client.team").expect("load"), None);
}
