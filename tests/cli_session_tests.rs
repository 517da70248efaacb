use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, jsc, jsc_offline, seed_session, setup_test_db};
use jokisalon::session::Role;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    jsc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database"))
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_status_without_session() {
    let db_path = setup_test_db("status_without_session");
    init_db(&db_path);

    jsc_offline(&db_path, &["status"])
        .assert()
        .success()
        .stdout(contains("adminId"))
        .stdout(contains("not set"))
        .stdout(contains("/admin-dashboard redirects to /login"))
        .stdout(contains("/user-dashboard redirects to /login"));
}

#[test]
fn test_root_redirects_to_login() {
    let db_path = setup_test_db("root_redirects_to_login");
    init_db(&db_path);

    jsc_offline(&db_path, &["open", "/"])
        .assert()
        .success()
        .stdout(contains("Redirected to /login"))
        .stdout(contains("[Login]"));
}

#[test]
fn test_admin_dashboard_renders_with_admin_id() {
    let db_path = setup_test_db("admin_dashboard_renders");
    init_db(&db_path);
    seed_session(&db_path, Role::Admin, "admin-1");

    jsc_offline(&db_path, &["open", "/admin-dashboard", "--section", "statistics"])
        .assert()
        .success()
        .stdout(contains("Rendering /admin-dashboard"))
        .stdout(contains("[Statistics]"));

    // a client-only session does not open the admin dashboard
    jsc_offline(&db_path, &["open", "/user-dashboard"])
        .assert()
        .success()
        .stdout(contains("Redirected to /login"));
}

#[test]
fn test_admin_command_without_session_fails() {
    let db_path = setup_test_db("admin_without_session");
    init_db(&db_path);

    jsc_offline(&db_path, &["admin", "employees", "list"])
        .assert()
        .failure()
        .stderr(contains("/admin-dashboard requires a session"))
        .stderr(contains("/login"));
}

#[test]
fn test_client_command_with_admin_session_fails() {
    let db_path = setup_test_db("client_with_admin_session");
    init_db(&db_path);
    seed_session(&db_path, Role::Admin, "admin-1");

    jsc_offline(&db_path, &["client", "cart"])
        .assert()
        .failure()
        .stderr(contains("/user-dashboard requires a session"));
}

#[test]
fn test_logout_clears_every_key() {
    let db_path = setup_test_db("logout_clears_keys");
    init_db(&db_path);
    seed_session(&db_path, Role::Client, "client-7");
    seed_session(&db_path, Role::Admin, "admin-1");

    jsc_offline(&db_path, &["status"])
        .assert()
        .success()
        .stdout(contains("/user-dashboard available"))
        .stdout(contains("/admin-dashboard available"));

    jsc_offline(&db_path, &["logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    jsc_offline(&db_path, &["status"])
        .assert()
        .success()
        .stdout(contains("available").not());
}

#[test]
fn test_login_requires_credentials() {
    let db_path = setup_test_db("login_requires_credentials");
    init_db(&db_path);

    jsc_offline(&db_path, &["login", "--role", "admin", "-u", "", "-p", ""])
        .assert()
        .success()
        .stderr(contains("Please enter your username and password"));
}

#[test]
fn test_login_network_failure_shows_generic_message() {
    let db_path = setup_test_db("login_network_failure");
    init_db(&db_path);

    jsc_offline(&db_path, &["login", "--role", "client", "-u", "maria", "-p", "secret"])
        .assert()
        .success()
        .stderr(contains("An unexpected error occurred."));

    jsc_offline(&db_path, &["status"])
        .assert()
        .success()
        .stdout(contains("/user-dashboard redirects to /login"));
}

#[test]
fn test_signup_validation_order() {
    let db_path = setup_test_db("signup_validation_order");
    init_db(&db_path);

    jsc_offline(&db_path, &["signup", "-e", "not-an-email", "-u", "ab", "-p", "1"])
        .assert()
        .success()
        .stderr(contains("Please enter a valid email address"));

    jsc_offline(&db_path, &["signup", "-e", "ana@joki.com", "-u", "ab", "-p", "1"])
        .assert()
        .success()
        .stderr(contains("Username must be at least 3 characters long"));

    jsc_offline(&db_path, &["signup", "-e", "ana@joki.com", "-u", "ana", "-p", "123"])
        .assert()
        .success()
        .stderr(contains("Password must be at least 4 characters long"));
}

#[test]
fn test_recover_rejects_short_password() {
    let db_path = setup_test_db("recover_short_password");
    init_db(&db_path);

    jsc_offline(
        &db_path,
        &[
            "recover",
            "--email",
            "ana@joki.com",
            "--code",
            "123456",
            "--new-password",
            "abc",
        ],
    )
    .assert()
    .success()
    .stderr(contains("Password must be at least 4 characters long."));
}

#[test]
fn test_about_prints_salon_text() {
    jsc()
        .arg("about")
        .assert()
        .success()
        .stdout(contains("Joki Hair Salon is a top-tier salon"));
}
