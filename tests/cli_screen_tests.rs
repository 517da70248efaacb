use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, jsc_offline, seed_cursor, seed_session, seed_value, setup_test_db};
use jokisalon::session::{Role, SessionKey};

fn admin_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);
    seed_session(&db_path, Role::Admin, "admin-1");
    db_path
}

fn client_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);
    seed_session(&db_path, Role::Client, "client-7");
    db_path
}

#[test]
fn test_prev_on_first_page_does_not_fetch() {
    let db_path = client_db("prev_on_first_page");
    seed_cursor(&db_path, "client.products", 0, 3);

    jsc_offline(&db_path, &["client", "products", "list", "--prev"])
        .assert()
        .success()
        .stdout(contains("Already on the first page"))
        .stderr(contains("unexpected error").not());
}

#[test]
fn test_next_on_last_page_does_not_fetch() {
    let db_path = admin_db("next_on_last_page");
    seed_cursor(&db_path, "admin.employees", 2, 3);

    jsc_offline(&db_path, &["admin", "employees", "list", "--next"])
        .assert()
        .success()
        .stdout(contains("Already on the last page"))
        .stderr(contains("unexpected error").not());
}

#[test]
fn test_next_inside_bounds_tries_to_fetch() {
    let db_path = admin_db("next_inside_bounds");
    seed_cursor(&db_path, "admin.products", 0, 2);

    jsc_offline(&db_path, &["admin", "products", "list", "--next"])
        .assert()
        .success()
        .stderr(contains("An unexpected error occurred."));
}

#[test]
fn test_list_failure_is_logged() {
    let db_path = admin_db("list_failure_logged");

    jsc_offline(&db_path, &["admin", "appointments", "list"])
        .assert()
        .success()
        .stderr(contains("An unexpected error occurred."));

    jsc_offline(&db_path, &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("fetch_failed"))
        .stdout(contains("admin.appointments"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_history_failure_message() {
    let db_path = client_db("history_failure_message");

    jsc_offline(&db_path, &["client", "history", "list"])
        .assert()
        .success()
        .stderr(contains("An error occurred while fetching appointments."));
}

#[test]
fn test_product_form_checks_before_network() {
    let db_path = admin_db("product_form_checks");

    jsc_offline(&db_path, &["admin", "products", "add", "--name", "ab"])
        .assert()
        .success()
        .stderr(contains("The product name must be at least 3 characters long"));

    jsc_offline(
        &db_path,
        &[
            "admin",
            "products",
            "add",
            "--name",
            "Argan Oil",
            "--description",
            "Nourishing oil for dry hair",
            "--price",
            "0",
        ],
    )
    .assert()
    .success()
    .stderr(contains("The product price must be greater than 0"));
}

#[test]
fn test_employee_form_rejects_bad_schedule() {
    let db_path = admin_db("employee_bad_schedule");

    jsc_offline(
        &db_path,
        &[
            "admin",
            "employees",
            "add",
            "--name",
            "Laura Gomez",
            "--email",
            "laura@joki.com",
            "--skills",
            "haircut,blow dry",
            "--schedule",
            "MONDAY=18:00-09:00",
        ],
    )
    .assert()
    .success()
    .stderr(contains(
        "Invalid schedule for MONDAY: start time must be before end time",
    ));
}

#[test]
fn test_unknown_skill_is_rejected() {
    let db_path = admin_db("unknown_skill");

    jsc_offline(
        &db_path,
        &[
            "admin", "employees", "add", "--name", "Laura", "--skills", "massage",
        ],
    )
    .assert()
    .failure()
    .stderr(contains("Invalid service: 'massage'"));
}

#[test]
fn test_stats_requires_both_dates() {
    let db_path = admin_db("stats_requires_dates");

    jsc_offline(&db_path, &["admin", "stats", "--from", "2025-06-01"])
        .assert()
        .success()
        .stderr(contains("Both start date and end date are required."));

    jsc_offline(
        &db_path,
        &["admin", "stats", "--from", "2025-06-10", "--to", "2025-06-01"],
    )
    .assert()
    .success()
    .stderr(contains("Start date cannot be after end date."));
}

#[test]
fn test_hours_require_range_and_service() {
    let db_path = client_db("hours_require_range");

    jsc_offline(&db_path, &["client", "hours", "--to", "2099-06-10"])
        .assert()
        .success()
        .stderr(contains("Please select a date range and at least one service."));
}

#[test]
fn test_book_requires_slot() {
    let db_path = client_db("book_requires_slot");

    jsc_offline(&db_path, &["client", "book", "--services", "haircut"])
        .assert()
        .success()
        .stderr(contains("Please select a date and hour for the appointment"));
}

#[test]
fn test_cart_fetch_failure_shows_zero_total() {
    let db_path = client_db("cart_fetch_failure");

    jsc_offline(&db_path, &["client", "cart"])
        .assert()
        .success()
        .stderr(contains("An error occurred while fetching the cart."))
        .stdout(contains("Total Price: $0.00"));
}

#[test]
fn test_account_fetch_failure_message() {
    let db_path = client_db("account_fetch_failure");

    jsc_offline(&db_path, &["client", "account"])
        .assert()
        .success()
        .stderr(contains(
            "An error occurred while getting the account information.",
        ));
}

#[test]
fn test_config_print() {
    let db_path = setup_test_db("config_print");

    jsc_offline(&db_path, &["config", "--print"])
        .assert()
        .success()
        .stdout(contains("base_url"))
        .stdout(contains("default_role"));
}

#[test]
fn test_missing_client_id_is_reported_not_fatal() {
    let db_path = setup_test_db("missing_client_id");
    init_db(&db_path);
    seed_value(&db_path, SessionKey::UserId, "user-3");

    for args in [
        &["client", "history", "list"][..],
        &["client", "cart"][..],
        &["client", "account"][..],
    ] {
        jsc_offline(&db_path, args)
            .assert()
            .success()
            .stderr(contains("The client doesn't have an id"));
    }
}
