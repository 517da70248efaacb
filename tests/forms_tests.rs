use chrono::{NaiveDate, NaiveDateTime};
use jokisalon::api::SalonApi;
use jokisalon::api::mock::MockTransport;
use jokisalon::forms::account::{ACCOUNT_FETCH_ERROR, AccountForm};
use jokisalon::forms::auth::{LoginForm, RestoreForm, SignupForm};
use jokisalon::forms::booking::BookingForm;
use jokisalon::forms::cart::AddToCartForm;
use jokisalon::forms::employee::EmployeeForm;
use jokisalon::forms::history::{ReviewForm, cancel};
use jokisalon::forms::product::ProductForm;
use jokisalon::forms::statistics::StatisticsForm;
use jokisalon::forms::{has_min_len, is_valid_email};
use jokisalon::models::appointment::Appointment;
use jokisalon::models::catalog::{Category, Skill};
use jokisalon::models::employee::{DaySchedule, Employee};
use jokisalon::session::{MemorySessionStore, Role, Session};
use serde_json::json;

fn api() -> SalonApi<MockTransport> {
    SalonApi::new(MockTransport::new())
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("datetime")
}

fn appointment(when: &str) -> Appointment {
    Appointment {
        appointment_id: Some("a1".into()),
        client_id: "c7".into(),
        employee_id: "e1".into(),
        appointment_date_time: when.into(),
        services: vec!["HAIRCUT".into()],
        price: 25.0,
        status: "BOOKED".into(),
    }
}

fn valid_product() -> ProductForm {
    ProductForm {
        product_id: None,
        name: "Argan Oil".into(),
        description: "Nourishing oil for dry hair".into(),
        price: 12.5,
        stock_quantity: 4,
        categories: vec![Category::HairCare],
        brand: "Joki".into(),
        image: "https://img.example/argan.png".into(),
    }
}

#[test]
fn test_min_len_ignores_surrounding_spaces() {
    assert!(!has_min_len("  ab  ", 3));
    assert!(has_min_len(" abc ", 3));
}

#[test]
fn test_email_shape() {
    assert!(is_valid_email("anna@joki.com"));
    assert!(!is_valid_email("anna@joki"));
    assert!(!is_valid_email("anna joki@x.com"));
}

#[test]
fn test_product_validation_sends_nothing() {
    let api = api();
    let mut form = valid_product();
    form.categories.clear();

    let outcome = form.create(&api);
    assert!(!outcome.success);
    assert_eq!(outcome.message, "The product must have at least one category");
    assert_eq!(api.transport().request_count(), 0);
}

#[test]
fn test_product_create_sends_one_request() {
    let api = api();
    api.transport().ok_message("Product created successfully");

    let outcome = valid_product().create(&api);
    assert!(outcome.success);
    assert_eq!(outcome.message, "Product created successfully");
    assert_eq!(api.transport().request_count(), 1);

    let req = api.transport().last_request().expect("request");
    assert_eq!(req.path, "/api/admin/create-product");
    assert_eq!(
        req.body,
        Some(json!({
            "name": "Argan Oil",
            "description": "Nourishing oil for dry hair",
            "price": 12.5,
            "stockQuantity": 4,
            "categories": ["HAIR_CARE"],
            "brand": "Joki",
            "images": ["https://img.example/argan.png"]
        }))
    );
}

#[test]
fn test_product_update_requires_id() {
    let api = api();
    let outcome = valid_product().update(&api);
    assert_eq!(outcome.message, "The product doesn't have an id");
    assert_eq!(api.transport().request_count(), 0);
}

#[test]
fn test_server_failure_is_shown_inline() {
    let api = api();
    api.transport().fail(409, "Product already exists");

    let outcome = valid_product().create(&api);
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Product already exists");
}

#[test]
fn test_employee_schedule_checked_on_create() {
    let api = api();
    let mut form = EmployeeForm {
        complete_name: "Laura Gomez".into(),
        email: "laura@joki.com".into(),
        skills: vec![Skill::Haircut],
        ..EmployeeForm::default()
    };
    form.work_schedule.set(chrono::Weekday::Tue, DaySchedule::new("17:00", "09:00"));

    let outcome = form.create(&api);
    assert_eq!(
        outcome.message,
        "Invalid schedule for TUESDAY: start time must be before end time"
    );
    assert_eq!(api.transport().request_count(), 0);

    form.work_schedule.set(chrono::Weekday::Tue, DaySchedule::new("09:00", "17:00"));
    api.transport().ok_message("Employee created");
    assert!(form.create(&api).success);

    let body = api.transport().last_request().expect("request").body.expect("body");
    assert_eq!(body["completeName"], "Laura Gomez");
    assert_eq!(body["skills"], json!(["HAIRCUT"]));
    assert_eq!(body["workSchedule"]["workSchedule"]["TUESDAY"]["startTime"], "09:00");
}

#[test]
fn test_employee_needs_a_skill() {
    let api = api();
    let form = EmployeeForm {
        complete_name: "Laura Gomez".into(),
        email: "laura@joki.com".into(),
        ..EmployeeForm::default()
    };
    assert_eq!(
        form.create(&api).message,
        "The employee must have at least one skill"
    );
}

#[test]
fn test_editing_keeps_only_known_skills() {
    let employee: Employee = serde_json::from_value(json!({
        "employeeId": "e2",
        "completeName": "Luca Bianchi",
        "email": "luca@joki.com",
        "skills": ["NAILS", "BEARD"],
        "hireDate": "2024-03-01T00:00:00"
    }))
    .expect("employee");

    let form = EmployeeForm::from_employee(&employee);
    assert_eq!(form.skills, vec![Skill::Beard]);
    assert_eq!(form.employee_id.as_deref(), Some("e2"));
}

#[test]
fn test_login_stores_ids_for_role() {
    let api = api();
    api.transport().ok_data(json!("client-7"));
    let mut store = MemorySessionStore::new();

    let form = LoginForm {
        role: Role::Client,
        username: "anna".into(),
        password: "secret".into(),
    };
    let result = form.submit(&api, &mut store);
    assert_eq!(result.signed_in, Some(Role::Client));
    assert_eq!(result.outcome.message, "Logged in as anna");

    let session = Session::load(&store).expect("session");
    assert_eq!(session.user_id(), Some("client-7"));
    assert_eq!(session.client_id(), Some("client-7"));
    assert_eq!(session.admin_id(), None);
}

#[test]
fn test_failed_login_stores_nothing() {
    let api = api();
    api.transport().fail(401, "Invalid credentials");
    let mut store = MemorySessionStore::new();

    let form = LoginForm {
        role: Role::Admin,
        username: "boss".into(),
        password: "wrong".into(),
    };
    let result = form.submit(&api, &mut store);
    assert_eq!(result.signed_in, None);
    assert_eq!(result.outcome.message, "Invalid credentials");
    assert_eq!(Session::load(&store).expect("session"), Session::default());
}

#[test]
fn test_signup_validation_order() {
    let form = SignupForm {
        email: "bad".into(),
        username: "a".into(),
        password: "1".into(),
    };
    assert_eq!(
        form.validate().unwrap_err().user_message(),
        "Please enter a valid email address"
    );

    let form = SignupForm {
        email: "anna@joki.com".into(),
        username: "anna".into(),
        password: "123".into(),
    };
    assert_eq!(
        form.validate().unwrap_err().user_message(),
        "Password must be at least 4 characters long"
    );
}

#[test]
fn test_booking_search_rules() {
    let api = api();
    let d = |day| NaiveDate::from_ymd_opt(2099, 6, day).expect("date");

    let mut form = BookingForm {
        start_date: Some(d(5)),
        end_date: Some(d(1)),
        services: vec![Skill::Haircut],
        selected_slot: None,
    };
    assert_eq!(
        form.available_hours(&api).unwrap_err().user_message(),
        "Start date cannot be after end date."
    );

    form.services.clear();
    form.end_date = Some(d(9));
    assert_eq!(
        form.available_hours(&api).unwrap_err().user_message(),
        "Please select a date range and at least one service."
    );
    assert_eq!(api.transport().request_count(), 0);
}

#[test]
fn test_booking_sends_slot_and_codes() {
    let api = api();
    api.transport().ok_message("Appointment booked");

    let form = BookingForm {
        services: vec![Skill::Haircut, Skill::Beard],
        selected_slot: Some("2099-06-01T10:00".into()),
        ..BookingForm::default()
    };
    let outcome = form.book(&api, Some("c7"));
    assert!(outcome.success);

    let req = api.transport().last_request().expect("request");
    assert_eq!(req.path, "/api/client/c7/book-appointment");
    assert_eq!(
        req.body,
        Some(json!({"date": "2099-06-01T10:00", "servicesList": ["HAIRCUT", "BEARD"]}))
    );
}

#[test]
fn test_booking_without_client_id() {
    let api = api();
    let form = BookingForm {
        services: vec![Skill::Haircut],
        selected_slot: Some("2099-06-01T10:00".into()),
        ..BookingForm::default()
    };
    assert_eq!(form.book(&api, None).message, "The client doesn't have an id");
    assert_eq!(api.transport().request_count(), 0);
}

#[test]
fn test_review_rules() {
    let api = api();
    let now = at("2025-06-10 12:00");
    let past = appointment("2025-06-01T10:00:00");
    let upcoming = appointment("2025-07-01T10:00:00");

    let short = ReviewForm {
        comment: "ok".into(),
        rating: Some(4),
    };
    assert_eq!(
        short.submit(&api, &past, now).message,
        "The review must be at least 10 characters long"
    );

    let unrated = ReviewForm {
        comment: "Lovely service overall".into(),
        rating: None,
    };
    assert_eq!(unrated.submit(&api, &past, now).message, "Please enter a rating");

    let out_of_range = ReviewForm {
        rating: Some(6),
        ..unrated.clone()
    };
    assert_eq!(
        out_of_range.submit(&api, &past, now).message,
        "The rating must be between 1 - 5"
    );

    let good = ReviewForm {
        rating: Some(5),
        ..unrated
    };
    assert_eq!(
        good.submit(&api, &upcoming, now).message,
        "Only past appointments can be reviewed"
    );
    assert_eq!(api.transport().request_count(), 0);

    api.transport().ok_message("Thanks for your review");
    assert!(good.submit(&api, &past, now).success);
    assert_eq!(
        api.transport().last_request().expect("request").path,
        "/api/client/a1/leave-review"
    );
}

#[test]
fn test_cancel_only_upcoming() {
    let api = api();
    let now = at("2025-06-10 12:00");

    let outcome = cancel(&api, "c7", &appointment("2025-06-01T10:00:00"), now);
    assert_eq!(outcome.message, "Past appointments cannot be cancelled");
    assert_eq!(api.transport().request_count(), 0);

    api.transport().ok_message("Appointment cancelled");
    let outcome = cancel(&api, "c7", &appointment("2025-07-01T10:00:00"), now);
    assert!(outcome.success);
    assert_eq!(
        api.transport().last_request().expect("request").path,
        "/api/client/c7/cancel-appointment/a1"
    );
}

#[test]
fn test_add_to_cart_quantity() {
    let api = api();
    let form = AddToCartForm {
        product_id: "p1".into(),
        quantity: 0,
    };
    assert_eq!(form.submit(&api, "c7").message, "The quantity must be at least 1");
    assert_eq!(api.transport().request_count(), 0);
}

#[test]
fn test_statistics_requires_dates() {
    let api = api();
    let form = StatisticsForm::default();
    let (outcome, report) = form.generate(&api);
    assert_eq!(outcome.message, "Both start date and end date are required.");
    assert!(report.is_none());
    assert_eq!(api.transport().request_count(), 0);
}

#[test]
fn test_account_load_failure_collapses() {
    let api = api();
    api.transport().fail(404, "Client not found");

    let failed = AccountForm::load(&api, "c7").unwrap_err();
    assert!(!failed.success);
    assert_eq!(failed.message, ACCOUNT_FETCH_ERROR);
}

#[test]
fn test_account_update_falls_back_when_server_is_silent() {
    let api = api();
    api.transport()
        .ok_data(json!({"email": "anna@joki.com", "username": "anna"}))
        .respond(200, json!({"status": 200}).to_string());

    let mut form = AccountForm::load(&api, "c7").expect("account");
    form.username = "anna_b".into();
    let outcome = form.update(&api, "c7");
    assert!(outcome.success);
    assert_eq!(outcome.message, "Account updated successfully.");

    let req = api.transport().last_request().expect("request");
    assert_eq!(req.path, "/api/client/c7/update-client");
    assert_eq!(
        req.body,
        Some(json!({
            "fullName": "",
            "phoneNumber": "",
            "email": "anna@joki.com",
            "username": "anna_b"
        }))
    );
}

#[test]
fn test_restore_password_rules() {
    let api = api();
    let form = RestoreForm {
        email: "anna@joki.com".into(),
        verification_code: "123456".into(),
        new_password: "abc".into(),
    };
    assert_eq!(
        form.recover(&api).message,
        "Password must be at least 4 characters long."
    );
    assert_eq!(api.transport().request_count(), 0);

    api.transport().ok_message("Password updated");
    let form = RestoreForm {
        new_password: "abcd".into(),
        ..form
    };
    assert_eq!(form.recover(&api).message, "Password updated");
    assert_eq!(
        api.transport().last_request().expect("request").body,
        Some(json!({
            "email": "anna@joki.com",
            "verificationCode": "123456",
            "newPassword": "abcd"
        }))
    );
}
