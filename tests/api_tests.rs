use jokisalon::api::SalonApi;
use jokisalon::api::mock::MockTransport;
use jokisalon::api::transport::Method;
use jokisalon::errors::{AppError, GENERIC_ERROR, UNEXPECTED_FORMAT};
use jokisalon::models::catalog::{Category, Incoming, Skill, incoming_labels};
use jokisalon::models::cart::AddProductCredentials;
use jokisalon::models::review::Review;
use jokisalon::session::Role;
use jokisalon::models::account::LoginCredentials;
use jokisalon::ui::cards::{employee_detail, product_detail};
use chrono::NaiveDate;
use serde_json::json;

fn api() -> SalonApi<MockTransport> {
    SalonApi::new(MockTransport::new())
}

#[test]
fn test_paginated_listing_sends_page_and_size() {
    let api = api();
    api.transport().ok_data(json!({
        "content": [{"productId": "p1", "name": "Argan Oil", "price": 12.5}],
        "totalPages": 3,
        "currentPage": 1
    }));

    let page = api.get_admin_products(1).expect("page");
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.content[0].name, "Argan Oil");

    let req = api.transport().last_request().expect("request");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/api/admin/get-products");
    assert_eq!(req.query_value("page"), Some("1"));
    assert_eq!(req.query_value("size"), Some("8"));
}

#[test]
fn test_login_uses_role_segment() {
    let api = api();
    api.transport().ok_data(json!("admin-42"));

    let id = api
        .login(
            Role::Admin,
            &LoginCredentials {
                username: "boss".into(),
                password: "secret".into(),
            },
        )
        .expect("login");
    assert_eq!(id, "admin-42");

    let req = api.transport().last_request().expect("request");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/api/auth/admin/login");
    assert_eq!(
        req.body,
        Some(json!({"username": "boss", "password": "secret"}))
    );
}

#[test]
fn test_error_status_surfaces_server_message() {
    let api = api();
    api.transport().fail(401, "Invalid username or password");

    let err = api
        .login(
            Role::Client,
            &LoginCredentials {
                username: "anna".into(),
                password: "nope".into(),
            },
        )
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid username or password");
}

#[test]
fn test_error_status_without_message_is_generic() {
    let api = api();
    api.transport().respond(500, "<html>boom</html>");

    let err = api.delete_product("p1").unwrap_err();
    assert!(matches!(err, AppError::Api(_)));
    assert_eq!(err.user_message(), GENERIC_ERROR);
}

#[test]
fn test_missing_data_is_unexpected_format() {
    let api = api();
    api.transport().ok_message("OK");

    let err = api.load_shopping_cart("c1").unwrap_err();
    assert_eq!(err.user_message(), UNEXPECTED_FORMAT);
}

#[test]
fn test_network_failure_is_generic() {
    let api = api();
    api.transport().network_error();

    let err = api.get_all_employees(0).unwrap_err();
    assert_eq!(err.user_message(), GENERIC_ERROR);
}

#[test]
fn test_string_status_is_accepted() {
    let api = api();
    api.transport().respond(
        200,
        json!({"status": "OK", "message": "Product deleted"}).to_string(),
    );

    assert_eq!(api.delete_product("p9").expect("delete"), "Product deleted");
    assert_eq!(
        api.transport().last_request().expect("request").path,
        "/api/admin/delete-product/p9"
    );
}

#[test]
fn test_available_hours_joins_service_codes() {
    let api = api();
    api.transport().ok_data(json!({"2025-06-01": ["09:00:00", "10:00:00"]}));

    let hours = api
        .get_available_hours(
            NaiveDate::from_ymd_opt(2025, 6, 1).expect("date"),
            NaiveDate::from_ymd_opt(2025, 6, 3).expect("date"),
            &[Skill::Haircut, Skill::BlowDry],
        )
        .expect("hours");
    assert_eq!(hours["2025-06-01"].len(), 2);

    let req = api.transport().last_request().expect("request");
    assert_eq!(req.path, "/api/client/get-available-hours");
    assert_eq!(req.query_value("startDate"), Some("2025-06-01"));
    assert_eq!(req.query_value("endDate"), Some("2025-06-03"));
    assert_eq!(req.query_value("services"), Some("HAIRCUT,BLOW_DRY"));
}

#[test]
fn test_cart_endpoints_use_client_path() {
    let api = api();
    api.transport().ok_message("Product added to cart");

    let msg = api
        .add_product_to_cart(
            "c7",
            &AddProductCredentials {
                product_id: "p1".into(),
                quantity: 2,
            },
        )
        .expect("add");
    assert_eq!(msg, "Product added to cart");

    let req = api.transport().last_request().expect("request");
    assert_eq!(req.path, "/api/client/c7/add-product-sp");
    assert_eq!(req.body, Some(json!({"productId": "p1", "quantity": 2})));
}

#[test]
fn test_review_and_cancel_paths() {
    let api = api();
    api.transport()
        .ok_message("Review saved")
        .ok_message("Appointment cancelled");

    api.leave_review(
        "a1",
        &Review {
            comment: "Great haircut, thanks".into(),
            rating: 5,
        },
    )
    .expect("review");
    api.cancel_appointment("c7", "a2").expect("cancel");

    let requests = api.transport().requests();
    assert_eq!(requests[0].path, "/api/client/a1/leave-review");
    assert_eq!(
        requests[0].body,
        Some(json!({"comment": "Great haircut, thanks", "rating": 5}))
    );
    assert_eq!(requests[1].path, "/api/client/c7/cancel-appointment/a2");
    assert_eq!(requests[1].body, None);
}

#[test]
fn test_null_cart_fields_default() {
    let api = api();
    api.transport().ok_data(json!({
        "productsInShoppingCart": null,
        "totalPrice": null
    }));

    let cart = api.load_shopping_cart("c1").expect("cart");
    assert!(cart.products_in_shopping_cart.is_empty());
    assert_eq!(cart.total_price, 0.0);
}

#[test]
fn test_unknown_skill_does_not_reject_the_page() {
    let api = api();
    api.transport().ok_data(json!({
        "content": [
            {"employeeId": "e1", "completeName": "Marta Rossi", "skills": ["HAIRCUT"]},
            {"employeeId": "e2", "completeName": "Luca Bianchi", "skills": ["NAILS", "BEARD"]}
        ],
        "totalPages": 1,
        "currentPage": 0
    }));

    let page = api.get_all_employees(0).expect("page");
    assert_eq!(page.content.len(), 2);
    let luca = &page.content[1];
    assert_eq!(
        luca.skills,
        vec![Incoming::Unrecognized("NAILS".into()), Incoming::Known(Skill::Beard)]
    );
    assert_eq!(incoming_labels(&luca.skills), "NAILS, Beard");
    assert!(employee_detail(luca).contains("NAILS, Beard"));
}

#[test]
fn test_unknown_category_does_not_reject_the_shop() {
    let api = api();
    api.transport().ok_data(json!({
        "content": [
            {"productId": "p1", "name": "Argan Oil", "price": 12.5, "categories": ["HAIR_CARE", "PERFUME"]}
        ],
        "totalPages": 1,
        "currentPage": 0
    }));

    let page = api.load_products(0).expect("page");
    let oil = &page.content[0];
    assert_eq!(oil.categories[0], Incoming::Known(Category::HairCare));
    assert_eq!(oil.categories[1].label(), "PERFUME");
    assert!(product_detail(oil).contains("Hair care, PERFUME"));
}
