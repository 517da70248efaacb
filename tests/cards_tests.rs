use jokisalon::models::appointment::{Appointment, AvailableHours};
use jokisalon::ui::cards::{
    UNKNOWN_CLIENT, UNKNOWN_EMPLOYEE, appointment_detail, available_hours, history_detail,
};
use jokisalon::utils::date::{describe_date_time, slot};
use jokisalon::utils::format_price;
use jokisalon::utils::formatting::truncate;
use jokisalon::utils::table::{Column, Table};
use jokisalon::views::sources::AppointmentParties;

fn appointment() -> Appointment {
    Appointment {
        appointment_id: Some("a1".into()),
        client_id: "c7".into(),
        employee_id: "e1".into(),
        appointment_date_time: "2025-06-01T10:00:00".into(),
        services: vec!["HAIRCUT".into(), "BLOW_DRY".into()],
        price: 40.0,
        status: "BOOKED".into(),
    }
}

#[test]
fn test_date_time_is_spelled_out() {
    assert_eq!(
        describe_date_time("2025-06-01T10:00:00"),
        "June 1, 2025 at 10:00 AM"
    );
    assert_eq!(
        describe_date_time("2025-12-24T15:30:00.000+01:00"),
        "December 24, 2025 at 03:30 PM"
    );
    assert_eq!(describe_date_time("soon"), "soon");
}

#[test]
fn test_slot_drops_seconds() {
    assert_eq!(slot("2025-06-01", "09:00:00"), "2025-06-01T09:00");
}

#[test]
fn test_prices_have_two_decimals() {
    assert_eq!(format_price(12.5), "$12.50");
    assert_eq!(format_price(0.0), "$0.00");
}

#[test]
fn test_unresolved_parties_show_unknown() {
    let detail = appointment_detail(&appointment(), None);
    assert!(detail.contains(UNKNOWN_EMPLOYEE));
    assert!(detail.contains(UNKNOWN_CLIENT));
    assert!(detail.contains("June 1, 2025 at 10:00 AM"));
    assert!(detail.contains("Blow Dry"));

    let half = AppointmentParties::default();
    assert!(appointment_detail(&appointment(), Some(&half)).contains(UNKNOWN_EMPLOYEE));
    assert!(history_detail(&appointment(), None).contains(UNKNOWN_EMPLOYEE));
}

#[test]
fn test_available_hours_listing() {
    let mut hours = AvailableHours::new();
    hours.insert("2025-06-02".into(), vec!["09:00:00".into(), "11:30:00".into()]);
    hours.insert("2025-06-03".into(), Vec::new());

    let out = available_hours(&hours);
    assert!(out.contains("2025-06-02"));
    assert!(out.contains("09:00  11:30"));
    assert!(!out.contains("2025-06-03"));

    assert_eq!(
        available_hours(&AvailableHours::new()),
        "No available hours in this range.\n"
    );
}

#[test]
fn test_table_cuts_long_cells() {
    assert_eq!(truncate("Nourishing argan oil", 10), "Nourish...");

    let mut table = Table::new(vec![Column::new("Name", 10), Column::new("Price", 8)]);
    table.add_row(vec!["Nourishing argan oil".into(), format_price(12.5)]);
    let out = table.render();
    assert!(out.starts_with("Name"));
    assert!(out.contains("Nourish..."));
    assert!(out.contains("$12.50"));
}
