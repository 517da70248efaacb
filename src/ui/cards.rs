//! Text renderings of cards (one line per item in a table) and detail
//! screens (labelled fields).

use crate::models::appointment::{Appointment, AvailableHours, EmployeeSummary};
use crate::models::cart::Cart;
use crate::models::catalog::{Catalog, Skill, incoming_labels};
use crate::models::employee::{Employee, WEEK, weekday_key};
use crate::models::product::Product;
use crate::models::report::GeneralReport;
use crate::models::review::Review;
use crate::utils::colors::{color_for_status, color_for_stock, paint};
use crate::utils::date::describe_date_time;
use crate::utils::format_price;
use crate::utils::formatting::{bold, italic, wrap_indented};
use crate::utils::table::{Column, Table};
use crate::views::sources::AppointmentParties;

pub const UNKNOWN_EMPLOYEE: &str = "Unknown Employee";
pub const UNKNOWN_CLIENT: &str = "Unknown Client";

const LABEL_WIDTH: usize = 14;
const WRAP_WIDTH: usize = 72;

fn field(label: &str, value: impl AsRef<str>) -> String {
    format!("{:<w$}{}\n", format!("{}:", label), value.as_ref(), w = LABEL_WIDTH)
}

/// Service codes as sent by the backend, shown with their labels when known.
fn service_labels(services: &[String]) -> String {
    services
        .iter()
        .map(|s| {
            Skill::from_code(s)
                .map(|k| k.label().to_string())
                .unwrap_or_else(|| s.clone())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn reviews_block(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return field("Reviews", italic("No reviews yet"));
    }
    let mut out = field("Reviews", reviews.len().to_string());
    for r in reviews {
        out.push_str(&format!("  {} {}/5\n", r.stars(), r.rating));
        out.push_str(&wrap_indented(&r.comment, WRAP_WIDTH, "    "));
        out.push('\n');
    }
    out
}

// ---------------------------
// Cards (list rows)
// ---------------------------

pub fn employees_table(employees: &[Employee]) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Name", 28),
        Column::new("Email", 32),
        Column::new("Skills", 40),
    ]);
    for (i, e) in employees.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            e.complete_name.clone(),
            e.email.clone(),
            incoming_labels(&e.skills),
        ]);
    }
    table.render()
}

pub fn products_table(products: &[Product]) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Name", 28),
        Column::new("Brand", 18),
        Column::new("Price", 10),
        Column::new("Stock", 6),
    ]);
    for (i, p) in products.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            p.name.clone(),
            p.brand.clone(),
            format_price(p.price),
            p.stock_quantity.to_string(),
        ]);
    }
    table.render()
}

pub fn appointments_table(appointments: &[Appointment]) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Date", 30),
        Column::new("Services", 36),
        Column::new("Price", 10),
        Column::new("Status", 12),
    ]);
    for (i, a) in appointments.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            describe_date_time(&a.appointment_date_time),
            service_labels(&a.services),
            format_price(a.price),
            a.status.clone(),
        ]);
    }
    table.render()
}

pub fn team_table(members: &[EmployeeSummary]) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Name", 28),
        Column::new("Skills", 40),
        Column::new("Reviews", 8),
    ]);
    for (i, m) in members.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            m.complete_name.clone(),
            incoming_labels(&m.skills),
            m.reviews.len().to_string(),
        ]);
    }
    table.render()
}

pub fn cart_table(cart: &Cart) -> String {
    let mut table = Table::new(vec![
        Column::new("Product", 28),
        Column::new("Brand", 18),
        Column::new("Quantity", 8),
        Column::new("Price", 10),
    ]);
    for line in &cart.products_in_shopping_cart {
        table.add_row(vec![
            line.product_name.clone(),
            line.brand_name.clone(),
            line.selected_qty.to_string(),
            format_price(line.total_price),
        ]);
    }
    table.render()
}

pub fn report_table(report: &GeneralReport) -> String {
    let mut out = String::new();
    for r in &report.service_demand_report {
        let name = Skill::from_code(&r.service_type)
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| r.service_type.clone());
        out.push_str(&bold(&name));
        out.push('\n');
        out.push_str(&format!("  Total Bookings: {}\n", r.total_bookings));
        out.push_str(&format!("  Total Revenue: {}\n", format_price(r.total_revenue)));
        out.push_str(&format!("  Total Service Time: {} hrs\n", r.total_service_time));
    }
    out
}

/// Free slots grouped by day, numbered so one can be picked for booking.
pub fn available_hours(hours: &AvailableHours) -> String {
    if hours.values().all(Vec::is_empty) {
        return "No available hours in this range.\n".to_string();
    }
    let mut out = String::new();
    for (date, slots) in hours {
        if slots.is_empty() {
            continue;
        }
        out.push_str(&bold(date));
        out.push('\n');
        let line = slots
            .iter()
            .map(|h| h.chars().take(5).collect::<String>())
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&format!("  {}\n", line));
    }
    out
}

// ---------------------------
// Details
// ---------------------------

pub fn employee_detail(e: &Employee) -> String {
    let mut out = format!("{}\n", bold(&e.complete_name));
    out.push_str(&field("Email", &e.email));
    out.push_str(&field("Skills", incoming_labels(&e.skills)));
    if let Some(d) = &e.hire_date {
        out.push_str(&field("Hired", d));
    }
    if let Some(s) = &e.current_status {
        out.push_str(&field("Status", s));
    }
    out.push_str("Schedule:\n");
    for day in WEEK {
        let hours = e.work_schedule.work_schedule.day(day);
        let text = if hours.is_off() {
            "off".to_string()
        } else {
            format!(
                "{} - {}",
                hours.start_time.as_deref().unwrap_or("?"),
                hours.end_time.as_deref().unwrap_or("?")
            )
        };
        out.push_str(&format!("  {:<10}{}\n", weekday_key(day), text));
    }
    out.push_str(&reviews_block(&e.reviews));
    out
}

pub fn product_detail(p: &Product) -> String {
    let mut out = format!("{}\n", bold(&p.name));
    out.push_str(&wrap_indented(&p.description, WRAP_WIDTH, ""));
    out.push('\n');
    out.push_str(&field("Brand", &p.brand));
    out.push_str(&field("Price", format_price(p.price)));
    out.push_str(&field(
        "Stock",
        paint(color_for_stock(p.stock_quantity), &p.stock_quantity.to_string()),
    ));
    out.push_str(&field("Categories", incoming_labels(&p.categories)));
    if let Some(r) = p.rating {
        out.push_str(&field("Rating", format!("{:.1}/5", r)));
    }
    if let Some(img) = p.primary_image() {
        out.push_str(&field("Image", img));
    }
    out
}

fn appointment_fields(a: &Appointment) -> String {
    let mut out = field("Date", describe_date_time(&a.appointment_date_time));
    out.push_str(&field("Status", paint(color_for_status(&a.status), &a.status)));
    out.push_str(&field("Price", format_price(a.price)));
    out
}

fn services_list(a: &Appointment) -> String {
    let mut out = String::from("Services:\n");
    for s in &a.services {
        let label = Skill::from_code(s).map(|k| k.label()).unwrap_or(s.as_str());
        out.push_str(&format!("  - {}\n", label));
    }
    out
}

/// Admin view: the appointment plus its resolved client and employee.
pub fn appointment_detail(a: &Appointment, parties: Option<&AppointmentParties>) -> String {
    let mut out = format!("{}\n", bold("Appointment Details"));
    out.push_str(&appointment_fields(a));
    let employee = parties
        .and_then(|p| p.employee.as_ref())
        .map(|e| e.complete_name.as_str())
        .unwrap_or(UNKNOWN_EMPLOYEE);
    let client = parties.and_then(|p| p.client.as_ref());
    out.push_str(&field("Employee", employee));
    out.push_str(&field(
        "Client",
        client.map(|c| c.username.as_str()).unwrap_or(UNKNOWN_CLIENT),
    ));
    out.push_str(&field(
        "Client email",
        client.map(|c| c.email.as_str()).unwrap_or(UNKNOWN_CLIENT),
    ));
    out.push_str(&services_list(a));
    out
}

/// Client view of one past or upcoming appointment.
pub fn history_detail(a: &Appointment, employee: Option<&EmployeeSummary>) -> String {
    let mut out = format!("{}\n", bold("Appointment Details"));
    out.push_str(&appointment_fields(a));
    out.push_str(&field(
        "Employee",
        employee
            .map(|e| e.complete_name.as_str())
            .unwrap_or(UNKNOWN_EMPLOYEE),
    ));
    out.push_str(&services_list(a));
    out
}

pub fn team_member_detail(m: &EmployeeSummary) -> String {
    let mut out = format!("{}\n", bold(&m.complete_name));
    out.push_str(&field("Skills", incoming_labels(&m.skills)));
    out.push_str(&reviews_block(&m.reviews));
    out
}
