use crate::cli::commands::args::{catalog_list, schedule_entry};
use crate::cli::commands::context::Context;
use crate::cli::commands::listing;
use crate::cli::parser::{
    AdminCommand, AppointmentAction, Commands, EmployeeAction, EmployeeArgs, ProductAction,
    ProductArgs,
};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::forms::employee::EmployeeForm;
use crate::forms::product::ProductForm;
use crate::forms::statistics::StatisticsForm;
use crate::models::catalog::{Category, Skill};
use crate::session::Route;
use crate::ui::cards;
use crate::ui::messages::{error, outcome};
use crate::utils::date::{parse_date, parse_optional_date};
use crate::views::list::{DetailState, ListController, ViewMode};
use crate::views::sources::{
    AdminAppointmentParties, AdminAppointments, AdminEmployees, AdminProducts,
    AppointmentParties, ListView,
};

/// Handle the `admin` subcommands. Every action needs an admin session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Admin { section } = cmd {
        let ctx = Context::for_route(cfg, Route::AdminDashboard)?;
        match section {
            AdminCommand::Employees { action } => employees(&ctx, action)?,
            AdminCommand::Products { action } => products(&ctx, action)?,
            AdminCommand::Appointments { action } => appointments(&ctx, action)?,
            AdminCommand::Stats { from, to } => stats(&ctx, from.as_ref(), to.as_ref())?,
        }
    }
    Ok(())
}

fn apply_employee_fields(form: &mut EmployeeForm, fields: &EmployeeArgs) -> AppResult<()> {
    if let Some(name) = &fields.name {
        form.complete_name = name.clone();
    }
    if let Some(email) = &fields.email {
        form.email = email.clone();
    }
    if fields.skills.is_some() {
        form.skills = catalog_list::<Skill>(fields.skills.as_ref())?;
    }
    Ok(())
}

fn employees(ctx: &Context, action: &EmployeeAction) -> AppResult<()> {
    let view = ListView::AdminEmployees;
    let mut list: ListController<_, ()> = ListController::new(AdminEmployees { api: &ctx.api });

    match action {
        EmployeeAction::List(args) => {
            listing::list(ctx, view, &mut list, args, cards::employees_table)?;
        }
        EmployeeAction::Show { index } => {
            if let Some(employee) = listing::pick(ctx, view, &mut list, *index)? {
                println!("{}", cards::employee_detail(&employee));
            }
        }
        EmployeeAction::Add {
            fields,
            schedule,
            hire_date,
        } => {
            let mut form = EmployeeForm::default();
            apply_employee_fields(&mut form, fields)?;
            for entry in schedule {
                let (day, hours) = schedule_entry(entry)?;
                form.work_schedule.set(day, hours);
            }
            if let Some(d) = hire_date {
                form.hire_date = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            }
            let result = form.create(&ctx.api);
            ctx.log_outcome("create_employee", &form.complete_name, &result);
            outcome(&result);
        }
        EmployeeAction::Update { index, fields } => {
            if let Some(employee) = listing::pick(ctx, view, &mut list, *index)? {
                let mut form = EmployeeForm::from_employee(&employee);
                apply_employee_fields(&mut form, fields)?;
                let result = form.update(&ctx.api);
                ctx.log_outcome("update_employee", &employee.employee_id, &result);
                outcome(&result);
            }
        }
        EmployeeAction::Delete { index } => {
            if let Some(employee) = listing::pick(ctx, view, &mut list, *index)? {
                let result = EmployeeForm::from_employee(&employee).delete(&ctx.api);
                ctx.log_outcome("delete_employee", &employee.employee_id, &result);
                outcome(&result);
            }
        }
    }
    Ok(())
}

fn apply_product_fields(form: &mut ProductForm, fields: &ProductArgs) -> AppResult<()> {
    if let Some(v) = &fields.name {
        form.name = v.clone();
    }
    if let Some(v) = &fields.description {
        form.description = v.clone();
    }
    if let Some(v) = fields.price {
        form.price = v;
    }
    if let Some(v) = fields.stock {
        form.stock_quantity = v;
    }
    if fields.categories.is_some() {
        form.categories = catalog_list::<Category>(fields.categories.as_ref())?;
    }
    if let Some(v) = &fields.brand {
        form.brand = v.clone();
    }
    if let Some(v) = &fields.image {
        form.image = v.clone();
    }
    Ok(())
}

fn products(ctx: &Context, action: &ProductAction) -> AppResult<()> {
    let view = ListView::AdminProducts;
    let mut list: ListController<_, ()> = ListController::new(AdminProducts { api: &ctx.api });

    match action {
        ProductAction::List(args) => {
            listing::list(ctx, view, &mut list, args, cards::products_table)?;
        }
        ProductAction::Show { index } => {
            if let Some(product) = listing::pick(ctx, view, &mut list, *index)? {
                println!("{}", cards::product_detail(&product));
            }
        }
        ProductAction::Add(fields) => {
            let mut form = ProductForm::default();
            apply_product_fields(&mut form, fields)?;
            let result = form.create(&ctx.api);
            ctx.log_outcome("create_product", &form.name, &result);
            outcome(&result);
        }
        ProductAction::Update { index, fields } => {
            if let Some(product) = listing::pick(ctx, view, &mut list, *index)? {
                let mut form = ProductForm::from_product(&product);
                apply_product_fields(&mut form, fields)?;
                let result = form.update(&ctx.api);
                ctx.log_outcome("update_product", &product.product_id, &result);
                outcome(&result);
            }
        }
        ProductAction::Delete { index } => {
            if let Some(product) = listing::pick(ctx, view, &mut list, *index)? {
                let result = ProductForm::from_product(&product).delete(&ctx.api);
                ctx.log_outcome("delete_product", &product.product_id, &result);
                outcome(&result);
            }
        }
    }
    Ok(())
}

fn appointments(ctx: &Context, action: &AppointmentAction) -> AppResult<()> {
    let view = ListView::AdminAppointments;
    let mut list: ListController<_, AppointmentParties> =
        ListController::new(AdminAppointments { api: &ctx.api });

    match action {
        AppointmentAction::List(args) => {
            listing::list(ctx, view, &mut list, args, cards::appointments_table)?;
        }
        AppointmentAction::Show { index } => {
            if let Some(position) = listing::reload(ctx, view, &mut list, *index)? {
                list.select_with(position, &AdminAppointmentParties { api: &ctx.api })?;
                if let DetailState::Failed(msg) = list.detail() {
                    error(msg);
                }
                if let ViewMode::Detail(appointment) = list.mode() {
                    println!(
                        "{}",
                        cards::appointment_detail(appointment, list.detail().ready())
                    );
                }
            }
        }
    }
    Ok(())
}

fn stats(ctx: &Context, from: Option<&String>, to: Option<&String>) -> AppResult<()> {
    let form = StatisticsForm {
        start_date: parse_optional_date(from)?,
        end_date: parse_optional_date(to)?,
    };
    let (result, report) = form.generate(&ctx.api);
    if !result.success {
        ctx.log("report_failed", "general-report", &result.message);
    }
    outcome(&result);
    if let Some(report) = report {
        println!("{}", cards::report_table(&report));
    }
    Ok(())
}
