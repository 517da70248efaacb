use crate::cli::commands::args::catalog_list;
use crate::cli::commands::context::Context;
use crate::cli::commands::listing;
use crate::cli::parser::{ClientCommand, Commands, HistoryAction, ShopAction, TeamAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::forms::account::AccountForm;
use crate::forms::booking::BookingForm;
use crate::forms::cart::AddToCartForm;
use crate::forms::history::{ReviewForm, cancel};
use crate::models::appointment::EmployeeSummary;
use crate::models::catalog::Skill;
use crate::session::Route;
use crate::ui::cards;
use crate::ui::messages::{error, info, outcome};
use crate::utils::date::{now, parse_optional_date, slot, today};
use crate::views::cart::{CART_FETCH_ERROR, CartView};
use crate::views::list::{DetailState, ListController, ViewMode};
use crate::views::sources::{ClientHistory, ClientProducts, ClientTeam, HistoryEmployee, ListView};

/// Handle the `client` subcommands. Every action needs a client session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Client { section } = cmd {
        let ctx = Context::for_route(cfg, Route::UserDashboard)?;
        match section {
            ClientCommand::Hours { from, to, services } => {
                hours(&ctx, from.as_ref(), to.as_ref(), services.as_ref())?
            }
            ClientCommand::Book {
                date,
                hour,
                services,
            } => book(&ctx, date.as_deref(), hour.as_deref(), services.as_ref())?,
            ClientCommand::History { action } => history(&ctx, action)?,
            ClientCommand::Products { action } => shop(&ctx, action)?,
            ClientCommand::Team { action } => team(&ctx, action)?,
            ClientCommand::Cart { remove } => cart(&ctx, remove.as_deref())?,
            ClientCommand::Account {
                update,
                email,
                username,
                delete,
            } => account(&ctx, *update, email.as_ref(), username.as_ref(), *delete)?,
        }
    }
    Ok(())
}

fn hours(
    ctx: &Context,
    from: Option<&String>,
    to: Option<&String>,
    services: Option<&String>,
) -> AppResult<()> {
    let form = BookingForm {
        start_date: parse_optional_date(from)?.or(Some(today())),
        end_date: parse_optional_date(to)?,
        services: catalog_list::<Skill>(services)?,
        selected_slot: None,
    };
    match form.available_hours(&ctx.api) {
        Ok(hours) => print!("{}", cards::available_hours(&hours)),
        Err(e) => {
            if !e.is_validation() {
                ctx.log("fetch_failed", "available-hours", &e.to_string());
            }
            error(e.user_message());
        }
    }
    Ok(())
}

fn book(
    ctx: &Context,
    date: Option<&str>,
    hour: Option<&str>,
    services: Option<&String>,
) -> AppResult<()> {
    let selected_slot = match (date, hour) {
        (Some(d), Some(h)) => Some(slot(d, h)),
        _ => None,
    };
    let form = BookingForm {
        services: catalog_list::<Skill>(services)?,
        selected_slot,
        ..BookingForm::default()
    };
    let result = form.book(&ctx.api, ctx.session.client_id());
    ctx.log_outcome(
        "book_appointment",
        form.selected_slot.as_deref().unwrap_or(""),
        &result,
    );
    outcome(&result);
    Ok(())
}

/// The signed-in client's id. A missing id is reported and the action
/// is skipped.
fn client_id(ctx: &Context) -> Option<&str> {
    match ctx.session.require_client_id() {
        Ok(id) => Some(id),
        Err(e) => {
            error(e.user_message());
            None
        }
    }
}

fn history(ctx: &Context, action: &HistoryAction) -> AppResult<()> {
    let view = ListView::ClientHistory;
    let Some(client_id) = client_id(ctx) else {
        return Ok(());
    };
    let mut list: ListController<_, EmployeeSummary> = ListController::new(ClientHistory {
        api: &ctx.api,
        client_id: client_id.to_string(),
    });

    match action {
        HistoryAction::List(args) => {
            listing::list(ctx, view, &mut list, args, cards::appointments_table)?;
        }
        HistoryAction::Show { index } => {
            if let Some(position) = listing::reload(ctx, view, &mut list, *index)? {
                list.select_with(position, &HistoryEmployee { api: &ctx.api })?;
                if let DetailState::Failed(msg) = list.detail() {
                    ctx.log("fetch_failed", "employee", msg);
                }
                if let ViewMode::Detail(appointment) = list.mode() {
                    println!(
                        "{}",
                        cards::history_detail(appointment, list.detail().ready())
                    );
                }
            }
        }
        HistoryAction::Cancel { index } => {
            if let Some(appointment) = listing::pick(ctx, view, &mut list, *index)? {
                let result = cancel(&ctx.api, client_id, &appointment, now());
                ctx.log_outcome(
                    "cancel_appointment",
                    appointment.appointment_id.as_deref().unwrap_or(""),
                    &result,
                );
                outcome(&result);
            }
        }
        HistoryAction::Review {
            index,
            comment,
            rating,
        } => {
            if let Some(appointment) = listing::pick(ctx, view, &mut list, *index)? {
                let form = ReviewForm {
                    comment: comment.clone(),
                    rating: *rating,
                };
                let result = form.submit(&ctx.api, &appointment, now());
                ctx.log_outcome(
                    "leave_review",
                    appointment.appointment_id.as_deref().unwrap_or(""),
                    &result,
                );
                outcome(&result);
            }
        }
    }
    Ok(())
}

fn shop(ctx: &Context, action: &ShopAction) -> AppResult<()> {
    let view = ListView::ClientProducts;
    let mut list: ListController<_, ()> = ListController::new(ClientProducts { api: &ctx.api });

    match action {
        ShopAction::List(args) => {
            listing::list(ctx, view, &mut list, args, cards::products_table)?;
        }
        ShopAction::Show { index } => {
            if let Some(product) = listing::pick(ctx, view, &mut list, *index)? {
                println!("{}", cards::product_detail(&product));
            }
        }
        ShopAction::AddToCart { index, quantity } => {
            let Some(client_id) = client_id(ctx) else {
                return Ok(());
            };
            if let Some(product) = listing::pick(ctx, view, &mut list, *index)? {
                let result = AddToCartForm::for_product(&product, *quantity).submit(&ctx.api, client_id);
                ctx.log_outcome("add_to_cart", &product.product_id, &result);
                outcome(&result);
            }
        }
    }
    Ok(())
}

fn team(ctx: &Context, action: &TeamAction) -> AppResult<()> {
    let view = ListView::ClientTeam;
    let mut list: ListController<_, ()> = ListController::new(ClientTeam { api: &ctx.api });

    match action {
        TeamAction::List(args) => {
            listing::list(ctx, view, &mut list, args, cards::team_table)?;
        }
        TeamAction::Show { index } => {
            if let Some(member) = listing::pick(ctx, view, &mut list, *index)? {
                println!("{}", cards::team_member_detail(&member));
            }
        }
    }
    Ok(())
}

fn cart(ctx: &Context, remove: Option<&str>) -> AppResult<()> {
    let Some(client_id) = client_id(ctx) else {
        return Ok(());
    };

    let view = match remove {
        Some(name) => {
            let mut view = CartView::default();
            let result = view.remove(&ctx.api, client_id, name);
            ctx.log_outcome("remove_from_cart", name, &result);
            outcome(&result);
            if result.success {
                view
            } else {
                CartView::load(&ctx.api, client_id)
            }
        }
        None => CartView::load(&ctx.api, client_id),
    };

    if !view.is_empty() {
        println!("{}", cards::cart_table(&view.cart));
    }
    match view.message.as_deref() {
        Some(CART_FETCH_ERROR) => {
            ctx.log("fetch_failed", "shopping-cart", CART_FETCH_ERROR);
            error(CART_FETCH_ERROR);
        }
        Some(msg) => info(msg),
        None => {}
    }
    println!("{}", view.total_label());
    Ok(())
}

fn account(
    ctx: &Context,
    update: bool,
    email: Option<&String>,
    username: Option<&String>,
    delete: bool,
) -> AppResult<()> {
    let Some(client_id) = client_id(ctx) else {
        return Ok(());
    };

    if delete {
        let result = AccountForm::delete(&ctx.api, client_id);
        ctx.log_outcome("delete_account", client_id, &result);
        outcome(&result);
        return Ok(());
    }

    let mut form = match AccountForm::load(&ctx.api, client_id) {
        Ok(form) => form,
        Err(failed) => {
            ctx.log("fetch_failed", "account-information", &failed.message);
            outcome(&failed);
            return Ok(());
        }
    };

    if update {
        if let Some(v) = email {
            form.email = v.clone();
        }
        if let Some(v) = username {
            form.username = v.clone();
        }
        let result = form.update(&ctx.api, client_id);
        ctx.log_outcome("update_account", client_id, &result);
        outcome(&result);
    } else {
        println!("Email:    {}", form.email);
        println!("Username: {}", form.username);
    }
    Ok(())
}
