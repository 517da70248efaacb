//! Shared pagination and selection for the list screens.
//!
//! The position of each list is saved in the `cursor` table, so `--next`
//! and `--prev` continue from the page shown by the previous invocation
//! and `show N` picks from that same page.

use crate::cli::commands::context::Context;
use crate::cli::parser::PageArgs;
use crate::db::queries::{load_cursor, save_cursor};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, warning};
use crate::views::list::{ListController, PageSource};
use crate::views::sources::ListView;

fn restore<S: PageSource, D>(
    ctx: &Context,
    view: ListView,
    controller: &mut ListController<S, D>,
) -> AppResult<()> {
    if let Some((current, total)) = load_cursor(&ctx.pool.conn, view.key())? {
        controller.restore_pager(current, total);
    }
    Ok(())
}

fn fetch_failed(ctx: &Context, view: ListView, e: &AppError) {
    ctx.log("fetch_failed", view.key(), &e.to_string());
    error(view.fetch_error_message().map(str::to_string).unwrap_or_else(|| e.user_message()));
}

/// Run a `list` action and print the resulting page.
pub fn list<S: PageSource, D>(
    ctx: &Context,
    view: ListView,
    controller: &mut ListController<S, D>,
    args: &PageArgs,
    render: fn(&[S::Item]) -> String,
) -> AppResult<()> {
    restore(ctx, view, controller)?;

    let fetched = if args.next {
        controller.next_page()
    } else if args.prev {
        controller.previous_page()
    } else {
        let page = args.page.map(|p| p.saturating_sub(1)).unwrap_or(0);
        controller.load(page).map(|_| true)
    };

    match fetched {
        Ok(true) => {}
        Ok(false) => {
            if args.next {
                warning("Already on the last page");
            } else {
                warning("Already on the first page");
            }
            return Ok(());
        }
        Err(e) => {
            fetch_failed(ctx, view, &e);
            return Ok(());
        }
    }

    let pager = *controller.pager();
    save_cursor(&ctx.pool.conn, view.key(), pager.current_page, pager.total_pages)?;

    if controller.items().is_empty() {
        info(view.empty_message());
    } else {
        info(pager.label());
        println!("{}", render(controller.items()));
    }
    Ok(())
}

/// Re-fetch the page last shown and turn a 1-based `index` into a
/// position on it.
///
/// `Ok(None)` means the page could not be fetched; the message has
/// already been printed.
pub fn reload<S: PageSource, D>(
    ctx: &Context,
    view: ListView,
    controller: &mut ListController<S, D>,
    index: usize,
) -> AppResult<Option<usize>> {
    let position = index.checked_sub(1).ok_or(AppError::InvalidSelection(index))?;
    restore(ctx, view, controller)?;
    let current = controller.pager().current_page;
    if let Err(e) = controller.load(current) {
        fetch_failed(ctx, view, &e);
        return Ok(None);
    }
    let pager = *controller.pager();
    save_cursor(&ctx.pool.conn, view.key(), pager.current_page, pager.total_pages)?;
    Ok(Some(position))
}

/// [`reload`] then select the item without any secondary fetch.
pub fn pick<S: PageSource, D>(
    ctx: &Context,
    view: ListView,
    controller: &mut ListController<S, D>,
    index: usize,
) -> AppResult<Option<S::Item>> {
    match reload(ctx, view, controller, index)? {
        Some(position) => controller.select(position).map(Some),
        None => Ok(None),
    }
}
