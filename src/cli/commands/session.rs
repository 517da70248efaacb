//! Session commands: login, sign-up, logout, password restore and the
//! route guard as seen from the terminal.

use crate::cli::commands::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::clear_cursors;
use crate::errors::{AppError, AppResult};
use crate::forms::auth::{AuthOutcome, LoginForm, RestoreForm, SignupForm};
use crate::session::{Navigation, Role, Route, Session, SessionKey, guard};
use crate::ui::messages::{header, info, navigation, outcome, success, warning};
use crate::utils::formatting::wrap_indented;
use crate::views::dashboard::{ABOUT_US, AdminSection, Dashboard, LoginCard, Section, UserSection};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Status => status(cfg),
        Commands::Open { path, section } => open(cfg, path, section.as_deref()),
        Commands::Login {
            role,
            username,
            password,
        } => {
            let role = role
                .or_else(|| Role::parse(&cfg.default_role))
                .unwrap_or(Role::Client);
            let form = LoginForm {
                role,
                username: username.clone(),
                password: password.clone(),
            };
            let ctx = Context::open(cfg)?;
            let result = form.submit(&ctx.api, &mut ctx.store());
            finish_auth(&ctx, "login", username, result)
        }
        Commands::Signup {
            email,
            username,
            password,
        } => {
            let form = SignupForm {
                email: email.clone(),
                username: username.clone(),
                password: password.clone(),
            };
            let ctx = Context::open(cfg)?;
            let result = form.submit(&ctx.api, &mut ctx.store());
            finish_auth(&ctx, "signup", username, result)
        }
        Commands::Logout => {
            let ctx = Context::open(cfg)?;
            Session::sign_out(&mut ctx.store())?;
            clear_cursors(&ctx.pool.conn)?;
            ctx.log("logout", "", "Session cleared");
            success("Logged out");
            navigation(Navigation::Render(Route::Login));
            Ok(())
        }
        Commands::Recover {
            email,
            code,
            new_password,
        } => {
            let ctx = Context::open(cfg)?;
            let form = RestoreForm {
                email: email.clone(),
                verification_code: code.clone().unwrap_or_default(),
                new_password: new_password.clone().unwrap_or_default(),
            };
            let result = if code.is_some() {
                let r = form.recover(&ctx.api);
                ctx.log_outcome("recover_password", email, &r);
                r
            } else {
                let r = form.send_code(&ctx.api);
                ctx.log_outcome("send_recover_code", email, &r);
                r
            };
            outcome(&result);
            Ok(())
        }
        Commands::About => {
            header(LoginCard::AboutUs);
            for paragraph in ABOUT_US {
                println!("{}\n", wrap_indented(paragraph, 72, ""));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn finish_auth(ctx: &Context, operation: &str, username: &str, result: AuthOutcome) -> AppResult<()> {
    ctx.log_outcome(operation, username, &result.outcome);
    outcome(&result.outcome);
    if let Some(role) = result.signed_in {
        let session = Session::load(&ctx.store())?;
        navigation(guard(&session, role.dashboard()));
    }
    Ok(())
}

fn status(cfg: &Config) -> AppResult<()> {
    let ctx = Context::open(cfg)?;
    for key in SessionKey::ALL {
        let state = if ctx.session.is_present(key) { "set" } else { "not set" };
        println!("{:<10} {}", key.as_str(), state);
    }
    for route in [Route::AdminDashboard, Route::UserDashboard] {
        match guard(&ctx.session, route) {
            Navigation::Render(_) => info(format!("{} available", route)),
            Navigation::Redirect(to) => warning(format!("{} redirects to {}", route, to)),
        }
    }
    Ok(())
}

fn open(cfg: &Config, path: &str, section: Option<&str>) -> AppResult<()> {
    let route =
        Route::from_path(path).ok_or_else(|| AppError::Other(format!("Unknown route: {}", path)))?;
    let ctx = Context::open(cfg)?;
    let nav = guard(&ctx.session, route);
    navigation(nav);

    let shown = match nav {
        Navigation::Render(r) | Navigation::Redirect(r) => r,
    };
    match shown {
        Route::AdminDashboard => show_dashboard::<AdminSection>(shown, section),
        Route::UserDashboard => show_dashboard::<UserSection>(shown, section),
        Route::Login | Route::Root => show_dashboard::<LoginCard>(Route::Login, section),
    }
    Ok(())
}

fn show_dashboard<S: Section>(route: Route, section: Option<&str>) {
    let mut dashboard = Dashboard::<S>::new(route);
    if let Some(name) = section {
        match S::parse(name) {
            Some(s) => dashboard.toggle(s),
            None => warning(format!("Unknown section: {}", name)),
        }
    }
    header(dashboard.header());
}
