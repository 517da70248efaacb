use jokisalon::errors::AppError;
use jokisalon::session::{
    MemorySessionStore, Navigation, Role, Route, Session, SessionKey, SessionStore, guard,
    require,
};

#[test]
fn test_root_always_redirects() {
    let session = Session::default();
    assert_eq!(guard(&session, Route::Root), Navigation::Redirect(Route::Login));
    assert_eq!(guard(&session, Route::Login), Navigation::Render(Route::Login));
}

#[test]
fn test_dashboards_need_their_own_id() {
    let mut store = MemorySessionStore::new();
    let admin = Session::sign_in(&mut store, Role::Admin, "a-1").expect("sign in");

    assert_eq!(
        guard(&admin, Route::AdminDashboard),
        Navigation::Render(Route::AdminDashboard)
    );
    assert_eq!(
        guard(&admin, Route::UserDashboard),
        Navigation::Redirect(Route::Login)
    );
    assert!(matches!(
        require(&admin, Route::UserDashboard),
        Err(AppError::NotAuthenticated(Route::UserDashboard))
    ));
}

#[test]
fn test_client_sign_in_sets_both_keys() {
    let mut store = MemorySessionStore::new();
    let session = Session::sign_in(&mut store, Role::Client, "c-7").expect("sign in");

    assert!(session.is_present(SessionKey::UserId));
    assert!(session.is_present(SessionKey::ClientId));
    assert!(!session.is_present(SessionKey::AdminId));
    assert_eq!(session.require_client_id().expect("client id"), "c-7");
}

#[test]
fn test_empty_value_counts_as_absent() {
    let mut store = MemorySessionStore::new();
    store.set(SessionKey::UserId, "").expect("set");

    let session = Session::load(&store).expect("load");
    assert_eq!(session.user_id(), None);
    assert_eq!(
        guard(&session, Route::UserDashboard),
        Navigation::Redirect(Route::Login)
    );
}

#[test]
fn test_blank_value_is_still_a_session() {
    let mut store = MemorySessionStore::new();
    store.set(SessionKey::AdminId, " ").expect("set");

    let session = Session::load(&store).expect("load");
    assert_eq!(session.admin_id(), Some(" "));
    assert_eq!(
        guard(&session, Route::AdminDashboard),
        Navigation::Render(Route::AdminDashboard)
    );
}

#[test]
fn test_sign_out_clears_everything() {
    let mut store = MemorySessionStore::new();
    Session::sign_in(&mut store, Role::Admin, "a-1").expect("admin");
    Session::sign_in(&mut store, Role::Client, "c-7").expect("client");

    Session::sign_out(&mut store).expect("sign out");
    assert_eq!(Session::load(&store).expect("load"), Session::default());
}

#[test]
fn test_route_paths() {
    for route in [
        Route::Root,
        Route::Login,
        Route::AdminDashboard,
        Route::UserDashboard,
    ] {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/settings"), None);
    assert_eq!(Role::parse("User"), Some(Role::Client));
}

#[test]
fn test_dashboard_toggle_and_logout() {
    use jokisalon::views::dashboard::{AdminSection, Dashboard, Section, UserSection};

    let mut admin = Dashboard::<AdminSection>::new(Route::AdminDashboard);
    assert_eq!(admin.visible(), AdminSection::Employees);
    admin.toggle(AdminSection::Statistics);
    assert_eq!(admin.visible(), AdminSection::Statistics);
    assert!(admin.header().contains("[Statistics]"));
    assert!(!admin.header().contains("[Employees]"));
    assert_eq!(admin.logout(), Route::Login);

    let user = Dashboard::<UserSection>::new(Route::UserDashboard);
    assert!(user.header().contains("[Home]"));
    assert_eq!(UserSection::parse("cart"), Some(UserSection::Cart));
    assert_eq!(UserSection::parse("billing"), None);
}
