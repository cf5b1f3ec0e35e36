use super::*;
use crate::net::types::LoginResponse;
use crate::state::session::{MemorySessionStorage, SessionStore};

fn session(role: Role) -> Session {
    Session { token: "T".to_owned(), role, email: "a@b.com".to_owned() }
}

// =============================================================
// Route table
// =============================================================

#[test]
fn known_paths_resolve() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path("/admin"), AppRoute::Admin);
}

#[test]
fn trailing_slash_and_query_are_ignored() {
    assert_eq!(AppRoute::from_path("/admin/"), AppRoute::Admin);
    assert_eq!(AppRoute::from_path("/dashboard?tab=slips"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path("/dashboard#top"), AppRoute::Dashboard);
}

#[test]
fn unknown_paths_resolve_to_login() {
    for path in ["/nope", "/admin/extra", "", "/Dashboard", "/salary-slip"] {
        assert_eq!(AppRoute::from_path(path), AppRoute::Login, "path {path:?}");
    }
}

#[test]
fn unknown_paths_are_reachable_for_any_session() {
    for s in [None, Some(session(Role::Employee)), Some(session(Role::Admin))] {
        let route = AppRoute::from_path("/missing");
        assert_eq!(route, AppRoute::Login);
        assert_eq!(check_route(route, s.as_ref()), Access::Allowed);
    }
}

#[test]
fn path_round_trips() {
    for route in [AppRoute::Login, AppRoute::Dashboard, AppRoute::Admin] {
        assert_eq!(AppRoute::from_path(route.path()), route);
    }
}

#[test]
fn each_role_has_a_home() {
    assert_eq!(AppRoute::home(Role::Employee), AppRoute::Dashboard);
    assert_eq!(AppRoute::home(Role::Admin), AppRoute::Admin);
}

// =============================================================
// can_access
// =============================================================

#[test]
fn empty_session_is_denied_for_every_requirement() {
    for required in [None, Some(Role::Employee), Some(Role::Admin)] {
        assert_eq!(can_access(None, required), Access::Redirect(AppRoute::Login));
    }
}

#[test]
fn employee_is_denied_admin_and_sent_home() {
    let s = session(Role::Employee);
    assert_eq!(can_access(Some(&s), Some(Role::Admin)), Access::Redirect(AppRoute::Dashboard));
}

#[test]
fn admin_is_denied_employee_and_sent_home() {
    let s = session(Role::Admin);
    assert_eq!(can_access(Some(&s), Some(Role::Employee)), Access::Redirect(AppRoute::Admin));
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(can_access(Some(&session(Role::Employee)), Some(Role::Employee)), Access::Allowed);
    assert_eq!(can_access(Some(&session(Role::Admin)), Some(Role::Admin)), Access::Allowed);
}

#[test]
fn any_session_satisfies_no_requirement() {
    assert_eq!(can_access(Some(&session(Role::Employee)), None), Access::Allowed);
    assert_eq!(can_access(Some(&session(Role::Admin)), None), Access::Allowed);
}

#[test]
fn protected_routes_require_session() {
    assert_eq!(check_route(AppRoute::Dashboard, None), Access::Redirect(AppRoute::Login));
    assert_eq!(check_route(AppRoute::Admin, None), Access::Redirect(AppRoute::Login));
    assert_eq!(check_route(AppRoute::Login, None), Access::Allowed);
}

// =============================================================
// Login -> navigation scenario
// =============================================================

#[test]
fn employee_login_then_admin_navigation_is_denied() {
    let store = SessionStore::new(MemorySessionStorage::default());
    store.establish("a@b.com", LoginResponse { access_token: "T".to_owned(), role: Role::Employee });

    let current = store.get_session();
    assert_eq!(
        current,
        Some(Session { token: "T".to_owned(), role: Role::Employee, email: "a@b.com".to_owned() })
    );
    assert_eq!(check_route(AppRoute::Admin, current.as_ref()), Access::Redirect(AppRoute::Dashboard));
    assert_eq!(check_route(AppRoute::Dashboard, current.as_ref()), Access::Allowed);
}

#[test]
fn logout_is_seen_on_next_check() {
    let store = SessionStore::new(MemorySessionStorage::default());
    store.set_session("T", Role::Admin, "boss@x.com");
    assert_eq!(check_route(AppRoute::Admin, store.get_session().as_ref()), Access::Allowed);

    store.clear_session();
    assert_eq!(
        check_route(AppRoute::Admin, store.get_session().as_ref()),
        Access::Redirect(AppRoute::Login)
    );
}
