//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages install the same guard effect and share one logout path,
//! so redirect behavior cannot drift between pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionState, SessionStore};
use crate::util::guard::{Access, AppRoute, check_route};

/// Where the guard should send the user, if anywhere.
///
/// Nothing happens until browser storage has been read, so a reload of a
/// protected page does not bounce through the login page.
pub fn guard_redirect(route: AppRoute, state: &SessionState, current: Option<&Session>) -> Option<AppRoute> {
    if !state.loaded {
        return None;
    }
    match check_route(route, current) {
        Access::Allowed => None,
        Access::Redirect(target) => Some(target),
    }
}

/// Re-check access to `route` whenever the session mirror changes.
///
/// The store is read on every run rather than trusting the mirror, so a
/// session cleared elsewhere in the tab is honored.
pub fn install_route_guard<F>(route: AppRoute, session: RwSignal<SessionState>, store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if let Some(target) = guard_redirect(route, &state, store.get_session().as_ref()) {
            navigate(target.path(), NavigateOptions::default());
        }
    });
}

/// Clear the session locally and return to the login page.
///
/// Never touches the network, so it succeeds with the backend down.
pub fn sign_out<F>(store: &SessionStore, session: RwSignal<SessionState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    store.clear_session();
    session.set(SessionState::loaded(None));
    navigate(AppRoute::Login.path(), NavigateOptions::default());
}
