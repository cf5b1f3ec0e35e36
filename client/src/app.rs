//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::{API_BASE_META, ApiConfig};
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{SessionState, SessionStore};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is the payroll backend URL handed to the browser.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, its reactive mirror, the API configuration,
/// and the toast queue, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(ApiConfig::resolve());
    provide_context(store.clone());
    provide_context(session);
    provide_context(toasts);

    // Effects only run in the browser, so the first render matches SSR and
    // the stored session is picked up right after hydration.
    Effect::new(move || {
        session.set(SessionState::loaded(store.get_session()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/payroll-portal.css"/>
        <Title text="Payroll Management System"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
