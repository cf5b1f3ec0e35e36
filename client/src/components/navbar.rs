//! Top bar for the protected pages: title, signed-in identity, logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionStore};
use crate::util::auth::sign_out;

/// Navbar shown above the dashboard and admin pages.
#[component]
pub fn Navbar(subtitle: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = move || session.get().email();
    let initial = move || session.get().session.map(|s| s.initial()).unwrap_or_default();
    let role_label = move || session.get().session.map(|s| s.role.label()).unwrap_or_default();

    let on_logout = move |_| sign_out(&store, session, &navigate);

    view! {
        <header class="navbar">
            <div class="navbar__brand">
                <h1 class="navbar__title">"Payroll Management System"</h1>
                <p class="navbar__subtitle">{subtitle}</p>
            </div>
            <div class="navbar__identity">
                <div class="navbar__who">
                    <p class="navbar__email">{email}</p>
                    <p class="navbar__role">{role_label}</p>
                </div>
                <div class="navbar__avatar" aria-hidden="true">{initial}</div>
                <button class="btn btn--link navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
