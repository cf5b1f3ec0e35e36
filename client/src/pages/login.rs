//! Login page with an inline signup mode.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of the session store besides logout. A successful login
//! stores the session and sends the user to their role's home page; a
//! successful signup flips the form back to login mode.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::state::forms::LoginForm;
use crate::state::session::{SessionState, SessionStore};
use crate::state::submit::{SubmitGate, begin_submit};
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::guard::AppRoute;
use crate::util::lifetime::MountGuard;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ApiConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let gate = RwSignal::new(SubmitGate::default());
    let alive = MountGuard::for_current_owner();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked();
        let (email, password) = match draft.parse() {
            Ok(fields) => fields,
            Err(msg) => {
                notify(toasts, ToastKind::Error, msg);
                return;
            }
        };
        if !begin_submit(gate) {
            return;
        }

        let api = ApiClient::new(config.clone(), store.clone());
        let store = store.clone();
        let navigate = navigate.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = if draft.signup {
                api.signup(&email, &password, draft.role).await.map(|_| None)
            } else {
                api.login(&email, &password).await.map(Some)
            };
            if !alive.is_alive() {
                return;
            }
            gate.update(SubmitGate::finish);
            match outcome {
                Ok(Some(login)) => {
                    let established = store.establish(&email, login);
                    let home = AppRoute::home(established.role);
                    session.set(SessionState::loaded(Some(established)));
                    navigate(home.path(), NavigateOptions::default());
                }
                Ok(None) => {
                    notify(toasts, ToastKind::Success, "Signup successful! Please login.");
                    form.update(|f| {
                        f.signup = false;
                        f.password.clear();
                    });
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    };

    let is_signup = move || form.get().signup;

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <h1>"Payroll System"</h1>
                    <p class="login-card__subtitle">
                        {move || if is_signup() { "Create your account" } else { "Sign in to continue" }}
                    </p>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Email Address"</span>
                        <input
                            class="field__input"
                            type="email"
                            placeholder="employee@test.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <Show when=is_signup>
                        <label class="field">
                            <span class="field__label">"Role"</span>
                            <select
                                class="field__input"
                                prop:value=move || form.get().role.as_str()
                                on:change=move |ev| {
                                    let role = Role::parse(&event_target_value(&ev)).unwrap_or(Role::Employee);
                                    form.update(|f| f.role = role);
                                }
                            >
                                <option value="employee">"Employee"</option>
                                <option value="admin">"Admin"</option>
                            </select>
                        </label>
                    </Show>
                    <button class="btn btn--primary login-form__submit" type="submit" disabled=move || gate.get().is_busy()>
                        {move || form.get().submit_label(gate.get().is_busy())}
                    </button>
                </form>
                <p class="login-card__toggle">
                    {move || if is_signup() { "Already have an account? " } else { "New here? " }}
                    <button class="btn btn--link" type="button" on:click=move |_| form.update(LoginForm::toggle_mode)>
                        {move || if is_signup() { "Login" } else { "Create account" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
