//! Admin page: employee roster and salary slip issuance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only route. The roster is fetched once after the guard admits the
//! session and feeds the employee picker of the slip form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::state::admin::AdminState;
use crate::state::forms::SlipForm;
use crate::state::session::{SessionState, SessionStore};
use crate::state::submit::{SubmitGate, begin_submit};
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::auth::install_route_guard;
use crate::util::guard::{Access, AppRoute, check_route};
use crate::util::lifetime::MountGuard;

#[component]
pub fn AdminPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ApiConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    install_route_guard(AppRoute::Admin, session, store.clone(), navigate);

    let roster = RwSignal::new(AdminState::default());
    let form = RwSignal::new(SlipForm::default());
    let gate = RwSignal::new(SubmitGate::default());
    let alive = MountGuard::for_current_owner();
    let api = ApiClient::new(config, store.clone());

    let requested = RwSignal::new(false);
    {
        let api = api.clone();
        let alive = alive.clone();
        let store = store.clone();
        Effect::new(move || {
            if requested.get_untracked() || !session.get().loaded {
                return;
            }
            if check_route(AppRoute::Admin, store.get_session().as_ref()) != Access::Allowed {
                return;
            }
            requested.set(true);
            let api = api.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = api.list_employees().await;
                if !alive.is_alive() {
                    return;
                }
                match result {
                    Ok(employees) => roster.set(AdminState { employees, loading: false }),
                    Err(e) => {
                        roster.update(|r| r.loading = false);
                        notify(toasts, ToastKind::Error, format!("Failed to load employees: {e}"));
                    }
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (user_id, month, amount) = match form.get_untracked().parse() {
            Ok(fields) => fields,
            Err(msg) => {
                notify(toasts, ToastKind::Error, msg);
                return;
            }
        };
        if !begin_submit(gate) {
            return;
        }
        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_salary_slip(user_id, &month, amount).await;
            if !alive.is_alive() {
                return;
            }
            gate.update(SubmitGate::finish);
            match result {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, "Salary slip created");
                    form.update(SlipForm::reset);
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Failed to create salary slip: {e}")),
            }
        });
    };

    let ready = move || {
        let state = session.get();
        state.loaded && check_route(AppRoute::Admin, state.session.as_ref()) == Access::Allowed
    };

    let issuing_to = move || {
        let draft = form.get();
        let id = draft.user_id.trim().parse::<i64>().ok()?;
        roster.with(|r| r.find(id).map(|e| e.email.clone()))
    };

    view! {
        <Show
            when=ready
            fallback=move || {
                view! {
                    <div class="page">
                        <p>{move || if session.get().loaded { "Redirecting..." } else { "Loading..." }}</p>
                    </div>
                }
            }
        >
            <div class="page admin-page">
                <Navbar subtitle="Admin Dashboard"/>
                <main class="page__main">
                    <section class="card form-card">
                        <h3 class="card__title">"Create Salary Slip"</h3>
                        <form class="stack" on:submit=on_submit.clone()>
                            <select
                                class="field__input"
                                prop:value=move || form.get().user_id
                                on:change=move |ev| form.update(|f| f.user_id = event_target_value(&ev))
                            >
                                <option value="">"Select employee"</option>
                                {move || {
                                    roster
                                        .get()
                                        .employees
                                        .into_iter()
                                        .map(|employee| {
                                            let label = AdminState::option_label(&employee);
                                            view! { <option value=employee.id.to_string()>{label}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                            <Show when=move || issuing_to().is_some()>
                                <p class="form-hint">"Issuing to " {move || issuing_to().unwrap_or_default()}</p>
                            </Show>
                            <input
                                class="field__input"
                                type="text"
                                placeholder="e.g. March 2025"
                                prop:value=move || form.get().month
                                on:input=move |ev| form.update(|f| f.month = event_target_value(&ev))
                            />
                            <input
                                class="field__input"
                                type="number"
                                step="any"
                                placeholder="Amount"
                                prop:value=move || form.get().amount
                                on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                            />
                            <button class="btn btn--primary" type="submit" disabled=move || gate.get().is_busy()>
                                {move || if gate.get().is_busy() { "Creating..." } else { "Create Slip" }}
                            </button>
                        </form>
                    </section>

                    <section class="card table-card">
                        <h3 class="card__title">"Employees"</h3>
                        <Show
                            when=move || !roster.get().loading
                            fallback=move || view! { <p>"Loading employees..."</p> }
                        >
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Email"</th>
                                        <th>"Role"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        roster
                                            .get()
                                            .employees
                                            .into_iter()
                                            .map(|employee| {
                                                view! {
                                                    <tr>
                                                        <td>{employee.id}</td>
                                                        <td>{employee.email}</td>
                                                        <td>{employee.role.label()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </tbody>
                            </table>
                        </Show>
                    </section>
                </main>
            </div>
        </Show>
    }
}
