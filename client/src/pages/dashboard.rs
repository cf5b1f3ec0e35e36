//! Employee dashboard: pay and expense overview plus expense submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated employee landing route. Salary slips and expenses are
//! fetched as two independent requests once the guard has admitted the
//! session; either may arrive first. Responses that arrive after the page
//! unmounts are dropped.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bar_chart::BarChart;
use crate::components::kpi_card::KpiCard;
use crate::components::navbar::Navbar;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::state::dashboard::DashboardState;
use crate::state::forms::ExpenseForm;
use crate::state::session::{SessionState, SessionStore};
use crate::state::submit::{SubmitGate, begin_submit};
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::auth::install_route_guard;
use crate::util::download::save_bytes;
use crate::util::format::{format_amount, pdf_file_name};
use crate::util::guard::{Access, AppRoute, check_route};
use crate::util::lifetime::MountGuard;

/// Dashboard page. Redirects away unless an employee session is present.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ApiConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    install_route_guard(AppRoute::Dashboard, session, store.clone(), navigate);

    let data = RwSignal::new(DashboardState::default());
    let form = RwSignal::new(ExpenseForm::default());
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
            if check_route(AppRoute::Dashboard, store.get_session().as_ref()) != Access::Allowed {
                return;
            }
            requested.set(true);
            refresh(&api, data, toasts, &alive);
        });
    }

    let on_submit = {
        let api = api.clone();
        let alive = alive.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let (description, amount) = match form.get_untracked().parse() {
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
                let result = api.create_expense(&description, amount).await;
                if !alive.is_alive() {
                    return;
                }
                gate.update(SubmitGate::finish);
                match result {
                    Ok(_) => {
                        notify(toasts, ToastKind::Success, "Expense submitted successfully");
                        form.update(ExpenseForm::reset);
                        refresh(&api, data, toasts, &alive);
                    }
                    Err(e) => notify(toasts, ToastKind::Error, format!("Failed to submit expense: {e}")),
                }
            });
        }
    };

    let ready = move || {
        let state = session.get();
        state.loaded && check_route(AppRoute::Dashboard, state.session.as_ref()) == Access::Allowed
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
            <div class="page dashboard-page">
                <Navbar subtitle="Employee Dashboard"/>
                <main class="page__main">
                    <section class="kpi-grid">
                        <KpiCard label="Total Salary" value=Signal::derive(move || data.get().total_salary()) tone="salary"/>
                        <KpiCard label="Total Expenses" value=Signal::derive(move || data.get().total_expenses()) tone="expense"/>
                        <KpiCard label="Net Balance" value=Signal::derive(move || data.get().net_balance()) tone="net"/>
                    </section>

                    <section class="chart-grid">
                        <BarChart
                            title="Salary History"
                            series=Signal::derive(move || data.get().salary_series())
                            fill="#6366f1"
                        />
                        <BarChart
                            title="Expense History"
                            series=Signal::derive(move || data.get().expense_series())
                            fill="#ef4444"
                        />
                    </section>

                    <SlipTable data=data api=api.clone()/>

                    <section class="card form-card">
                        <h3 class="card__title">"Submit Expense"</h3>
                        <form class="stack" on:submit=on_submit.clone()>
                            <input
                                class="field__input"
                                type="text"
                                placeholder="Expense description"
                                prop:value=move || form.get().description
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
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
                                {move || if gate.get().is_busy() { "Submitting..." } else { "Submit Expense" }}
                            </button>
                        </form>
                    </section>
                </main>
            </div>
        </Show>
    }
}

/// Salary slip table with per-row PDF download.
#[component]
fn SlipTable(data: RwSignal<DashboardState>, api: ApiClient) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <section class="card table-card">
            <h3 class="card__title">"Salary Slips"</h3>
            <Show
                when=move || !data.get().slips_loading
                fallback=move || view! { <p>"Loading salary slips..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Month"</th>
                            <th>"Amount"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            let api = api.clone();
                            move || {
                                data.get()
                                    .slips
                                    .into_iter()
                                    .map(|slip| {
                                        let api = api.clone();
                                        let id = slip.id;
                                        view! {
                                            <tr>
                                                <td>{slip.month}</td>
                                                <td>{format_amount(slip.amount)}</td>
                                                <td class="table__action">
                                                    <button
                                                        class="btn btn--primary btn--small"
                                                        on:click=move |_| download_pdf(api.clone(), id, toasts)
                                                    >
                                                        "Download PDF"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }
                        }
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

/// Fetch slips and expenses as two independent requests.
fn refresh(api: &ApiClient, data: RwSignal<DashboardState>, toasts: RwSignal<ToastState>, alive: &MountGuard) {
    {
        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api.list_salary_slips().await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(slips) => data.update(|d| {
                    d.slips = slips;
                    d.slips_loading = false;
                }),
                Err(e) => {
                    data.update(|d| d.slips_loading = false);
                    notify(toasts, ToastKind::Error, format!("Failed to load salary slips: {e}"));
                }
            }
        });
    }

    let api = api.clone();
    let alive = alive.clone();
    leptos::task::spawn_local(async move {
        let result = api.list_expenses().await;
        if !alive.is_alive() {
            return;
        }
        match result {
            Ok(expenses) => data.update(|d| {
                d.expenses = expenses;
                d.expenses_loading = false;
            }),
            Err(e) => {
                data.update(|d| d.expenses_loading = false);
                notify(toasts, ToastKind::Error, format!("Failed to load expenses: {e}"));
            }
        }
    });
}

fn download_pdf(api: ApiClient, slip_id: i64, toasts: RwSignal<ToastState>) {
    leptos::task::spawn_local(async move {
        match api.download_salary_slip_pdf(slip_id).await {
            Ok(bytes) => {
                if let Err(e) = save_bytes(&bytes, &pdf_file_name(slip_id), "application/pdf") {
                    notify(toasts, ToastKind::Error, format!("Failed to save PDF: {e}"));
                }
            }
            Err(e) => notify(toasts, ToastKind::Error, format!("Failed to download PDF: {e}")),
        }
    });
}
