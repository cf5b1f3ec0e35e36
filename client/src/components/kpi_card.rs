use leptos::prelude::*;

use crate::util::format::format_amount;

/// Headline figure card on the employee dashboard.
#[component]
pub fn KpiCard(label: &'static str, #[prop(into)] value: Signal<f64>, tone: &'static str) -> impl IntoView {
    view! {
        <div class="card kpi">
            <p class="kpi__label">{label}</p>
            <h3 class=format!("kpi__value kpi__value--{tone}")>{move || format_amount(value.get())}</h3>
        </div>
    }
}
