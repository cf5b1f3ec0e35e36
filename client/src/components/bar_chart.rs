//! SVG bar chart fed directly with `(label, amount)` pairs.

use leptos::prelude::*;

use crate::util::chart::{CHART_HEIGHT, CHART_WIDTH, LABEL_BAND, layout_bars};
use crate::util::format::format_amount;

#[component]
pub fn BarChart(
    title: &'static str,
    #[prop(into)] series: Signal<Vec<(String, f64)>>,
    fill: &'static str,
) -> impl IntoView {
    let view_box = format!("0 0 {CHART_WIDTH} {}", CHART_HEIGHT + LABEL_BAND);
    let label_y = format!("{:.1}", CHART_HEIGHT + 16.0);

    view! {
        <div class="card chart">
            <h3 class="card__title">{title}</h3>
            <Show
                when=move || !series.get().is_empty()
                fallback=|| view! { <p class="chart__empty">"No data yet."</p> }
            >
                <svg class="chart__svg" viewBox=view_box.clone() role="img" aria-label=title>
                    <line
                        class="chart__axis"
                        x1="0"
                        y1=format!("{CHART_HEIGHT:.1}")
                        x2=format!("{CHART_WIDTH:.1}")
                        y2=format!("{CHART_HEIGHT:.1}")
                    ></line>
                    {
                        let label_y = label_y.clone();
                        move || {
                            layout_bars(&series.get())
                                .into_iter()
                                .map(|bar| {
                                    let center = bar.x + bar.width / 2.0;
                                    view! {
                                        <g class="chart__bar">
                                            <rect
                                                x=format!("{:.2}", bar.x)
                                                y=format!("{:.2}", bar.y)
                                                width=format!("{:.2}", bar.width)
                                                height=format!("{:.2}", bar.height)
                                                fill=fill
                                                data-value=format_amount(bar.value)
                                            ></rect>
                                            <text
                                                class="chart__label"
                                                x=format!("{center:.2}")
                                                y=label_y.clone()
                                                text-anchor="middle"
                                            >
                                                {bar.label}
                                            </text>
                                        </g>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }
                    }
                </svg>
            </Show>
        </div>
    }
}
