use leptos::*;

use crate::viewmodel::charts::DONUT_SIZE;
use crate::viewmodel::AnomalyChart;

/// Three-category anomaly proportion chart with a labeled legend
#[component]
pub fn AnomalyChartView(chart: AnomalyChart) -> impl IntoView {
    let empty = chart.total == 0;

    view! {
        <div class="card chart-card">
            <h3>"Anomaly Breakdown"</h3>
            <Show
                when=move || !empty
                fallback=|| view! { <p class="placeholder-text">"No anomalies detected"</p> }
            >
                <div class="anomaly-chart">
                    <svg
                        viewBox=format!("0 0 {DONUT_SIZE} {DONUT_SIZE}")
                        role="img"
                        aria-label="Anomalies by category"
                    >
                        {chart
                            .segments
                            .iter()
                            .filter(|segment| !segment.path.is_empty())
                            .map(|segment| {
                                view! { <path d=segment.path.clone() fill=segment.color></path> }
                            })
                            .collect_view()}
                    </svg>
                    <ul class="anomaly-legend">
                        {chart
                            .segments
                            .iter()
                            .map(|segment| {
                                view! {
                                    <li>
                                        <span
                                            class="legend-swatch"
                                            style=format!("background-color: {}", segment.color)
                                        ></span>
                                        {segment.legend.clone()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
