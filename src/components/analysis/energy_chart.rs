use leptos::*;

use crate::viewmodel::charts::{CHART_HEIGHT, CHART_WIDTH};
use crate::viewmodel::EnergyChart;

/// Per-room energy bar chart. All geometry arrives precomputed; this
/// component only binds it to SVG.
#[component]
pub fn EnergyChartView(chart: EnergyChart) -> impl IntoView {
    let palette = chart.palette;
    let baseline_y = chart.baseline_y;

    view! {
        <div class="card chart-card">
            <h3>"Energy Consumption by Room"</h3>
            <svg
                class="energy-chart"
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                role="img"
                aria-label="Energy consumption per room"
            >
                <rect x="0" y="0" width=CHART_WIDTH height=CHART_HEIGHT fill=palette.background></rect>

                {chart
                    .ticks
                    .iter()
                    .map(|tick| {
                        view! {
                            <line
                                x1="48"
                                x2={CHART_WIDTH - 16.0}
                                y1=tick.y
                                y2=tick.y
                                stroke=palette.grid
                                stroke-width="1"
                            ></line>
                            <text
                                x="42"
                                y={tick.y + 4.0}
                                text-anchor="end"
                                font-size="11"
                                fill=palette.axis
                            >
                                {tick.label.clone()}
                            </text>
                        }
                    })
                    .collect_view()}

                {chart
                    .bars
                    .iter()
                    .map(|bar| {
                        let label = bar.show_label.then(|| {
                            view! {
                                <text
                                    x={bar.x + bar.width / 2.0}
                                    y={baseline_y + 16.0}
                                    text-anchor="middle"
                                    font-size="11"
                                    fill=palette.axis
                                >
                                    {bar.room.to_string()}
                                </text>
                            }
                        });
                        view! {
                            <rect
                                x=bar.x
                                y=bar.y
                                width=bar.width
                                height=bar.height
                                fill=bar.color
                            ></rect>
                            {label}
                        }
                    })
                    .collect_view()}

                <line
                    x1="48"
                    x2={CHART_WIDTH - 16.0}
                    y1=baseline_y
                    y2=baseline_y
                    stroke=palette.axis
                    stroke-width="1"
                ></line>
                <text
                    x={CHART_WIDTH / 2.0}
                    y={CHART_HEIGHT - 4.0}
                    text-anchor="middle"
                    font-size="12"
                    fill=palette.text
                >
                    "Room Number"
                </text>
            </svg>
        </div>
    }
}
