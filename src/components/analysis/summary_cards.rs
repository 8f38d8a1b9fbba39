use leptos::*;

use crate::viewmodel::SummaryCards;

/// The four summary card slots
#[component]
pub fn SummaryCardsRow(cards: SummaryCards) -> impl IntoView {
    view! {
        <div class="summary-cards">
            <SummaryCard title="Total Rooms" value=cards.total_rooms unit="" />
            <SummaryCard title="Total Energy" value=cards.total_energy_kwh unit=" kWh" />
            <SummaryCard title="Anomalies" value=cards.anomaly_count unit="" />
            <SummaryCard title="Anomaly Rate" value=cards.anomaly_percentage unit="%" />
        </div>
    }
}

#[component]
fn SummaryCard(title: &'static str, value: String, unit: &'static str) -> impl IntoView {
    view! {
        <div class="card summary-card">
            <h3>{title}</h3>
            <div class="energy-value">
                {value}
                <span class="unit">{unit}</span>
            </div>
        </div>
    }
}
