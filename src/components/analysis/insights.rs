use leptos::*;

use crate::viewmodel::{InsightCard, PatternsCard, TopRoomLine};

/// Deep-learning insight cards, one per model. Hidden when the service
/// reported no model metrics.
#[component]
pub fn InsightsPanel(cards: Vec<InsightCard>) -> impl IntoView {
    if cards.is_empty() {
        return ().into_view();
    }

    view! {
        <div class="card insights-card">
            <h3>"Deep Learning Insights"</h3>
            <div class="insights-grid">
                {cards
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="insight-card">
                                <h4>{card.model.clone()}</h4>
                                <dl>
                                    {card
                                        .metrics
                                        .iter()
                                        .map(|(name, value)| {
                                            view! {
                                                <div class="insight-metric">
                                                    <dt>{name.clone()}</dt>
                                                    <dd>{value.clone()}</dd>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </dl>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

/// Aggregate usage pattern card; hidden when the service reported none
#[component]
pub fn PatternsView(patterns: Option<PatternsCard>) -> impl IntoView {
    patterns.map(|p| {
        view! {
            <div class="card patterns-card">
                <h3>"Usage Patterns"</h3>
                <div class="setting-item">
                    <span class="setting-label">"Peak hours average"</span>
                    <span class="setting-value">{p.peak_hours}</span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"Morning average"</span>
                    <span class="setting-value">{p.morning}</span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"Night average"</span>
                    <span class="setting-value">{p.night}</span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"Most efficient"</span>
                    <span class="setting-value">{p.most_efficient}</span>
                </div>
                <div class="setting-item">
                    <span class="setting-label">"Least efficient"</span>
                    <span class="setting-value">{p.least_efficient}</span>
                </div>
            </div>
        }
    })
}

/// Highest-confidence anomalous rooms; hidden when the list is empty
#[component]
pub fn TopRoomsView(rooms: Vec<TopRoomLine>) -> impl IntoView {
    if rooms.is_empty() {
        return ().into_view();
    }

    view! {
        <div class="card top-rooms-card">
            <h3>"Top Anomalous Rooms"</h3>
            <ul class="top-rooms">
                {rooms
                    .iter()
                    .map(|line| {
                        view! {
                            <li class="top-room">
                                <strong>{line.room.clone()}</strong>
                                {format!(": {} ({}, confidence {})", line.energy, line.kind, line.confidence)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_view()
}
