use leptos::*;

use crate::state::{use_analysis, use_theme, AnalysisPhase};
use crate::viewmodel::build_dashboard;

use super::anomaly_chart::AnomalyChartView;
use super::energy_chart::EnergyChartView;
use super::insights::{InsightsPanel, PatternsView, TopRoomsView};
use super::recommendations::RecommendationsList;
use super::summary_cards::SummaryCardsRow;

/// Results region: hidden until the first run starts, then revealed for the
/// rest of the session. Shows the loading indicator while a run is in
/// flight and the projected dashboard once one has displayed.
#[component]
pub fn ResultsSection() -> impl IntoView {
    let analysis = use_analysis();
    let theme_ctx = use_theme();

    // Viewport resizes re-project from the last held result; without one
    // the projection below stays None and nothing happens.
    let (resize_tick, set_resize_tick) = create_signal(0u32);
    let resize_handle = window_event_listener(ev::resize, move |_| {
        set_resize_tick.update(|n| *n += 1);
    });
    on_cleanup(move || resize_handle.remove());

    let dashboard = create_memo(move |_| {
        resize_tick.get();
        let theme = theme_ctx.theme.get();
        analysis
            .last_result
            .with(|result| result.as_ref().map(|r| build_dashboard(r, theme)))
    });

    let revealed = move || analysis.phase.get() != AnalysisPhase::Idle;
    let loading = move || analysis.phase.get() == AnalysisPhase::Loading;
    let displayed = move || analysis.phase.get() == AnalysisPhase::Displayed;

    view! {
        <section class="results" class:hidden=move || !revealed()>
            <Show when=loading>
                <div class="loading">"Running analysis..."</div>
            </Show>

            <div class="results-content" class:hidden=move || !displayed()>
                {move || {
                    dashboard
                        .get()
                        .map(|vm| {
                            view! {
                                <SummaryCardsRow cards=vm.cards />
                                <div class="charts-grid">
                                    <EnergyChartView chart=vm.energy_chart />
                                    <AnomalyChartView chart=vm.anomaly_chart />
                                </div>
                                <TopRoomsView rooms=vm.top_rooms />
                                <PatternsView patterns=vm.patterns />
                                <InsightsPanel cards=vm.insight_cards />
                                <RecommendationsList items=vm.recommendations />
                            }
                        })
                }}
            </div>
        </section>
    }
}
