//! Pure projection from the canonical analysis result to everything the
//! rendering layer binds: card values, the geometry of both charts, and the
//! list projections. Same inputs, same output.

pub mod cards;
pub mod charts;

pub use cards::{InsightCard, PatternsCard, SummaryCards, TopRoomLine};
pub use charts::{AnomalyChart, ChartPalette, DonutSegment, EnergyBar, EnergyChart, YTick};

use crate::models::AnalysisResult;
use crate::state::Theme;

/// Everything one render pass needs
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub cards: SummaryCards,
    pub energy_chart: EnergyChart,
    pub anomaly_chart: AnomalyChart,
    pub recommendations: Vec<String>,
    /// Empty hides the insights panel
    pub insight_cards: Vec<InsightCard>,
    pub patterns: Option<PatternsCard>,
    pub top_rooms: Vec<TopRoomLine>,
}

pub fn build_dashboard(result: &AnalysisResult, theme: Theme) -> DashboardViewModel {
    DashboardViewModel {
        cards: cards::build_summary_cards(&result.summary),
        energy_chart: charts::build_energy_chart(&result.rooms, theme),
        anomaly_chart: charts::build_anomaly_chart(&result.anomalies),
        recommendations: result.recommendations.clone(),
        insight_cards: cards::build_insight_cards(result.deep_learning_insights.as_ref()),
        patterns: cards::build_patterns_card(result.patterns.as_ref()),
        top_rooms: cards::build_top_room_lines(&result.top_anomalous_rooms),
    }
}
