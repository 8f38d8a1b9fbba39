use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::{SummaryStats, TopAnomalousRoom, UsagePatterns};

/// Display-ready values for the four summary card slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCards {
    pub total_rooms: String,
    pub total_energy_kwh: String,
    pub anomaly_count: String,
    pub anomaly_percentage: String,
}

/// Summary figures formatted for the cards: energy and percentage carry one
/// decimal place, counts stay integral.
pub fn build_summary_cards(summary: &SummaryStats) -> SummaryCards {
    SummaryCards {
        total_rooms: summary.total_rooms.to_string(),
        total_energy_kwh: format!("{:.1}", summary.total_energy_kwh),
        anomaly_count: summary.anomaly_count.to_string(),
        anomaly_percentage: format!("{:.1}", summary.anomaly_percentage),
    }
}

/// One model's card in the insights panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightCard {
    pub model: String,
    /// Metric name and display value, in map order
    pub metrics: Vec<(String, String)>,
}

/// Project the optional per-model metric map into cards. An empty vector
/// means the panel is hidden entirely.
pub fn build_insight_cards(
    insights: Option<&BTreeMap<String, BTreeMap<String, Value>>>,
) -> Vec<InsightCard> {
    let Some(insights) = insights else {
        return Vec::new();
    };
    insights
        .iter()
        .map(|(model, metrics)| InsightCard {
            model: model.clone(),
            metrics: metrics
                .iter()
                .map(|(name, value)| (name.clone(), format_metric(value)))
                .collect(),
        })
        .collect()
}

/// Numeric metrics get three decimals, everything else renders verbatim
fn format_metric(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) => format!("{f:.3}"),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Display-ready usage pattern card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternsCard {
    pub peak_hours: String,
    pub morning: String,
    pub night: String,
    pub most_efficient: String,
    pub least_efficient: String,
}

pub fn build_patterns_card(patterns: Option<&UsagePatterns>) -> Option<PatternsCard> {
    patterns.map(|p| PatternsCard {
        peak_hours: format!("{:.2} kWh", p.peak_hours_avg_kwh),
        morning: format!("{:.2} kWh", p.morning_avg_kwh),
        night: format!("{:.2} kWh", p.night_avg_kwh),
        most_efficient: room_label(p.most_efficient_room),
        least_efficient: room_label(p.least_efficient_room),
    })
}

fn room_label(room: Option<u32>) -> String {
    match room {
        Some(n) => format!("Room {n}"),
        None => "N/A".to_string(),
    }
}

/// One line in the top-anomalous-rooms list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRoomLine {
    pub room: String,
    pub energy: String,
    pub kind: &'static str,
    pub confidence: String,
}

pub fn build_top_room_lines(rooms: &[TopAnomalousRoom]) -> Vec<TopRoomLine> {
    rooms
        .iter()
        .map(|r| TopRoomLine {
            room: format!("Room {}", r.room_number),
            energy: format!("{:.2} kWh", r.energy_kwh),
            kind: r.anomaly_type.label(),
            confidence: format!("{:.0}%", r.confidence * 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnomalyType;
    use serde_json::json;

    #[test]
    fn summary_cards_use_fixed_precision() {
        let cards = build_summary_cards(&SummaryStats {
            total_rooms: 15,
            total_energy_kwh: 348.267,
            avg_energy_kwh: 23.2178,
            anomaly_count: 3,
            anomaly_percentage: 20.0,
            avg_confidence: 0.64,
        });
        assert_eq!(cards.total_rooms, "15");
        assert_eq!(cards.total_energy_kwh, "348.3");
        assert_eq!(cards.anomaly_count, "3");
        assert_eq!(cards.anomaly_percentage, "20.0");
    }

    #[test]
    fn insight_metrics_format_by_kind() {
        let mut metrics = BTreeMap::new();
        metrics.insert("reconstruction_error".to_string(), json!(0.04123));
        metrics.insert("epochs".to_string(), json!(50));
        metrics.insert("status".to_string(), json!("converged"));
        let mut insights = BTreeMap::new();
        insights.insert("autoencoder".to_string(), metrics);

        let cards = build_insight_cards(Some(&insights));
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].model, "autoencoder");
        let rendered: BTreeMap<_, _> = cards[0].metrics.iter().cloned().collect();
        assert_eq!(rendered["reconstruction_error"], "0.041");
        assert_eq!(rendered["epochs"], "50.000");
        assert_eq!(rendered["status"], "converged");
    }

    #[test]
    fn absent_insights_yield_no_cards() {
        assert!(build_insight_cards(None).is_empty());
    }

    #[test]
    fn top_room_lines_carry_classification() {
        let lines = build_top_room_lines(&[TopAnomalousRoom {
            room_number: 14,
            energy_kwh: 61.237,
            anomaly_type: AnomalyType::HighConsumption,
            confidence: 0.8,
        }]);
        assert_eq!(lines[0].room, "Room 14");
        assert_eq!(lines[0].energy, "61.24 kWh");
        assert_eq!(lines[0].kind, "High Consumption");
        assert_eq!(lines[0].confidence, "80%");
    }
}
