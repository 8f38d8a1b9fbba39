use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Classification of an abnormal reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AnomalyType {
    #[default]
    Normal,
    HighConsumption,
    LowConsumption,
    UnusualPattern,
}

impl AnomalyType {
    /// Parse the service's label. Unrecognized labels fall back to `Normal`;
    /// the service can flag a room anomalous without classifying it.
    pub fn from_label(label: &str) -> Self {
        match label {
            "High Consumption" => Self::HighConsumption,
            "Low Consumption" => Self::LowConsumption,
            "Unusual Pattern" => Self::UnusualPattern,
            _ => Self::Normal,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::HighConsumption => "High Consumption",
            Self::LowConsumption => "Low Consumption",
            Self::UnusualPattern => "Unusual Pattern",
        }
    }
}

/// One room's energy figure plus its anomaly classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomReading {
    pub room_number: u32,
    pub energy_kwh: f64,
    pub is_anomaly: bool,
    pub anomaly_type: AnomalyType,
    /// Detector agreement in [0, 1]
    pub confidence: f64,
}

/// Anomaly counts by category. These are reported independently of the
/// per-room flags and need not reconcile with the flagged total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AnomalyBreakdown {
    pub high_consumption: u32,
    pub low_consumption: u32,
    pub unusual_pattern: u32,
}

/// Summary figures as the service reported them; never recomputed here
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SummaryStats {
    pub total_rooms: u32,
    pub total_energy_kwh: f64,
    pub avg_energy_kwh: f64,
    pub anomaly_count: u32,
    pub anomaly_percentage: f64,
    pub avg_confidence: f64,
}

/// Highest-confidence anomalous room from the insight block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopAnomalousRoom {
    pub room_number: u32,
    pub energy_kwh: f64,
    pub anomaly_type: AnomalyType,
    pub confidence: f64,
}

/// Aggregate usage patterns from the insight block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsagePatterns {
    pub peak_hours_avg_kwh: f64,
    pub morning_avg_kwh: f64,
    pub night_avg_kwh: f64,
    pub most_efficient_room: Option<u32>,
    pub least_efficient_room: Option<u32>,
}

/// The canonical analysis result every rendering path consumes, independent
/// of which response envelope produced it. Replaced wholesale on each run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub summary: SummaryStats,
    /// Room readings in the order the service supplied them (ascending room number)
    pub rooms: Vec<RoomReading>,
    pub anomalies: AnomalyBreakdown,
    pub recommendations: Vec<String>,
    pub top_anomalous_rooms: Vec<TopAnomalousRoom>,
    pub patterns: Option<UsagePatterns>,
    /// Per-model metric map; `None` hides the insights panel
    pub deep_learning_insights: Option<BTreeMap<String, BTreeMap<String, Value>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anomaly_labels_round_trip() {
        for kind in [
            AnomalyType::Normal,
            AnomalyType::HighConsumption,
            AnomalyType::LowConsumption,
            AnomalyType::UnusualPattern,
        ] {
            assert_eq!(AnomalyType::from_label(kind.label()), kind);
        }
    }

    #[test]
    fn unknown_label_is_normal() {
        assert_eq!(AnomalyType::from_label("Spiky"), AnomalyType::Normal);
        assert_eq!(AnomalyType::from_label(""), AnomalyType::Normal);
    }
}
