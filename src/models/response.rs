use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw response envelope from `POST /api/analyze`. Everything beyond the
/// success marker is optional here; the normalizer decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeEnvelope {
    #[serde(default)]
    pub success: bool,
    pub data: Option<Vec<RoomRow>>,
    #[serde(default)]
    pub summary: SummaryFields,
    #[serde(default)]
    pub insights: InsightFields,
    /// Error text the service attaches to failure envelopes
    pub error: Option<String>,
}

/// One room record as the service emits it. Column names come straight from
/// the CSV source, so they carry spaces and units.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomRow {
    #[serde(rename = "Room No", default)]
    pub room_no: u32,
    #[serde(rename = "Total Energy (kWh)", default)]
    pub total_energy_kwh: f64,
    /// Anomaly flag; the service marks anomalies with the integer 1
    #[serde(default)]
    pub final_anomaly: Value,
    #[serde(default)]
    pub anomaly_type: Option<String>,
    #[serde(default)]
    pub anomaly_confidence: Option<f64>,
}

impl RoomRow {
    /// True only for the exact sentinel value the service uses
    pub fn is_flagged(&self) -> bool {
        self.final_anomaly.as_u64() == Some(1)
    }
}

/// Summary block. Deployed services disagree on key style, so every field
/// accepts both the snake and camel spelling.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryFields {
    #[serde(alias = "totalRooms")]
    pub total_rooms: Option<u32>,
    #[serde(alias = "totalEnergy")]
    pub total_energy: Option<f64>,
    #[serde(alias = "avgEnergy")]
    pub avg_energy: Option<f64>,
    #[serde(alias = "anomalyCount")]
    pub anomaly_count: Option<u32>,
    #[serde(alias = "anomalyPercentage")]
    pub anomaly_percentage: Option<f64>,
}

/// Insight block attached to a successful analysis
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightFields {
    #[serde(default)]
    pub anomalies: AnomalyFields,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub patterns: Option<PatternFields>,
    /// Optional per-model metric map; older deployments spell the key out
    #[serde(default, alias = "deep_learning_insights")]
    pub deep_learning: BTreeMap<String, BTreeMap<String, Value>>,
}

/// Anomaly breakdown inside the insight block. The service omits the whole
/// block when no anomalies were found.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnomalyFields {
    #[serde(default)]
    pub high_consumption: u32,
    #[serde(default)]
    pub low_consumption: u32,
    #[serde(default)]
    pub unusual_pattern: u32,
    #[serde(default)]
    pub avg_confidence: f64,
    #[serde(default)]
    pub top_anomalous_rooms: Vec<TopRoomRow>,
}

/// Ranked anomalous room inside the insight block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopRoomRow {
    #[serde(rename = "Room No", default)]
    pub room_no: u32,
    #[serde(rename = "Total Energy (kWh)", default)]
    pub total_energy_kwh: f64,
    #[serde(default)]
    pub anomaly_type: Option<String>,
    #[serde(default)]
    pub anomaly_confidence: Option<f64>,
}

/// Usage pattern aggregates inside the insight block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatternFields {
    #[serde(default)]
    pub peak_hours_avg: f64,
    #[serde(default)]
    pub morning_usage_avg: f64,
    #[serde(default)]
    pub night_usage_avg: f64,
    #[serde(default)]
    pub most_efficient_room: Option<u32>,
    #[serde(default)]
    pub least_efficient_room: Option<u32>,
}

/// Response of `GET /api/health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_csv_style_row_keys() {
        let row: RoomRow = serde_json::from_str(
            r#"{"Room No": 12, "Total Energy (kWh)": 45.67,
                "final_anomaly": 1, "anomaly_type": "High Consumption",
                "anomaly_confidence": 0.8, "peak_usage": 3.1}"#,
        )
        .unwrap();
        assert_eq!(row.room_no, 12);
        assert_eq!(row.total_energy_kwh, 45.67);
        assert!(row.is_flagged());
        assert_eq!(row.anomaly_type.as_deref(), Some("High Consumption"));
    }

    #[test]
    fn anomaly_flag_requires_exact_sentinel() {
        for (raw, flagged) in [
            (r#"{"final_anomaly": 1}"#, true),
            (r#"{"final_anomaly": 0}"#, false),
            (r#"{"final_anomaly": 2}"#, false),
            (r#"{"final_anomaly": "1"}"#, false),
            (r#"{"final_anomaly": 1.5}"#, false),
            (r#"{}"#, false),
        ] {
            let row: RoomRow = serde_json::from_str(raw).unwrap();
            assert_eq!(row.is_flagged(), flagged, "{raw}");
        }
    }

    #[test]
    fn summary_accepts_both_key_styles() {
        let summary: SummaryFields = serde_json::from_str(
            r#"{"totalRooms": 5, "totalEnergy": 12.3,
                "anomalyCount": 1, "anomaly_percentage": 20.0}"#,
        )
        .unwrap();
        assert_eq!(summary.total_rooms, Some(5));
        assert_eq!(summary.total_energy, Some(12.3));
        assert_eq!(summary.anomaly_count, Some(1));
        assert_eq!(summary.anomaly_percentage, Some(20.0));
        assert_eq!(summary.avg_energy, None);
    }

    #[test]
    fn failure_envelope_parses_without_data() {
        let envelope: AnalyzeEnvelope =
            serde_json::from_str(r#"{"error": "File not found: day_32.csv"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("File not found: day_32.csv"));
    }
}
