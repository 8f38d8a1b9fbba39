//! Converts the service's response envelope into the canonical
//! [`AnalysisResult`] all rendering paths consume.

use thiserror::Error;

use crate::models::analysis::{
    AnalysisResult, AnomalyBreakdown, AnomalyType, RoomReading, SummaryStats, TopAnomalousRoom,
    UsagePatterns,
};
use crate::models::response::AnalyzeEnvelope;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("invalid result shape: {0}")]
    InvalidResultShape(&'static str),
}

/// Normalize a service envelope. Requires the `success` marker and a present
/// `data` field; anything else is an invalid shape, not a guessing game.
pub fn normalize(envelope: AnalyzeEnvelope) -> Result<AnalysisResult, NormalizeError> {
    if !envelope.success {
        return Err(NormalizeError::InvalidResultShape(
            "response did not report success",
        ));
    }
    let data = envelope
        .data
        .ok_or(NormalizeError::InvalidResultShape("missing data field"))?;

    let rooms: Vec<RoomReading> = data
        .iter()
        .map(|row| {
            let is_anomaly = row.is_flagged();
            // A non-flagged room is Normal no matter what label rides along.
            let anomaly_type = if is_anomaly {
                row.anomaly_type
                    .as_deref()
                    .map(AnomalyType::from_label)
                    .unwrap_or_default()
            } else {
                AnomalyType::Normal
            };
            RoomReading {
                room_number: row.room_no,
                energy_kwh: row.total_energy_kwh,
                is_anomaly,
                anomaly_type,
                confidence: row.anomaly_confidence.unwrap_or(0.0).clamp(0.0, 1.0),
            }
        })
        .collect();

    let insights = envelope.insights;
    let summary = SummaryStats {
        total_rooms: envelope.summary.total_rooms.unwrap_or(0),
        total_energy_kwh: envelope.summary.total_energy.unwrap_or(0.0),
        avg_energy_kwh: envelope.summary.avg_energy.unwrap_or(0.0),
        anomaly_count: envelope.summary.anomaly_count.unwrap_or(0),
        anomaly_percentage: envelope.summary.anomaly_percentage.unwrap_or(0.0),
        // The service reports confidence inside the anomaly insight block,
        // not in the summary.
        avg_confidence: insights.anomalies.avg_confidence.clamp(0.0, 1.0),
    };

    let anomalies = AnomalyBreakdown {
        high_consumption: insights.anomalies.high_consumption,
        low_consumption: insights.anomalies.low_consumption,
        unusual_pattern: insights.anomalies.unusual_pattern,
    };

    let top_anomalous_rooms = insights
        .anomalies
        .top_anomalous_rooms
        .iter()
        .map(|row| TopAnomalousRoom {
            room_number: row.room_no,
            energy_kwh: row.total_energy_kwh,
            anomaly_type: row
                .anomaly_type
                .as_deref()
                .map(AnomalyType::from_label)
                .unwrap_or_default(),
            confidence: row.anomaly_confidence.unwrap_or(0.0).clamp(0.0, 1.0),
        })
        .collect();

    let patterns = insights.patterns.map(|p| UsagePatterns {
        peak_hours_avg_kwh: p.peak_hours_avg,
        morning_avg_kwh: p.morning_usage_avg,
        night_avg_kwh: p.night_usage_avg,
        most_efficient_room: p.most_efficient_room,
        least_efficient_room: p.least_efficient_room,
    });

    let deep_learning_insights = if insights.deep_learning.is_empty() {
        None
    } else {
        Some(insights.deep_learning)
    };

    Ok(AnalysisResult {
        summary,
        rooms,
        anomalies,
        recommendations: insights.recommendations,
        top_anomalous_rooms,
        patterns,
        deep_learning_insights,
    })
}
