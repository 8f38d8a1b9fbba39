//! End-to-end exercise of the result pipeline: raw service envelope in,
//! rendered dashboard projection out.

use serde_json::json;

use energy_web_leptos::models::{AnalysisRequest, AnalyzeEnvelope, FormFields, FormSnapshot};
use energy_web_leptos::normalize::normalize;
use energy_web_leptos::state::Theme;
use energy_web_leptos::viewmodel::build_dashboard;

fn sample_envelope() -> AnalyzeEnvelope {
    let flagged = [3u32, 7, 12];
    let rows: Vec<_> = (1..=15u32)
        .map(|room| {
            let is_flagged = flagged.contains(&room);
            let energy = 18.0 + f64::from(room) * 1.75;
            json!({
                "Room No": room,
                "Total Energy (kWh)": energy,
                "final_anomaly": if is_flagged { 1 } else { 0 },
                "anomaly_type": match room {
                    3 => "High Consumption",
                    7 => "Low Consumption",
                    12 => "Unusual Pattern",
                    _ => "Normal",
                },
                "anomaly_confidence": if is_flagged { 0.8 } else { 0.2 },
            })
        })
        .collect();

    serde_json::from_value(json!({
        "success": true,
        "data": rows,
        "summary": {
            // Mixed key styles, as deployed services actually send them
            "totalRooms": 15,
            "total_energy": 480.063,
            "avg_energy": 32.0042,
            "anomalyCount": 3,
            "anomaly_percentage": 20.0,
        },
        "insights": {
            "anomalies": {
                // Category counts are reported independently of the
                // per-room flags and do not have to add up to them.
                "high_consumption": 2,
                "low_consumption": 1,
                "unusual_pattern": 1,
                "avg_confidence": 0.8,
                "top_anomalous_rooms": [{
                    "Room No": 3,
                    "Total Energy (kWh)": 23.25,
                    "anomaly_type": "High Consumption",
                    "anomaly_confidence": 0.8,
                }],
            },
            "recommendations": [
                "High anomaly rate detected. Consider investigating equipment or occupancy patterns.",
                "Unusually high night usage detected. Check for equipment left on.",
            ],
        },
    }))
    .expect("sample envelope deserializes")
}

#[test]
fn february_scenario_renders_end_to_end() {
    // The request side: February keeps day 29 selectable.
    let request = AnalysisRequest::from_form(&FormSnapshot {
        submitted: FormFields {
            room_type: Some("2".into()),
            month: Some("February".into()),
            day: Some("29".into()),
            mode: Some("basic".into()),
        },
        live: FormFields::default(),
        show_anomalies: true,
        show_trends: true,
    })
    .expect("request builds");
    assert_eq!(
        serde_json::to_value(&request).unwrap()["bedType"],
        json!("2")
    );

    // The response side: envelope through normalization.
    let result = normalize(sample_envelope()).expect("envelope normalizes");
    assert_eq!(result.rooms.len(), 15);
    assert_eq!(
        result
            .rooms
            .iter()
            .filter(|r| r.is_anomaly)
            .map(|r| r.room_number)
            .collect::<Vec<_>>(),
        vec![3, 7, 12]
    );
    assert_eq!(result.summary.total_rooms, 15);
    assert_eq!(result.summary.anomaly_count, 3);

    // Projection into the dashboard view-model.
    let dashboard = build_dashboard(&result, Theme::Light);
    assert_eq!(dashboard.cards.total_rooms, "15");
    assert_eq!(dashboard.cards.total_energy_kwh, "480.1");
    assert_eq!(dashboard.cards.anomaly_percentage, "20.0");

    assert_eq!(dashboard.energy_chart.bars.len(), 15);
    let anomalous_colors: Vec<_> = dashboard
        .energy_chart
        .bars
        .iter()
        .filter(|b| b.anomalous)
        .map(|b| b.color)
        .collect();
    assert_eq!(anomalous_colors.len(), 3);
    assert!(anomalous_colors
        .iter()
        .all(|c| *c != dashboard.energy_chart.bars[0].color));

    // The proportion chart follows the reported category counts (4), not
    // the flagged-room total (3).
    assert_eq!(dashboard.anomaly_chart.total, 4);
    assert_eq!(dashboard.anomaly_chart.segments[0].legend, "High Consumption (50.0%)");

    assert!(!dashboard.recommendations.is_empty());
    assert_eq!(dashboard.recommendations, result.recommendations);

    assert_eq!(dashboard.top_rooms.len(), 1);
    assert_eq!(dashboard.top_rooms[0].room, "Room 3");
    assert!(dashboard.insight_cards.is_empty());
    assert!(dashboard.patterns.is_none());
}

#[test]
fn theme_only_changes_chart_chrome() {
    let result = normalize(sample_envelope()).unwrap();
    let light = build_dashboard(&result, Theme::Light);
    let dark = build_dashboard(&result, Theme::Dark);

    assert_ne!(light.energy_chart.palette, dark.energy_chart.palette);
    assert_eq!(light.cards, dark.cards);
    assert_eq!(light.anomaly_chart, dark.anomaly_chart);
}
