//! Chart geometry. Everything here is computed ahead of rendering so the
//! SVG components only bind precomputed coordinates.

use std::f64::consts::TAU;

use crate::models::{AnomalyBreakdown, RoomReading};
use crate::state::Theme;

/// Bar fill for unflagged rooms
const NORMAL_BAR: &str = "#36a2eb";
/// Bar fill for flagged rooms
const ANOMALY_BAR: &str = "#ff6384";

/// Fixed category colors for the anomaly proportion chart
const HIGH_COLOR: &str = "#ff6384";
const LOW_COLOR: &str = "#36a2eb";
const UNUSUAL_COLOR: &str = "#ffce56";

/// Theme-dependent chart chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub background: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
    pub text: &'static str,
}

pub fn palette(theme: Theme) -> ChartPalette {
    match theme {
        Theme::Light => ChartPalette {
            background: "#ffffff",
            axis: "#64748b",
            grid: "#e2e8f0",
            text: "#1f2937",
        },
        Theme::Dark => ChartPalette {
            background: "#1e293b",
            axis: "#94a3b8",
            grid: "#334155",
            text: "#e2e8f0",
        },
    }
}

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;

/// One bar of the per-room energy chart
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyBar {
    pub room: u32,
    pub energy_kwh: f64,
    pub anomalous: bool,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Room-number labels thin out when bars get narrow
    pub show_label: bool,
}

/// Horizontal gridline with its axis label
#[derive(Debug, Clone, PartialEq)]
pub struct YTick {
    pub label: String,
    pub y: f64,
}

/// One bar per room, colored by anomaly flag. No legend.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyChart {
    pub bars: Vec<EnergyBar>,
    pub ticks: Vec<YTick>,
    pub palette: ChartPalette,
    pub baseline_y: f64,
}

pub fn build_energy_chart(rooms: &[RoomReading], theme: Theme) -> EnergyChart {
    let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline_y = MARGIN_TOP + plot_height;

    let max_energy = rooms.iter().map(|r| r.energy_kwh).fold(0.0, f64::max);
    let y_max = nice_ceiling(max_energy);

    let ticks = (0..=4)
        .map(|i| {
            let value = y_max * f64::from(i) / 4.0;
            YTick {
                label: format_tick(value),
                y: baseline_y - (value / y_max) * plot_height,
            }
        })
        .collect();

    let bars = if rooms.is_empty() {
        Vec::new()
    } else {
        let slot = plot_width / rooms.len() as f64;
        let label_stride = (rooms.len() + 15) / 16;
        rooms
            .iter()
            .enumerate()
            .map(|(i, room)| {
                let height = (room.energy_kwh.max(0.0) / y_max) * plot_height;
                EnergyBar {
                    room: room.room_number,
                    energy_kwh: room.energy_kwh,
                    anomalous: room.is_anomaly,
                    color: if room.is_anomaly { ANOMALY_BAR } else { NORMAL_BAR },
                    x: MARGIN_LEFT + i as f64 * slot + slot * 0.15,
                    y: baseline_y - height,
                    width: slot * 0.7,
                    height,
                    show_label: i % label_stride == 0,
                }
            })
            .collect()
    };

    EnergyChart {
        bars,
        ticks,
        palette: palette(theme),
        baseline_y,
    }
}

/// Round up to a clean axis maximum (1/2/2.5/5 times a power of ten)
fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let scaled = max / magnitude;
    let nice = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else if scaled <= 2.5 {
        2.5
    } else if scaled <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub const DONUT_SIZE: f64 = 220.0;
const DONUT_OUTER: f64 = 100.0;
const DONUT_INNER: f64 = 60.0;

/// One category slice of the anomaly proportion chart
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub label: &'static str,
    pub count: u32,
    pub percent: f64,
    /// Display label, e.g. "High Consumption (42.9%)"
    pub legend: String,
    pub color: &'static str,
    /// SVG path of the slice; empty for zero-count categories
    pub path: String,
}

/// Three-category proportion chart over the reported anomaly breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyChart {
    pub segments: Vec<DonutSegment>,
    pub total: u32,
}

pub fn build_anomaly_chart(breakdown: &AnomalyBreakdown) -> AnomalyChart {
    let categories = [
        ("High Consumption", breakdown.high_consumption, HIGH_COLOR),
        ("Low Consumption", breakdown.low_consumption, LOW_COLOR),
        ("Unusual Pattern", breakdown.unusual_pattern, UNUSUAL_COLOR),
    ];
    let total: u32 = categories.iter().map(|(_, count, _)| count).sum();

    let mut start = 0.0;
    let segments = categories
        .into_iter()
        .map(|(label, count, color)| {
            let fraction = if total == 0 {
                0.0
            } else {
                f64::from(count) / f64::from(total)
            };
            let percent = fraction * 100.0;
            let path = if count == 0 {
                String::new()
            } else {
                let sweep = fraction * TAU;
                annular_sector_path(start, sweep)
            };
            start += fraction * TAU;
            DonutSegment {
                label,
                count,
                percent,
                legend: format!("{label} ({percent:.1}%)"),
                color,
                path,
            }
        })
        .collect();

    AnomalyChart { segments, total }
}

/// Path for an annular slice starting at 12 o'clock, clockwise. A sweep of
/// the full circle is pulled in fractionally so the arc endpoints stay
/// distinct.
fn annular_sector_path(start: f64, sweep: f64) -> String {
    let center = DONUT_SIZE / 2.0;
    let sweep = sweep.min(TAU - 1e-4);
    let end = start + sweep;
    let large = i32::from(sweep > TAU / 2.0);

    let (ox0, oy0) = ring_point(center, DONUT_OUTER, start);
    let (ox1, oy1) = ring_point(center, DONUT_OUTER, end);
    let (ix0, iy0) = ring_point(center, DONUT_INNER, start);
    let (ix1, iy1) = ring_point(center, DONUT_INNER, end);

    format!(
        "M {ox0:.2} {oy0:.2} \
         A {DONUT_OUTER} {DONUT_OUTER} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} \
         A {DONUT_INNER} {DONUT_INNER} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
    )
}

fn ring_point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    // Angle 0 points up; positive angles go clockwise.
    let theta = angle - TAU / 4.0;
    (center + radius * theta.cos(), center + radius * theta.sin())
}
