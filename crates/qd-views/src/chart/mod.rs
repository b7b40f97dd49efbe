//! Scatter chart of the loaded records

mod view;

pub use view::ChartView;

use egui::{Color32, Pos2, Stroke};
use serde::{Deserialize, Serialize};
use qd_core::{AxisSelection, RecordId};
use qd_data::Record;

/// Configuration for the chart view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Magnitude above which a point is drawn in the high-magnitude tier
    pub high_magnitude_threshold: f64,

    /// Whether to show grid
    pub show_grid: bool,

    /// Extra screen-space tolerance around a marker when picking, in points
    pub pick_slop: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            high_magnitude_threshold: 4.0,
            show_grid: true,
            pick_slop: 3.0,
        }
    }
}

/// One record as placed on the chart under the current axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub id: RecordId,
    pub x: f64,
    pub y: f64,
    /// Magnitude, drives the tier
    pub size_metric: f64,
    pub is_selected: bool,
}

/// Records eligible for plotting, in input order.
///
/// A record is kept only when both of its selected axis values are finite.
pub fn plot_sequence(records: &[Record], axes: AxisSelection, selected: Option<RecordId>) -> Vec<PlotPoint> {
    records
        .iter()
        .filter_map(|record| {
            let x = record.axis_value(axes.x);
            let y = record.axis_value(axes.y);
            if !x.is_finite() || !y.is_finite() {
                return None;
            }
            Some(PlotPoint {
                id: record.id,
                x,
                y,
                size_metric: record.mag,
                is_selected: selected == Some(record.id),
            })
        })
        .collect()
}

const TOMATO: Color32 = Color32::from_rgb(0xFF, 0x63, 0x47);
const ALERT_RED: Color32 = Color32::from_rgb(0xE6, 0x00, 0x00);
const LAVENDER: Color32 = Color32::from_rgb(0x88, 0x84, 0xD8);
const OUTLINE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Visual tier of a plotted point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointTier {
    Selected,
    HighMagnitude,
    Default,
}

impl PointTier {
    /// Selection wins over magnitude
    pub fn for_point(point: &PlotPoint, high_magnitude_threshold: f64) -> Self {
        if point.is_selected {
            PointTier::Selected
        } else if point.size_metric > high_magnitude_threshold {
            PointTier::HighMagnitude
        } else {
            PointTier::Default
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            PointTier::Selected => TOMATO,
            PointTier::HighMagnitude => ALERT_RED,
            PointTier::Default => LAVENDER,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            PointTier::Selected => 8.0,
            PointTier::HighMagnitude => 6.0,
            PointTier::Default => 4.0,
        }
    }

    pub fn outline(self) -> Option<Stroke> {
        match self {
            PointTier::Selected => Some(Stroke::new(2.0, OUTLINE)),
            _ => None,
        }
    }
}

/// Index of the point closest to `pointer` whose pick radius contains it.
///
/// `to_screen` maps plot coordinates to screen positions.
pub fn nearest_point(
    points: &[PlotPoint],
    pointer: Pos2,
    to_screen: impl Fn(f64, f64) -> Pos2,
    pick_radius: impl Fn(&PlotPoint) -> f32,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, point) in points.iter().enumerate() {
        let distance = to_screen(point.x, point.y).distance(pointer);
        if distance > pick_radius(point) {
            continue;
        }
        // Later points are drawn on top, so they win ties
        if best.map_or(true, |(_, d)| distance <= d) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// Tooltip body lines for a hovered point: magnitude, then the two axis values
pub fn tooltip_lines(record: &Record, axes: AxisSelection, point: &PlotPoint) -> [String; 3] {
    [
        format!("Magnitude: {:.2}", record.mag),
        format!("{}: {:.2}", axes.x.label(), point.x),
        format!("{}: {:.2}", axes.y.label(), point.y),
    ]
}
