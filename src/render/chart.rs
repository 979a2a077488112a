//! Temperature line chart
//!
//! [`ChartConfig`] mirrors the Chart.js configuration object so it can be
//! handed to a JS charting library as JSON. Rendering itself is delegated to
//! a [`ChartSurface`]: the canvas drawer in the browser frontend, the
//! sparkline in the terminal.
//!
//! At most one chart is live per surface. [`render_chart`] takes the
//! previous handle by value and destroys it before constructing the next,
//! so the caller owns the single live handle.

use serde::{Serialize, Serializer};

use super::format;
use crate::model::Reading;

/// Above this many points the point markers are hidden
pub const POINT_MARKER_LIMIT: usize = 100;

/// Marker radius for short series
pub const POINT_RADIUS: u32 = 4;

/// Marker radius on hover
pub const POINT_HOVER_RADIUS: u32 = 6;

/// Series and y-axis title
pub const SERIES_LABEL: &str = "Temperature (°C)";

/// Line color
pub const LINE_COLOR: &str = "#667eea";

/// Area fill under the line
pub const FILL_COLOR: &str = "rgba(102, 126, 234, 0.1)";

/// Legend and tick text
pub const TEXT_COLOR: &str = "#ffffff";

/// Grid lines
pub const GRID_COLOR: &str = "rgba(255, 255, 255, 0.05)";

/// Something that can draw a chart configuration
pub trait ChartSurface {
    type Handle: ChartHandle;

    /// Draw `config` and return the live chart
    fn construct(&self, config: &ChartConfig) -> Self::Handle;
}

/// A live chart on a surface
pub trait ChartHandle {
    /// Release the chart and whatever it drew
    fn destroy(self);
}

/// Replace the chart on `surface` with one for `readings`
pub fn render_chart<S>(surface: &S, previous: Option<S::Handle>, readings: &[Reading]) -> S::Handle
where
    S: ChartSurface + ?Sized,
{
    if let Some(handle) = previous {
        handle.destroy();
    }

    surface.construct(&ChartConfig::temperature_line(readings))
}

/// Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

/// Full chart configuration
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Labels and series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    /// Written out as the one-element `datasets` array
    #[serde(rename = "datasets", serialize_with = "serialize_single")]
    pub series: Dataset,
}

fn serialize_single<S: Serializer>(series: &Dataset, serializer: S) -> Result<S::Ok, S::Error> {
    [series].serialize(serializer)
}

/// One line series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: f64,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: u32,
    pub point_background_color: String,
    pub point_border_color: String,
    pub point_border_width: f64,
    pub point_hover_radius: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub color: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    pub weight: String,
}

/// Tooltip options
///
/// The label formatter is a function, so it is not part of the JSON; JS
/// hosts install a callback that calls [`Tooltip::label`].
#[derive(Debug, Clone, Serialize)]
pub struct Tooltip {
    pub mode: String,
    pub intersect: bool,
    #[serde(skip)]
    pub label_formatter: fn(f64) -> String,
}

impl Tooltip {
    /// Tooltip text for a point value
    pub fn label(&self, value: f64) -> String {
        (self.label_formatter)(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
    pub x: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    pub ticks: Ticks,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rotation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub color: String,
}

/// Marker radius for a series of `len` points
pub fn point_radius_for(len: usize) -> u32 {
    if len > POINT_MARKER_LIMIT {
        0
    } else {
        POINT_RADIUS
    }
}

impl ChartConfig {
    /// Single-series temperature line over `readings`
    pub fn temperature_line(readings: &[Reading]) -> Self {
        let labels = readings.iter().map(format::time_of_day).collect();
        let data = readings.iter().map(|r| r.temperature).collect();

        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels,
                series: Dataset {
                    label: SERIES_LABEL.to_string(),
                    data,
                    border_color: LINE_COLOR.to_string(),
                    background_color: FILL_COLOR.to_string(),
                    border_width: 2.0,
                    fill: true,
                    tension: 0.4,
                    point_radius: point_radius_for(readings.len()),
                    point_background_color: LINE_COLOR.to_string(),
                    point_border_color: "#fff".to_string(),
                    point_border_width: 2.0,
                    point_hover_radius: POINT_HOVER_RADIUS,
                },
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: true,
                plugins: Plugins {
                    legend: Legend {
                        display: true,
                        labels: LegendLabels {
                            color: TEXT_COLOR.to_string(),
                            font: Font {
                                size: 12,
                                weight: "bold".to_string(),
                            },
                        },
                    },
                    tooltip: Tooltip {
                        mode: "index".to_string(),
                        intersect: false,
                        label_formatter: format::temperature_with_unit,
                    },
                },
                scales: Scales {
                    y: Axis {
                        begin_at_zero: Some(false),
                        title: Some(AxisTitle {
                            display: true,
                            text: SERIES_LABEL.to_string(),
                        }),
                        ticks: Ticks {
                            color: TEXT_COLOR.to_string(),
                            max_rotation: None,
                            min_rotation: None,
                            max_ticks_limit: None,
                        },
                        grid: Grid {
                            color: GRID_COLOR.to_string(),
                        },
                    },
                    x: Axis {
                        begin_at_zero: None,
                        title: None,
                        ticks: Ticks {
                            color: TEXT_COLOR.to_string(),
                            max_rotation: Some(45),
                            min_rotation: Some(0),
                            max_ticks_limit: Some(10),
                        },
                        grid: Grid {
                            color: GRID_COLOR.to_string(),
                        },
                    },
                },
            },
        }
    }

    /// The single temperature series
    pub fn series(&self) -> &Dataset {
        &self.data.series
    }

    /// Serialize to the JSON object a JS charting library expects
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn readings(count: usize) -> Vec<Reading> {
        (0..count)
            .map(|i| {
                let timestamp = format!("2024-01-01T10:{:02}:{:02}", i / 60 % 60, i % 60);
                Reading::new(timestamp, 20.0 + i as f64 * 0.1)
            })
            .collect()
    }

    #[test]
    fn test_long_series_hides_markers() {
        let config = ChartConfig::temperature_line(&readings(120));
        assert_eq!(config.series().point_radius, 0);
    }

    #[test]
    fn test_short_series_shows_markers() {
        let config = ChartConfig::temperature_line(&readings(30));
        assert_eq!(config.series().point_radius, 4);
        assert_eq!(point_radius_for(100), 4);
        assert_eq!(point_radius_for(101), 0);
    }

    #[test]
    fn test_labels_parallel_values() {
        let config = ChartConfig::temperature_line(&readings(3));
        assert_eq!(config.data.labels, vec!["10:00:00", "10:00:01", "10:00:02"]);
        assert_eq!(config.series().data.len(), 3);
        assert_eq!(config.series().data[0], 20.0);
    }

    #[test]
    fn test_empty_series_serializes_one_dataset() {
        let config = ChartConfig::temperature_line(&[]);
        assert!(config.series().data.is_empty());

        let json = config.to_json();
        assert_eq!(json["data"]["datasets"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["data"]["datasets"][0]["data"], serde_json::json!([]));
    }

    #[test]
    fn test_tooltip_uses_two_decimals() {
        let config = ChartConfig::temperature_line(&readings(1));
        assert_eq!(config.options.plugins.tooltip.label(21.456), "21.46 °C");
    }

    #[test]
    fn test_json_shape() {
        let json = ChartConfig::temperature_line(&readings(2)).to_json();
        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["datasets"][0]["pointRadius"], 4);
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "#667eea");
        assert_eq!(json["options"]["maintainAspectRatio"], true);
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], false);
        assert_eq!(json["options"]["scales"]["x"]["ticks"]["maxTicksLimit"], 10);
        assert!(json["options"]["scales"]["x"].get("title").is_none());
        assert!(json["options"]["plugins"]["tooltip"]
            .get("label_formatter")
            .is_none());
    }

    /// Records construct/destroy calls in order
    #[derive(Default)]
    struct RecordingSurface {
        events: Rc<RefCell<Vec<String>>>,
        next_id: RefCell<u32>,
    }

    struct RecordingHandle {
        id: u32,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl ChartSurface for RecordingSurface {
        type Handle = RecordingHandle;

        fn construct(&self, config: &ChartConfig) -> Self::Handle {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            self.events
                .borrow_mut()
                .push(format!("construct {} ({} points)", *next, config.series().data.len()));
            RecordingHandle {
                id: *next,
                events: self.events.clone(),
            }
        }
    }

    impl ChartHandle for RecordingHandle {
        fn destroy(self) {
            self.events.borrow_mut().push(format!("destroy {}", self.id));
        }
    }

    #[test]
    fn test_render_destroys_previous_before_constructing() {
        let surface = RecordingSurface::default();

        let first = render_chart(&surface, None, &readings(2));
        let second = render_chart(&surface, Some(first), &readings(5));
        assert_eq!(second.id, 2);

        assert_eq!(
            *surface.events.borrow(),
            vec![
                "construct 1 (2 points)".to_string(),
                "destroy 1".to_string(),
                "construct 2 (5 points)".to_string(),
            ]
        );
    }
}
