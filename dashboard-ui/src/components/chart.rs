//! Chart Component
//!
//! Temperature line chart drawn on an HTML5 Canvas from a [`ChartConfig`].
//! The canvas is a [`ChartSurface`]; the component keeps the single live
//! [`CanvasChart`] and hands it back to [`render_chart`] on every redraw.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use thermo_dashboard::render::{render_chart, ChartConfig, ChartHandle, ChartSurface};

use crate::state::DashboardState;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Temperature chart component
#[component]
pub fn TemperatureChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let live = store_value(None::<CanvasChart>);
    let tooltip = create_rw_signal(None::<Tooltip>);

    // Redraw whenever a statistics load lands
    create_effect(move |_| {
        let Some(readings) = state.readings.get() else {
            return;
        };

        if let Some(canvas) = canvas_ref.get() {
            let surface = CanvasSurface::new((*canvas).clone());
            live.update_value(|slot| {
                let previous = slot.take();
                *slot = Some(render_chart(&surface, previous, &readings));
            });
            tooltip.set(None);
        }
    });

    on_cleanup(move || {
        if let Some(chart) = live.try_update_value(|slot| slot.take()).flatten() {
            chart.destroy();
        }
    });

    let on_mouse_move = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let scale = canvas.width() as f64 / (canvas.client_width().max(1)) as f64;
        let x = ev.offset_x() as f64 * scale;
        let hovered = live.with_value(|slot| slot.as_ref().and_then(|chart| chart.tooltip_at(x)));
        tooltip.set(hovered);
    };

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| tooltip.set(None)
            />

            {move || tooltip.get().map(|tip| view! {
                <div
                    class="absolute top-2 bg-gray-900/90 text-white text-xs rounded px-3 py-2 pointer-events-none"
                    style=format!("left: {:.1}%", tip.left_percent)
                >
                    <div class="font-semibold">{tip.title}</div>
                    <div>{tip.text}</div>
                </div>
            })}
        </div>
    }
}

/// Hover box contents
#[derive(Clone, Debug, PartialEq)]
struct Tooltip {
    /// Horizontal position as a share of the canvas width
    left_percent: f64,
    title: String,
    text: String,
}

/// A canvas to draw charts on
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

/// The chart currently drawn on a canvas
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    config: ChartConfig,
}

impl CanvasChart {
    /// Tooltip for the point nearest to canvas x-coordinate `x`
    fn tooltip_at(&self, x: f64) -> Option<Tooltip> {
        let series = self.config.series();
        let width = self.canvas.width() as f64;
        let index = nearest_index(x, series.data.len(), MARGIN_LEFT, width - MARGIN_LEFT - MARGIN_RIGHT)?;

        Some(Tooltip {
            left_percent: x / width * 100.0,
            title: self.config.data.labels.get(index).cloned().unwrap_or_default(),
            text: format!(
                "{}: {}",
                series.label,
                self.config.options.plugins.tooltip.label(series.data[index])
            ),
        })
    }
}

impl ChartSurface for CanvasSurface {
    type Handle = CanvasChart;

    fn construct(&self, config: &ChartConfig) -> CanvasChart {
        draw_chart(&self.canvas, config);
        CanvasChart {
            canvas: self.canvas.clone(),
            config: config.clone(),
        }
    }
}

impl ChartHandle for CanvasChart {
    fn destroy(self) {
        if let Some(ctx) = context_2d(&self.canvas) {
            ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Y-axis bounds for `data`, padded by 10% of the spread
fn value_range(data: &[f64]) -> (f64, f64) {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let spread = max - min;
    let padding = if spread > 0.0 { spread * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// X position of point `index` out of `count`, evenly spaced across the plot
fn point_x(index: usize, count: usize, left: f64, width: f64) -> f64 {
    if count <= 1 {
        left + width / 2.0
    } else {
        left + index as f64 / (count - 1) as f64 * width
    }
}

/// Index of the point closest to `x` ("index" mode, no intersection needed)
fn nearest_index(x: f64, count: usize, left: f64, width: f64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if count == 1 {
        return Some(0);
    }

    let step = width / (count - 1) as f64;
    let index = ((x - left) / step).round().clamp(0.0, (count - 1) as f64);
    Some(index as usize)
}

/// Cubic bezier control points through `points` with the given tension.
///
/// Returns one `[control1, control2, end]` triple per segment.
fn bezier_segments(points: &[(f64, f64)], tension: f64) -> Vec<[(f64, f64); 3]> {
    (1..points.len())
        .map(|i| {
            let p0 = points[i.saturating_sub(2)];
            let p1 = points[i - 1];
            let p2 = points[i];
            let p3 = points[(i + 1).min(points.len() - 1)];

            let c1 = (
                p1.0 + (p2.0 - p0.0) * tension / 2.0,
                p1.1 + (p2.1 - p0.1) * tension / 2.0,
            );
            let c2 = (
                p2.0 - (p3.0 - p1.0) * tension / 2.0,
                p2.1 - (p3.1 - p1.1) * tension / 2.0,
            );
            [c1, c2, p2]
        })
        .collect()
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let series = config.series();
    let y_axis = &config.options.scales.y;
    let x_axis = &config.options.scales.x;

    // Clear canvas
    ctx.clear_rect(0.0, 0.0, width, height);

    // Legend
    let legend = &config.options.plugins.legend;
    if legend.display {
        ctx.set_fill_style(&series.border_color.as_str().into());
        ctx.fill_rect(width / 2.0 - 80.0, 12.0, 30.0, 10.0);
        ctx.set_fill_style(&legend.labels.color.as_str().into());
        ctx.set_font(&format!("{} {}px sans-serif", legend.labels.font.weight, legend.labels.font.size));
        let _ = ctx.fill_text(&series.label, width / 2.0 - 40.0, 22.0);
    }

    if series.data.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected range", width / 2.0 - 100.0, height / 2.0);
        return;
    }

    let (y_min, y_max) = value_range(&series.data);
    let to_y = |value: f64| MARGIN_TOP + (y_max - value) / (y_max - y_min) * chart_height;

    // Horizontal grid lines (5 lines) with y labels
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&y_axis.grid.color.as_str().into());
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&y_axis.ticks.color.as_str().into());
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    let points: Vec<(f64, f64)> = series
        .data
        .iter()
        .enumerate()
        .map(|(i, value)| (point_x(i, series.data.len(), MARGIN_LEFT, chart_width), to_y(*value)))
        .collect();
    let segments = bezier_segments(&points, series.tension);

    // Area under the line
    if series.fill {
        ctx.set_fill_style(&series.background_color.as_str().into());
        ctx.begin_path();
        ctx.move_to(points[0].0, MARGIN_TOP + chart_height);
        ctx.line_to(points[0].0, points[0].1);
        for [c1, c2, end] in &segments {
            ctx.bezier_curve_to(c1.0, c1.1, c2.0, c2.1, end.0, end.1);
        }
        ctx.line_to(points[points.len() - 1].0, MARGIN_TOP + chart_height);
        ctx.close_path();
        ctx.fill();
    }

    // Line
    ctx.set_stroke_style(&series.border_color.as_str().into());
    ctx.set_line_width(series.border_width);
    ctx.begin_path();
    ctx.move_to(points[0].0, points[0].1);
    for [c1, c2, end] in &segments {
        ctx.bezier_curve_to(c1.0, c1.1, c2.0, c2.1, end.0, end.1);
    }
    ctx.stroke();

    // Point markers (hidden on long series)
    if series.point_radius > 0 {
        ctx.set_fill_style(&series.point_background_color.as_str().into());
        ctx.set_stroke_style(&series.point_border_color.as_str().into());
        ctx.set_line_width(series.point_border_width);
        for (x, y) in &points {
            ctx.begin_path();
            let _ = ctx.arc(*x, *y, series.point_radius as f64, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
            ctx.stroke();
        }
    }

    // X-axis labels, at most max_ticks_limit of them
    ctx.set_fill_style(&x_axis.ticks.color.as_str().into());
    ctx.set_font("12px sans-serif");
    let limit = x_axis.ticks.max_ticks_limit.unwrap_or(10).max(1) as usize;
    let step = config.data.labels.len().div_ceil(limit).max(1);
    for (i, label) in config.data.labels.iter().enumerate().step_by(step) {
        let x = point_x(i, config.data.labels.len(), MARGIN_LEFT, chart_width);
        let _ = ctx.fill_text(label, x - 24.0, height - 20.0);
    }

    // Y-axis title
    if let Some(title) = y_axis.title.as_ref().filter(|t| t.display) {
        ctx.set_fill_style(&y_axis.ticks.color.as_str().into());
        let _ = ctx.fill_text(&title.text, 5.0, MARGIN_TOP - 12.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_pads_spread() {
        let (min, max) = value_range(&[20.0, 30.0]);
        assert!((min - 19.0).abs() < 1e-9);
        assert!((max - 31.0).abs() < 1e-9);

        assert_eq!(value_range(&[21.0, 21.0]), (20.0, 22.0));
    }

    #[test]
    fn test_point_spacing() {
        assert_eq!(point_x(0, 5, 60.0, 400.0), 60.0);
        assert_eq!(point_x(4, 5, 60.0, 400.0), 460.0);
        assert_eq!(point_x(0, 1, 60.0, 400.0), 260.0);
    }

    #[test]
    fn test_nearest_index() {
        assert_eq!(nearest_index(60.0, 5, 60.0, 400.0), Some(0));
        assert_eq!(nearest_index(170.0, 5, 60.0, 400.0), Some(1));
        assert_eq!(nearest_index(1000.0, 5, 60.0, 400.0), Some(4));
        assert_eq!(nearest_index(0.0, 5, 60.0, 400.0), Some(0));
        assert_eq!(nearest_index(100.0, 0, 60.0, 400.0), None);
    }

    #[test]
    fn test_zero_tension_keeps_controls_on_endpoints() {
        let points = [(0.0, 0.0), (10.0, 5.0), (20.0, 0.0)];
        let segments = bezier_segments(&points, 0.0);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], [(0.0, 0.0), (10.0, 5.0), (10.0, 5.0)]);
        assert_eq!(segments[1][2], (20.0, 0.0));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use thermo_dashboard::model::Reading;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(400);
        canvas.set_height(200);
        canvas
    }

    /// Pixels with any opacity
    fn painted_pixels(canvas: &HtmlCanvasElement) -> usize {
        let ctx = context_2d(canvas).unwrap();
        let image = ctx
            .get_image_data(0.0, 0.0, canvas.width() as f64, canvas.height() as f64)
            .unwrap();
        image.data().0.chunks(4).filter(|px| px[3] != 0).count()
    }

    fn readings() -> Vec<Reading> {
        vec![
            Reading::new("2024-07-10T10:00:00", 21.0),
            Reading::new("2024-07-10T10:05:00", 22.5),
            Reading::new("2024-07-10T10:10:00", 21.75),
        ]
    }

    #[wasm_bindgen_test]
    fn construct_draws_and_destroy_clears() {
        let canvas = canvas();
        let surface = CanvasSurface::new(canvas.clone());
        assert_eq!(painted_pixels(&canvas), 0);

        let chart = render_chart(&surface, None, &readings());
        assert!(painted_pixels(&canvas) > 0);

        chart.destroy();
        assert_eq!(painted_pixels(&canvas), 0);
    }

    #[wasm_bindgen_test]
    fn redraw_replaces_the_previous_chart() {
        let canvas = canvas();
        let surface = CanvasSurface::new(canvas.clone());

        let first = render_chart(&surface, None, &readings());
        let second = render_chart(&surface, Some(first), &readings()[..1]);
        assert!(painted_pixels(&canvas) > 0);
        assert_eq!(second.tooltip_at(0.0).map(|tip| tip.title), Some("10:00:00".to_string()));

        second.destroy();
        assert_eq!(painted_pixels(&canvas), 0);
    }
}
