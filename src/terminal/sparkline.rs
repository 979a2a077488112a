//! One-line chart for the terminal

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::Output;
use crate::render::{format, ChartConfig, ChartHandle, ChartSurface};

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Resample `data` to exactly `width` points.
///
/// Longer series are averaged into buckets; shorter ones repeat values.
pub fn resample(data: &[f64], width: usize) -> Vec<f64> {
    if data.is_empty() || width == 0 {
        return Vec::new();
    }

    if data.len() == width {
        return data.to_vec();
    }

    if data.len() < width {
        return (0..width).map(|i| data[i * data.len() / width]).collect();
    }

    (0..width)
        .map(|i| {
            let start = i * data.len() / width;
            let end = ((i + 1) * data.len() / width).max(start + 1);
            let bucket = &data[start..end];
            bucket.iter().sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

/// Block-character sparkline of `values`
pub fn sparkline(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < 0.01 { 1.0 } else { max - min };

    values
        .iter()
        .map(|v| {
            let level = ((v - min) / range * (BARS.len() - 1) as f64).round() as usize;
            BARS[level.min(BARS.len() - 1)]
        })
        .collect()
}

/// Draws temperature charts as sparklines
#[derive(Debug)]
pub struct TerminalChart {
    out: Output,
    width: usize,
    next_id: AtomicUsize,
    live: Arc<AtomicUsize>,
}

impl TerminalChart {
    pub fn new(out: Output, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            next_id: AtomicUsize::new(1),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Charts constructed and not yet destroyed
    pub fn live_charts(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    fn draw(&self, config: &ChartConfig) -> String {
        let series = config.series();
        if series.data.is_empty() {
            return format!("Chart: {}", crate::render::NO_DATA);
        }

        let min = series.data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let first = config.data.labels.first().map(String::as_str).unwrap_or("");
        let last = config.data.labels.last().map(String::as_str).unwrap_or("");

        format!(
            "Chart: {} {} {}  [{} .. {}, {} points]",
            first,
            sparkline(&resample(&series.data, self.width)),
            last,
            format::temperature(min),
            format::temperature_with_unit(max),
            series.data.len()
        )
    }
}

/// A sparkline on a [`TerminalChart`]
#[derive(Debug)]
pub struct SparklineHandle {
    id: usize,
    live: Arc<AtomicUsize>,
}

impl SparklineHandle {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl ChartSurface for TerminalChart {
    type Handle = SparklineHandle;

    fn construct(&self, config: &ChartConfig) -> SparklineHandle {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        self.out.line(&self.draw(config));

        tracing::trace!(chart = id, points = config.series().data.len(), "Chart constructed");
        SparklineHandle {
            id,
            live: self.live.clone(),
        }
    }
}

impl ChartHandle for SparklineHandle {
    fn destroy(self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        tracing::trace!(chart = self.id, "Chart destroyed");
    }
}
