//! Dashboard controller
//!
//! Owns the window inputs and the live chart handle, fetches through a
//! [`SensorApi`], and writes results to a [`DashboardView`]. The two poll
//! tasks and user actions share one controller; fetches are never
//! cancelled, so when two overlap the later completion wins.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

use super::clock::{Clock, SystemClock};
use super::poller::{PollSchedule, PollTask, PollTasks};
use super::view::{ApiStatus, DashboardView};
use crate::client::{ClientError, SensorApi};
use crate::model::{Reading, Statistics};
use crate::render::{
    format, render_chart, render_summary, render_table, ChartHandle, ChartSurface,
};
use crate::window::{Preset, WindowError, WindowInputs};

/// Errors surfaced by dashboard operations.
///
/// They are already logged (and, for window errors, alerted) by the time
/// the caller sees them.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// The dashboard client
pub struct Dashboard<C: ChartSurface> {
    api: Arc<dyn SensorApi>,
    view: Arc<dyn DashboardView>,
    charts: C,
    clock: Arc<dyn Clock>,
    inputs: RwLock<WindowInputs>,
    /// The single live chart on `charts`
    chart: Mutex<Option<C::Handle>>,
}

impl<C> Dashboard<C>
where
    C: ChartSurface + Send + Sync + 'static,
    C::Handle: Send + 'static,
{
    /// Create a dashboard with empty window inputs and the system clock
    pub fn new(api: Arc<dyn SensorApi>, view: Arc<dyn DashboardView>, charts: C) -> Self {
        Self {
            api,
            view,
            charts,
            clock: Arc::new(SystemClock),
            inputs: RwLock::new(WindowInputs::default()),
            chart: Mutex::new(None),
        }
    }

    /// Builder method: use a different clock for presets
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current contents of the window inputs
    pub async fn window_inputs(&self) -> WindowInputs {
        self.inputs.read().await.clone()
    }

    /// Manual edit of the window inputs; takes effect on the next statistics fetch
    pub async fn set_window_inputs(&self, inputs: WindowInputs) {
        *self.inputs.write().await = inputs;
    }

    /// Whether a chart is currently live
    pub async fn has_chart(&self) -> bool {
        self.chart.lock().await.is_some()
    }

    /// Write the preset's window (anchored at now) into the inputs without fetching
    pub async fn set_window(&self, preset: Preset) -> WindowInputs {
        let window = preset.window(&self.clock.now());
        let inputs = WindowInputs::from_window(&window);

        *self.inputs.write().await = inputs.clone();
        self.view.show_window(&inputs);

        inputs
    }

    /// Fetch and show the current reading
    pub async fn fetch_current(&self) -> DashboardResult<Reading> {
        match self.api.current().await {
            Ok(reading) => {
                self.view.show_current(
                    &format::temperature(reading.temperature),
                    &format::updated_label(&reading),
                );
                self.view.set_status(ApiStatus::Online);
                Ok(reading)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading current temperature");
                self.view.set_status(ApiStatus::Offline);
                Err(e.into())
            }
        }
    }

    /// Fetch statistics for the window in the inputs and render them.
    ///
    /// Missing or invalid inputs raise an alert and no request is made.
    /// Fetch failures are logged and the previous display is left as is.
    pub async fn fetch_statistics(&self) -> DashboardResult<Statistics> {
        let window = match self.inputs.read().await.to_window() {
            Ok(window) => window,
            Err(e) => {
                tracing::warn!(error = %e, "Statistics window rejected");
                self.view.alert(&e.to_string());
                return Err(e.into());
            }
        };

        match self.api.stats(&window).await {
            Ok(stats) => {
                tracing::debug!(%window, readings = stats.readings.len(), "Statistics loaded");
                self.render_statistics(&stats).await;
                Ok(stats)
            }
            Err(e) => {
                tracing::error!(error = %e, %window, "Error loading statistics");
                Err(e.into())
            }
        }
    }

    /// The "apply" action: fetch statistics for the inputs as edited
    pub async fn apply(&self) -> DashboardResult<Statistics> {
        self.fetch_statistics().await
    }

    /// Set the window from a preset and fetch its statistics
    pub async fn apply_preset(&self, preset: Preset) -> DashboardResult<Statistics> {
        self.set_window(preset).await;
        self.fetch_statistics().await
    }

    /// Summary, chart and table are written under the chart lock, so
    /// overlapping completions never interleave their panels.
    async fn render_statistics(&self, stats: &Statistics) {
        let mut slot = self.chart.lock().await;

        self.view.show_summary(&render_summary(&stats.summary));
        let previous = slot.take();
        *slot = Some(render_chart(&self.charts, previous, &stats.readings));
        self.view.show_table(&render_table(&stats.readings));
    }

    /// Initialize with the default window and the standard poll periods
    pub async fn start(self: &Arc<Self>) -> PollTasks {
        self.start_with(Preset::Reset, PollSchedule::default()).await
    }

    /// Set the initial window, fetch both endpoints once, then arm the poll tasks
    pub async fn start_with(self: &Arc<Self>, initial: Preset, schedule: PollSchedule) -> PollTasks {
        self.set_window(initial).await;

        // Failures are already logged and shown; polling continues regardless
        let _ = self.fetch_current().await;
        let _ = self.fetch_statistics().await;

        let dashboard = Arc::clone(self);
        let current = PollTask::spawn("current", schedule.current, move || {
            let dashboard = Arc::clone(&dashboard);
            async move {
                let _ = dashboard.fetch_current().await;
            }
        });

        let dashboard = Arc::clone(self);
        let statistics = PollTask::spawn("statistics", schedule.statistics, move || {
            let dashboard = Arc::clone(&dashboard);
            async move {
                let _ = dashboard.fetch_statistics().await;
            }
        });

        tracing::info!(
            current_secs = schedule.current.as_secs(),
            statistics_secs = schedule.statistics.as_secs(),
            "Dashboard polling started"
        );

        PollTasks {
            current,
            statistics,
        }
    }

    /// Destroy the live chart, if any
    pub async fn clear_chart(&self) {
        if let Some(handle) = self.chart.lock().await.take() {
            handle.destroy();
        }
    }
}
