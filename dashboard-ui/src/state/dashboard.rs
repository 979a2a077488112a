//! Dashboard State
//!
//! Reactive state using Leptos signals, plus the fetch actions that write
//! to it. Every fetch replaces what was shown before; a failed fetch leaves
//! the previous values in place.

use gloo_timers::callback::Interval;
use leptos::*;

use thermo_dashboard::dashboard::{
    ApiStatus, Clock, Navigation, SystemClock, CURRENT_REFRESH, STATS_REFRESH,
};
use thermo_dashboard::model::Reading;
use thermo_dashboard::render::{format, render_summary, render_table, SummaryPanel, TableRow};
use thermo_dashboard::window::{Preset, WindowInputs};

use crate::api;

/// Current temperature card contents
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentDisplay {
    pub temperature: String,
    pub updated: String,
}

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Last successful current reading, formatted
    pub current: RwSignal<Option<CurrentDisplay>>,
    /// API status dot
    pub status: RwSignal<ApiStatus>,
    /// Contents of the two datetime-local inputs
    pub inputs: RwSignal<WindowInputs>,
    pub summary: RwSignal<SummaryPanel>,
    /// Chart series; `None` until the first statistics load
    pub readings: RwSignal<Option<Vec<Reading>>>,
    pub rows: RwSignal<Vec<TableRow>>,
    pub nav: RwSignal<Navigation>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState {
        current: create_rw_signal(None),
        status: create_rw_signal(ApiStatus::default()),
        inputs: create_rw_signal(WindowInputs::default()),
        summary: create_rw_signal(SummaryPanel::empty()),
        readings: create_rw_signal(None),
        rows: create_rw_signal(Vec::new()),
        nav: create_rw_signal(Navigation::default()),
    };

    provide_context(state);
    state
}

/// The two running poll intervals
pub struct Polling {
    current: Interval,
    statistics: Interval,
}

impl Polling {
    pub fn stop(self) {
        self.current.cancel();
        self.statistics.cancel();
    }
}

impl DashboardState {
    /// Set the default window, load both endpoints once, then start polling
    pub fn start(self) -> Polling {
        self.set_window(Preset::Reset);
        spawn_local(self.load_current());
        spawn_local(self.load_statistics());

        let current = Interval::new(CURRENT_REFRESH.as_millis() as u32, move || {
            spawn_local(self.load_current());
        });
        let statistics = Interval::new(STATS_REFRESH.as_millis() as u32, move || {
            spawn_local(self.load_statistics());
        });

        Polling {
            current,
            statistics,
        }
    }

    /// Fetch the current reading and update the card and status dot
    pub async fn load_current(self) {
        match api::fetch_current().await {
            Ok(reading) => {
                self.current.set(Some(CurrentDisplay {
                    temperature: format::temperature(reading.temperature),
                    updated: format::updated_label(&reading),
                }));
                self.status.set(ApiStatus::Online);
            }
            Err(e) => {
                log_error(&format!("Error loading current temperature: {}", e));
                self.status.set(ApiStatus::Offline);
            }
        }
    }

    /// Fetch statistics for the window in the inputs and render them
    pub async fn load_statistics(self) {
        let window = match self.inputs.get_untracked().to_window() {
            Ok(window) => window,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        match api::fetch_statistics(&window).await {
            Ok(stats) => {
                let rows = render_table(&stats.readings);
                self.summary.set(render_summary(&stats.summary));
                self.readings.set(Some(stats.readings));
                self.rows.set(rows);
            }
            Err(e) => log_error(&format!("Error loading statistics: {}", e)),
        }
    }

    /// Write a preset's window into the inputs
    pub fn set_window(self, preset: Preset) {
        let window = preset.window(&SystemClock.now());
        self.inputs.set(WindowInputs::from_window(&window));
    }

    /// Preset button: set the window and load it
    pub fn apply_preset(self, preset: Preset) {
        self.set_window(preset);
        spawn_local(self.load_statistics());
    }

    /// Apply button
    pub fn apply(self) {
        spawn_local(self.load_statistics());
    }
}

fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
