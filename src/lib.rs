//! # Thermo Dashboard
//!
//! Client side of a temperature-sensor dashboard: polls a sensor HTTP API
//! for the current reading and for windowed statistics, and renders them as
//! a current value with an online/offline indicator, summary cards, a line
//! chart and a history table.
//!
//! ## Modules
//!
//! - [`model`]: readings, summaries and the API response shapes
//! - [`window`]: statistics time windows, presets and input parsing
//! - [`client`]: the [`SensorApi`] seam, URLs and the reqwest client
//! - [`render`]: summary, chart and table rendering
//! - [`dashboard`]: the controller, poll tasks and sidebar navigation
//! - `config`, `terminal`: runtime configuration and the terminal front end
//!
//! The `native` feature (default) carries everything that needs tokio or
//! reqwest. Without it the crate is the pure core reused by the browser
//! frontend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use thermo_dashboard::client::{ClientConfig, HttpSensorApi};
//! use thermo_dashboard::dashboard::Dashboard;
//! use thermo_dashboard::terminal::{Output, TerminalChart, TerminalView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(HttpSensorApi::new(ClientConfig::default())?);
//!     let out = Output::stdout();
//!     let view = Arc::new(TerminalView::new(out.clone(), true));
//!
//!     let dashboard = Arc::new(Dashboard::new(api, view, TerminalChart::new(out, 60)));
//!     let polls = dashboard.start().await;
//!
//!     tokio::signal::ctrl_c().await?;
//!     polls.stop();
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dashboard;
pub mod model;
pub mod render;
pub mod window;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod terminal;

// Re-export top-level types for convenience
pub use model::{CurrentResponse, Reading, StatSummary, Statistics, StatsResponse};

pub use window::{Preset, PresetParseError, TimeWindow, WindowError, WindowInputs};

pub use client::{ClientError, SensorApi, API_BASE};

pub use render::{
    render_chart, render_summary, render_table, ChartConfig, ChartHandle, ChartSurface,
    SummaryPanel, TableRow,
};

pub use dashboard::{ApiStatus, Clock, DashboardView, Navigation, SystemClock};

#[cfg(feature = "native")]
pub use client::{ClientConfig, HttpSensorApi};

#[cfg(feature = "native")]
pub use dashboard::{Dashboard, DashboardError, DashboardResult, PollSchedule, PollTasks};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig};
