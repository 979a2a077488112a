//! Text rendition of the dashboard

use owo_colors::OwoColorize;
use std::sync::Mutex;

use super::Output;
use crate::dashboard::{ApiStatus, DashboardView};
use crate::render::{format, SummaryPanel, TableRow};
use crate::window::WindowInputs;

/// Writes every dashboard update as plain lines
#[derive(Debug)]
pub struct TerminalView {
    out: Output,
    color: bool,
    status: Mutex<ApiStatus>,
}

impl TerminalView {
    pub fn new(out: Output, color: bool) -> Self {
        Self {
            out,
            color,
            status: Mutex::new(ApiStatus::Unknown),
        }
    }

    /// Last status shown
    pub fn status(&self) -> ApiStatus {
        self.status.lock().map(|s| *s).unwrap_or_default()
    }

    fn status_text(&self, status: ApiStatus) -> String {
        let label = format!("● {}", status.label());
        if !self.color {
            return label;
        }

        match status {
            ApiStatus::Online => label.green().to_string(),
            ApiStatus::Offline => label.red().to_string(),
            ApiStatus::Unknown => label.dimmed().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// `"21.50"` → `"21.50 °C"`; the placeholder stays bare
fn with_unit(value: &str) -> String {
    if value == format::PLACEHOLDER {
        value.to_string()
    } else {
        format!("{} {}", value, format::UNIT)
    }
}

impl DashboardView for TerminalView {
    fn show_current(&self, temperature: &str, updated: &str) {
        self.out.line(&format!(
            "{} {}  ({})",
            self.heading("Current:"),
            with_unit(temperature),
            updated
        ));
    }

    fn set_status(&self, status: ApiStatus) {
        let changed = match self.status.lock() {
            Ok(mut last) => std::mem::replace(&mut *last, status) != status,
            Err(_) => true,
        };

        // Only transitions are printed; every poll sets the status
        if changed {
            self.out.line(&format!("API status: {}", self.status_text(status)));
        }
    }

    fn alert(&self, message: &str) {
        let text = format!("! {}", message);
        if self.color {
            self.out.line(&text.yellow().to_string());
        } else {
            self.out.line(&text);
        }
    }

    fn show_window(&self, inputs: &WindowInputs) {
        self.out
            .line(&format!("Window: {} → {}", inputs.start, inputs.end));
    }

    fn show_summary(&self, panel: &SummaryPanel) {
        self.out.line(&format!(
            "{} avg {}  max {}  min {}  count {}",
            self.heading("Statistics:"),
            with_unit(&panel.average),
            with_unit(&panel.max),
            with_unit(&panel.min),
            panel.count
        ));
    }

    fn show_table(&self, rows: &[TableRow]) {
        self.out.line(&self.heading("History:"));
        for row in rows {
            match row {
                TableRow::Reading { time, temperature } => {
                    self.out.line(&format!("  {:<22} {:>10}", time, temperature))
                }
                TableRow::Placeholder { message } => self.out.line(&format!("  {}", message)),
            }
        }
    }
}
