//! Display seam for the dashboard controller

use crate::render::{SummaryPanel, TableRow};
use crate::window::WindowInputs;

/// Connection indicator next to the current temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    /// No poll has completed yet
    #[default]
    Unknown,
    Online,
    Offline,
}

impl ApiStatus {
    /// CSS classes of the status dot
    pub fn css_class(&self) -> &'static str {
        match self {
            ApiStatus::Unknown => "status-dot",
            ApiStatus::Online => "status-dot online",
            ApiStatus::Offline => "status-dot offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Unknown => "Connecting",
            ApiStatus::Online => "Online",
            ApiStatus::Offline => "Offline",
        }
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the dashboard writes what it shows.
///
/// The chart goes through a [`crate::render::ChartSurface`] instead, since
/// it has a lifetime of its own.
pub trait DashboardView: Send + Sync {
    /// Current temperature (already formatted) and its "updated" line
    fn show_current(&self, temperature: &str, updated: &str);

    fn set_status(&self, status: ApiStatus);

    /// Blocking user-facing message
    fn alert(&self, message: &str);

    /// Contents of the two window inputs after a preset or reset
    fn show_window(&self, inputs: &WindowInputs);

    fn show_summary(&self, panel: &SummaryPanel);

    fn show_table(&self, rows: &[TableRow]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(ApiStatus::Online.css_class(), "status-dot online");
        assert_eq!(ApiStatus::Offline.css_class(), "status-dot offline");
        assert_eq!(ApiStatus::default(), ApiStatus::Unknown);
        assert_eq!(ApiStatus::Offline.to_string(), "Offline");
    }
}
