//! Summary panel (average / max / min / count)

use super::format;
use crate::model::StatSummary;

/// Text of the four summary cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPanel {
    pub average: String,
    pub max: String,
    pub min: String,
    pub count: String,
}

impl SummaryPanel {
    /// Placeholders in every card, shown before the first statistics fetch lands
    pub fn empty() -> Self {
        Self {
            average: format::PLACEHOLDER.to_string(),
            max: format::PLACEHOLDER.to_string(),
            min: format::PLACEHOLDER.to_string(),
            count: "0".to_string(),
        }
    }
}

impl Default for SummaryPanel {
    fn default() -> Self {
        Self::empty()
    }
}

/// Render a summary; absent aggregates become placeholders
pub fn render_summary(summary: &StatSummary) -> SummaryPanel {
    SummaryPanel {
        average: format::optional_temperature(summary.average),
        max: format::optional_temperature(summary.max),
        min: format::optional_temperature(summary.min),
        count: summary.count.to_string(),
    }
}
