//! History table
//!
//! Shows the most recent readings only; older ones are dropped without
//! notice. This is a display cap, not pagination.

use super::format;
use crate::model::Reading;

/// Maximum number of readings shown in the table
pub const MAX_TABLE_ROWS: usize = 50;

/// Text of the placeholder row for an empty result
pub const NO_DATA: &str = "No data";

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Reading { time: String, temperature: String },
    /// Spans both columns
    Placeholder { message: &'static str },
}

impl TableRow {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TableRow::Placeholder { .. })
    }
}

/// The last [`MAX_TABLE_ROWS`] readings, in their original order
pub fn recent(readings: &[Reading]) -> &[Reading] {
    let skip = readings.len().saturating_sub(MAX_TABLE_ROWS);
    &readings[skip..]
}

/// Render the table body
pub fn render_table(readings: &[Reading]) -> Vec<TableRow> {
    let shown = recent(readings);

    if shown.is_empty() {
        return vec![TableRow::Placeholder { message: NO_DATA }];
    }

    shown
        .iter()
        .map(|reading| TableRow::Reading {
            time: format::date_time(reading),
            temperature: format::temperature_with_unit(reading.temperature),
        })
        .collect()
}
