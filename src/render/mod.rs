//! Rendering operations
//!
//! Pure functions from fetched data to what the dashboard shows:
//!
//! - **summary**: average / max / min / count cards
//! - **chart**: line chart configuration and the chart surface contract
//! - **table**: history table capped to the most recent readings
//! - **format**: number and date formatting shared by all of the above

pub mod chart;
pub mod format;
pub mod summary;
pub mod table;

pub use chart::{
    point_radius_for, render_chart, ChartConfig, ChartHandle, ChartSurface, POINT_MARKER_LIMIT,
};
pub use summary::{render_summary, SummaryPanel};
pub use table::{render_table, TableRow, MAX_TABLE_ROWS, NO_DATA};
