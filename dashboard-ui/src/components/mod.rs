//! UI Components
//!
//! Leptos components for the dashboard sections.

pub mod chart;
pub mod current;
pub mod filters;
pub mod history;
pub mod sidebar;
pub mod summary;

pub use chart::TemperatureChart;
pub use current::CurrentCard;
pub use filters::Filters;
pub use history::HistoryTable;
pub use sidebar::Sidebar;
pub use summary::SummaryCards;
