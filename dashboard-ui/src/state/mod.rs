//! State Management

pub mod dashboard;

pub use dashboard::{provide_dashboard_state, CurrentDisplay, DashboardState, Polling};
