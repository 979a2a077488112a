//! Sensor data model
//!
//! Readings and summaries exactly as the sensor API produces them. Nothing
//! here is persisted; every fetch replaces the previous values.

pub mod types;

pub use types::{
    parse_api_timestamp, CurrentResponse, Reading, StatSummary, Statistics, StatsResponse,
    API_TIMESTAMP_FORMAT,
};
