//! Sensor API access

pub mod client;

pub use client::{fetch_current, fetch_statistics};
