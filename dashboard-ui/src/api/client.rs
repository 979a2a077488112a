//! HTTP API Client
//!
//! Functions for communicating with the sensor API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use thermo_dashboard::client::{current_url, stats_url, API_BASE};
use thermo_dashboard::model::{CurrentResponse, Reading, Statistics, StatsResponse};
use thermo_dashboard::window::TimeWindow;

/// Fetch the latest reading
pub async fn fetch_current() -> Result<Reading, String> {
    let response: CurrentResponse = get_json(&current_url(API_BASE)).await?;
    response.into_reading()
}

/// Fetch readings and summary for a window
pub async fn fetch_statistics(window: &TimeWindow) -> Result<Statistics, String> {
    let response: StatsResponse = get_json(&stats_url(API_BASE, window)).await?;
    response.into_statistics()
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    check_status(&response)?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

fn check_status(response: &Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {} {}", response.status(), response.status_text()))
    }
}
