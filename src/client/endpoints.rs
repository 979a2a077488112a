//! Sensor API endpoints
//!
//! URL construction is shared by the native client and the browser frontend.

use crate::window::TimeWindow;

/// Base URL of the sensor API
pub const API_BASE: &str = "http://localhost:8080";

/// `GET {base}/api/current`
pub fn current_url(base: &str) -> String {
    format!("{}/api/current", normalize_base(base))
}

/// `GET {base}/api/stats?start=..&end=..` with both bounds percent-encoded
pub fn stats_url(base: &str, window: &TimeWindow) -> String {
    let (start, end) = window.query_bounds();
    format!(
        "{}/api/stats?start={}&end={}",
        normalize_base(base),
        urlencoding::encode(&start),
        urlencoding::encode(&end)
    )
}

fn normalize_base(base: &str) -> &str {
    base.trim_end_matches('/')
}
