//! Wire and domain types for the sensor API
//!
//! - `Reading`: one timestamped temperature sample
//! - `StatSummary`: server-computed aggregate over a window
//! - `Statistics`: readings plus summary for one window
//! - `CurrentResponse` / `StatsResponse`: raw response bodies, tolerant of missing fields

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the sensor API (local time, no offset)
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single temperature sample as produced by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    /// ISO-8601 timestamp string, local time implied
    pub timestamp: String,
    /// Temperature in °C
    pub temperature: f64,
}

impl Reading {
    /// Create a reading from a raw API timestamp
    pub fn new(timestamp: impl Into<String>, temperature: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            temperature,
        }
    }

    /// Create a reading stamped with a local date-time
    pub fn at(time: NaiveDateTime, temperature: f64) -> Self {
        Self::new(time.format(API_TIMESTAMP_FORMAT).to_string(), temperature)
    }

    /// Timestamp as local wall-clock time, if it parses
    pub fn local_time(&self) -> Option<NaiveDateTime> {
        parse_api_timestamp(&self.timestamp)
    }
}

/// Parse an API timestamp into local wall-clock time.
///
/// Accepts the API's offset-less layout (with optional fractional seconds),
/// a space-separated variant, and RFC 3339 strings, which are converted to
/// the local timezone.
pub fn parse_api_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// Aggregate statistics over a window
///
/// Fields are absent when the window holds no readings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatSummary {
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub count: u64,
}

impl StatSummary {
    /// Summary with only a count (what the API sends for an empty window)
    pub fn count_only(count: u64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

/// Readings and their summary for one window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub readings: Vec<Reading>,
    pub summary: StatSummary,
}

/// Body of `GET /api/current`
///
/// The sensor answers `{"error": "..."}` when it has nothing recorded yet,
/// so every field is optional here and validated by [`CurrentResponse::into_reading`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentResponse {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CurrentResponse {
    /// A reading if the body carries a temperature, otherwise the reason it does not
    pub fn into_reading(self) -> Result<Reading, String> {
        match self.temperature {
            Some(temperature) => Ok(Reading::new(
                self.timestamp.unwrap_or_default(),
                temperature,
            )),
            None => Err(self
                .error
                .unwrap_or_else(|| "response has no temperature field".to_string())),
        }
    }
}

/// Body of `GET /api/stats`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub data: Option<Vec<Reading>>,
    #[serde(default)]
    pub summary: Option<StatSummary>,
}

impl StatsResponse {
    /// Statistics if both `data` and `summary` are present
    pub fn into_statistics(self) -> Result<Statistics, String> {
        match (self.data, self.summary) {
            (Some(readings), Some(summary)) => Ok(Statistics { readings, summary }),
            (None, _) => Err("response has no data field".to_string()),
            (_, None) => Err("response has no summary field".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_api_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 30)
            .unwrap();

        assert_eq!(parse_api_timestamp("2024-03-09T07:05:30"), Some(expected));
        assert_eq!(parse_api_timestamp("2024-03-09 07:05:30"), Some(expected));
        assert!(parse_api_timestamp("2024-03-09T07:05:30.250").is_some());
        assert!(parse_api_timestamp("2024-03-09T07:05:30+00:00").is_some());
        assert_eq!(parse_api_timestamp("yesterday"), None);
    }

    #[test]
    fn test_reading_at_uses_api_layout() {
        let time = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let reading = Reading::at(time, 21.5);

        assert_eq!(reading.timestamp, "2024-01-02T03:04:05");
        assert_eq!(reading.local_time(), Some(time));
    }

    #[test]
    fn test_current_response_parsing() {
        let body = r#"{"timestamp":"2024-01-02T03:04:05","temperature":22.25}"#;
        let response: CurrentResponse = serde_json::from_str(body).unwrap();
        let reading = response.into_reading().unwrap();
        assert_eq!(reading.temperature, 22.25);

        let body = r#"{"error":"No data"}"#;
        let response: CurrentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_reading().unwrap_err(), "No data");
    }

    #[test]
    fn test_stats_response_parsing() {
        let body = r#"{"data":[],"summary":{"count":0}}"#;
        let response: StatsResponse = serde_json::from_str(body).unwrap();
        let stats = response.into_statistics().unwrap();
        assert!(stats.readings.is_empty());
        assert_eq!(stats.summary, StatSummary::count_only(0));

        let body = r#"{"summary":{"count":3}}"#;
        let response: StatsResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_statistics().is_err());
    }

    #[test]
    fn test_summary_with_all_fields() {
        let body = r#"{"count":3,"average":21.5,"min":20.0,"max":23.0}"#;
        let summary: StatSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average, Some(21.5));
        assert_eq!(summary.min, Some(20.0));
        assert_eq!(summary.max, Some(23.0));
    }
}
