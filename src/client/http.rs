//! Sensor API REST client
//!
//! HTTP client for the sensor's `/api/current` and `/api/stats` endpoints.
//! There is no retry here: the dashboard's poll tasks call again on their
//! next tick.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::endpoints::{current_url, stats_url, API_BASE};
use super::{ClientError, SensorApi};
use crate::model::{CurrentResponse, Reading, Statistics, StatsResponse};
use crate::window::TimeWindow;

/// Configuration for the sensor API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the sensor API
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            request_timeout_ms: 5000,
        }
    }
}

impl ClientConfig {
    /// Default base URL with a custom timeout
    pub fn with_timeout_ms(request_timeout_ms: u64) -> Self {
        Self {
            request_timeout_ms,
            ..Self::default()
        }
    }
}

/// reqwest-backed [`SensorApi`]
#[derive(Debug, Clone)]
pub struct HttpSensorApi {
    client: Client,
    config: ClientConfig,
}

impl HttpSensorApi {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send().await.map_err(classify)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let body = response.text().await.map_err(classify)?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SensorApi for HttpSensorApi {
    async fn current(&self) -> Result<Reading, ClientError> {
        let url = current_url(&self.config.base_url);
        let response: CurrentResponse = self.get_json(&url).await?;
        response.into_reading().map_err(ClientError::Malformed)
    }

    async fn stats(&self, window: &TimeWindow) -> Result<Statistics, ClientError> {
        let url = stats_url(&self.config.base_url, window);
        let response: StatsResponse = self.get_json(&url).await?;
        response.into_statistics().map_err(ClientError::Malformed)
    }
}

fn classify(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else if e.is_connect() {
        ClientError::Unavailable
    } else {
        ClientError::Request(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_ms, 5000);
    }

    #[test]
    fn test_with_timeout_keeps_fixed_base() {
        let config = ClientConfig::with_timeout_ms(250);
        assert_eq!(config.base_url, API_BASE);
        assert_eq!(config.request_timeout_ms, 250);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_an_error() {
        // Port 9 (discard) on localhost is not expected to run an HTTP server
        let api = HttpSensorApi::new(ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_ms: 500,
        })
        .unwrap();

        assert!(api.current().await.is_err());
    }
}
