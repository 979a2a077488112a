//! Sensor API client
//!
//! - [`SensorApi`]: the seam the dashboard fetches through
//! - [`endpoints`]: URL construction (shared with the browser frontend)
//! - `http`: reqwest implementation (`native` feature)

pub mod endpoints;
pub mod error;
#[cfg(feature = "native")]
pub mod http;

pub use endpoints::{current_url, stats_url, API_BASE};
pub use error::ClientError;
#[cfg(feature = "native")]
pub use http::{ClientConfig, HttpSensorApi};

use async_trait::async_trait;

use crate::model::{Reading, Statistics};
use crate::window::TimeWindow;

/// Source of sensor readings
#[async_trait]
pub trait SensorApi: Send + Sync {
    /// Latest reading (`GET /api/current`)
    async fn current(&self) -> Result<Reading, ClientError>;

    /// Readings and summary for a window (`GET /api/stats`)
    async fn stats(&self, window: &TimeWindow) -> Result<Statistics, ClientError>;
}
