//! Dashboard client
//!
//! - **view**: the display seam and the API status indicator
//! - **nav**: sidebar navigation state
//! - **clock**: "now" for window presets
//! - **controller**: fetch / render orchestration (`native`)
//! - **poller**: the two repeating poll tasks (`native`)
//!
//! # Lifecycle
//!
//! ```text
//! start:  default window → fetch current → fetch statistics → arm pollers
//! every 5s:   fetch current     → value, "updated" line, online/offline
//! every 30s:  fetch statistics  → summary, chart, table (inputs read at tick time)
//! presets:    write window into inputs → fetch statistics
//! ```

use std::time::Duration;

/// Period of the current-reading poll
pub const CURRENT_REFRESH: Duration = Duration::from_secs(5);

/// Period of the statistics poll
pub const STATS_REFRESH: Duration = Duration::from_secs(30);

pub mod clock;
pub mod nav;
pub mod view;

#[cfg(feature = "native")]
pub mod controller;
#[cfg(feature = "native")]
pub mod poller;

pub use clock::{Clock, FixedClock, SystemClock};
pub use nav::{Navigation, ScrollTarget, Section, SECTIONS};
pub use view::{ApiStatus, DashboardView};

#[cfg(feature = "native")]
pub use controller::{Dashboard, DashboardError, DashboardResult};
#[cfg(feature = "native")]
pub use poller::{PollSchedule, PollTask, PollTasks};
