//! Repeating poll tasks
//!
//! Each task waits one full period before its first tick (the dashboard
//! fetches once up front), then ticks forever at a fixed period. No backoff,
//! no pause. Stopping is explicit through [`PollTask::stop`].

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::{CURRENT_REFRESH, STATS_REFRESH};

/// Periods of the two dashboard poll tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub current: Duration,
    pub statistics: Duration,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            current: CURRENT_REFRESH,
            statistics: STATS_REFRESH,
        }
    }
}

/// A running repeating task
#[derive(Debug)]
pub struct PollTask {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl PollTask {
    /// Spawn a task calling `tick` every `period`, starting one period from now
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        tracing::debug!(task = name, period_ms = period.as_millis() as u64, "Starting poll task");

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                tracing::trace!(task = name, "Poll tick");
                tick().await;
            }
        });

        Self { name, handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the task; a tick in progress is dropped at its next await point
    pub fn stop(self) {
        tracing::debug!(task = self.name, "Stopping poll task");
        self.handle.abort();
    }
}

/// The dashboard's two poll tasks
#[derive(Debug)]
pub struct PollTasks {
    pub current: PollTask,
    pub statistics: PollTask,
}

impl PollTasks {
    pub fn stop(self) {
        self.current.stop();
        self.statistics.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_task(period: Duration) -> (PollTask, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let task = PollTask::spawn("test", period, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        (task, count)
    }

    #[test]
    fn test_default_schedule() {
        let schedule = PollSchedule::default();
        assert_eq!(schedule.current, Duration::from_secs(5));
        assert_eq!(schedule.statistics, Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_period() {
        let (task, count) = counting_task(Duration::from_secs(5));

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        task.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_fixed_period_until_stopped() {
        let (task, count) = counting_task(Duration::from_secs(5));
        assert!(task.is_running());

        tokio::time::sleep(Duration::from_millis(21_000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 4);

        task.stop();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }
}
