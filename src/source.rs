//! Mock Data Source
//!
//! Stand-in for a telemetry feed. It owns one immutable `DashboardData` and
//! hands out copies after a fixed simulated latency. It never fails.

use std::time::Duration;

use crate::model::DashboardData;

/// Simulated fetch latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq)]
pub struct MockDataSource {
    data: DashboardData,
    latency: Duration,
}

impl MockDataSource {
    pub fn new(data: DashboardData, latency: Duration) -> Self {
        Self { data, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// The record a fetch resolves to, without waiting
    pub fn snapshot(&self) -> DashboardData {
        self.data
    }

    /// Fetch current metrics after the simulated latency
    #[cfg(feature = "runtime")]
    pub async fn fetch(&self) -> DashboardData {
        tracing::debug!(latency_ms = self.latency.as_millis() as u64, "fetching city metrics");
        tokio::time::sleep(self.latency).await;
        self.data
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new(DashboardData::default(), DEFAULT_LATENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_the_injected_record() {
        let mut data = DashboardData::default();
        data.traffic.congestion = 12;
        let source = MockDataSource::new(data, Duration::ZERO);
        assert_eq!(source.snapshot().traffic.congestion, 12);
    }

    #[cfg(feature = "runtime")]
    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_latency() {
        let source = MockDataSource::default();
        let started = tokio::time::Instant::now();

        let data = source.fetch().await;

        assert_eq!(started.elapsed(), DEFAULT_LATENCY);
        assert_eq!(data, DashboardData::default());
    }
}
