//! Mock-Data Simulators
//!
//! Each simulator owns a small piece of view state and advances it one step
//! per timer tick: either nudging a value with bounded random jitter, or
//! appending a fresh sample to a capped rolling window.
//!
//! Simulators never schedule themselves. A runtime (the tokio timer groups in
//! [`crate::runtime`], or `gloo` intervals in the browser) calls
//! [`Simulator::tick`] on a fixed period and stops when the owning view goes
//! away or the simulator reports [`TickOutcome::Done`].

mod counters;
mod live_log;
mod nodes;
mod resources;
mod stream;
mod window;

pub use counters::{PredictionCounter, TrainingProgress, Uptime};
pub use live_log::LiveLog;
pub use nodes::NodeActivity;
pub use resources::{Jitter, Resource, ResourceMonitor, SystemResources};
pub use stream::DataStream;
pub use window::RollingWindow;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Whether a simulator wants further ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Done,
}

/// A piece of view state advanced by a repeating timer
pub trait Simulator {
    /// Advance one step
    fn tick(&mut self, rng: &mut dyn RngCore) -> TickOutcome;
}

/// Timer periods and window capacities for every simulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    #[serde(default = "default_node_activity_ms")]
    pub node_activity_ms: u64,

    #[serde(default = "default_data_stream_ms")]
    pub data_stream_ms: u64,

    #[serde(default = "default_training_ms")]
    pub training_ms: u64,

    #[serde(default = "default_prediction_ms")]
    pub prediction_ms: u64,

    #[serde(default = "default_resources_ms")]
    pub resources_ms: u64,

    #[serde(default = "default_live_log_ms")]
    pub live_log_ms: u64,

    #[serde(default = "default_stream_capacity")]
    pub stream_capacity: usize,

    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,

    /// Fixed RNG seed for reproducible runs; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_node_activity_ms() -> u64 {
    800
}

fn default_data_stream_ms() -> u64 {
    200
}

fn default_training_ms() -> u64 {
    2000
}

fn default_prediction_ms() -> u64 {
    100
}

fn default_resources_ms() -> u64 {
    2000
}

fn default_live_log_ms() -> u64 {
    1500
}

fn default_stream_capacity() -> usize {
    20
}

fn default_log_capacity() -> usize {
    50
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            node_activity_ms: default_node_activity_ms(),
            data_stream_ms: default_data_stream_ms(),
            training_ms: default_training_ms(),
            prediction_ms: default_prediction_ms(),
            resources_ms: default_resources_ms(),
            live_log_ms: default_live_log_ms(),
            stream_capacity: default_stream_capacity(),
            log_capacity: default_log_capacity(),
            seed: None,
        }
    }
}

impl SimulationSettings {
    pub fn node_activity_period(&self) -> Duration {
        period(self.node_activity_ms)
    }

    pub fn data_stream_period(&self) -> Duration {
        period(self.data_stream_ms)
    }

    pub fn training_period(&self) -> Duration {
        period(self.training_ms)
    }

    pub fn prediction_period(&self) -> Duration {
        period(self.prediction_ms)
    }

    pub fn resources_period(&self) -> Duration {
        period(self.resources_ms)
    }

    pub fn live_log_period(&self) -> Duration {
        period(self.live_log_ms)
    }
}

/// Timer periods below one millisecond would spin; round them up
fn period(ms: u64) -> Duration {
    Duration::from_millis(ms.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_periods() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.node_activity_period(), Duration::from_millis(800));
        assert_eq!(settings.data_stream_period(), Duration::from_millis(200));
        assert_eq!(settings.training_period(), Duration::from_secs(2));
        assert_eq!(settings.prediction_period(), Duration::from_millis(100));
        assert_eq!(settings.resources_period(), Duration::from_secs(2));
        assert_eq!(settings.live_log_period(), Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_period_rounds_up() {
        let settings = SimulationSettings {
            prediction_ms: 0,
            ..Default::default()
        };
        assert_eq!(settings.prediction_period(), Duration::from_millis(1));
    }
}
