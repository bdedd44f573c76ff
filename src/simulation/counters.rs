//! Monotonic counters: training progress, prediction throughput, uptime

use rand::RngCore;
use serde::Serialize;
use std::time::Duration;

use super::{Simulator, TickOutcome};

/// Model training percentage that climbs in fixed steps and parks below 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingProgress {
    value: u32,
    step: u32,
    ceiling: u32,
}

impl TrainingProgress {
    pub fn new(step: u32, ceiling: u32) -> Self {
        Self {
            value: 0,
            step,
            ceiling: ceiling.min(100),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.value >= self.ceiling
    }
}

impl Default for TrainingProgress {
    fn default() -> Self {
        Self::new(5, 95)
    }
}

impl Simulator for TrainingProgress {
    fn tick(&mut self, _rng: &mut dyn RngCore) -> TickOutcome {
        self.value = self.value.saturating_add(self.step).min(self.ceiling);
        if self.is_complete() {
            TickOutcome::Done
        } else {
            TickOutcome::Continue
        }
    }
}

/// Rolling prediction counter that wraps at `modulus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionCounter {
    value: u32,
    modulus: u32,
}

impl PredictionCounter {
    pub fn new(modulus: u32) -> Self {
        Self {
            value: 0,
            modulus: modulus.max(1),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Default for PredictionCounter {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl Simulator for PredictionCounter {
    fn tick(&mut self, _rng: &mut dyn RngCore) -> TickOutcome {
        self.value = (self.value + 1) % self.modulus;
        TickOutcome::Continue
    }
}

/// Wall-clock uptime advanced by the timer period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Uptime {
    elapsed: Duration,
    step: Duration,
}

impl Uptime {
    pub fn new(step: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            step,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// `"{hours}h {minutes}m"`
    pub fn display(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

impl Simulator for Uptime {
    fn tick(&mut self, _rng: &mut dyn RngCore) -> TickOutcome {
        self.elapsed = self.elapsed.saturating_add(self.step);
        TickOutcome::Continue
    }
}
