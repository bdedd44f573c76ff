//! Jittered system resource gauges

use rand::{Rng, RngCore};
use serde::Serialize;

use super::{Simulator, TickOutcome};
use crate::model::Icon;

/// Bounded random walk step: `value + (u - bias) * amplitude`, clamped.
///
/// `u` is uniform in [0, 1). A bias below 0.5 drifts the value upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Jitter {
    pub bias: f64,
    pub amplitude: f64,
    pub min: f64,
    pub max: f64,
}

impl Jitter {
    pub const fn new(bias: f64, amplitude: f64, min: f64, max: f64) -> Self {
        Self {
            bias,
            amplitude,
            min,
            max,
        }
    }

    /// Step `value` using the uniform sample `u`
    pub fn apply(&self, value: f64, u: f64) -> f64 {
        self.clamp(value + (u - self.bias) * self.amplitude)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Monitored resources, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Resource {
    Cpu,
    Memory,
    Storage,
    Network,
    Temperature,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Cpu,
        Resource::Memory,
        Resource::Storage,
        Resource::Network,
        Resource::Temperature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Resource::Cpu => "CPU Usage",
            Resource::Memory => "Memory",
            Resource::Storage => "Storage",
            Resource::Network => "Network",
            Resource::Temperature => "Temperature",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Resource::Temperature => "°C",
            _ => "%",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Resource::Cpu => Icon::Cpu,
            Resource::Memory => Icon::Database,
            Resource::Storage => Icon::HardDrive,
            Resource::Network => Icon::Wifi,
            Resource::Temperature => Icon::Gauge,
        }
    }

    pub fn jitter(&self) -> Jitter {
        match self {
            Resource::Cpu => Jitter::new(0.5, 10.0, 10.0, 100.0),
            Resource::Memory => Jitter::new(0.3, 5.0, 20.0, 100.0),
            Resource::Storage => Jitter::new(0.2, 2.0, 60.0, 95.0),
            Resource::Network => Jitter::new(0.4, 8.0, 50.0, 100.0),
            Resource::Temperature => Jitter::new(0.5, 3.0, 35.0, 80.0),
        }
    }
}

/// Current reading for every resource
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemResources {
    pub cpu: f64,
    pub memory: f64,
    pub storage: f64,
    pub network: f64,
    pub temperature: f64,
}

impl Default for SystemResources {
    fn default() -> Self {
        Self {
            cpu: 45.0,
            memory: 68.0,
            storage: 72.0,
            network: 85.0,
            temperature: 42.0,
        }
    }
}

impl SystemResources {
    pub fn get(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Cpu => self.cpu,
            Resource::Memory => self.memory,
            Resource::Storage => self.storage,
            Resource::Network => self.network,
            Resource::Temperature => self.temperature,
        }
    }

    fn slot(&mut self, resource: Resource) -> &mut f64 {
        match resource {
            Resource::Cpu => &mut self.cpu,
            Resource::Memory => &mut self.memory,
            Resource::Storage => &mut self.storage,
            Resource::Network => &mut self.network,
            Resource::Temperature => &mut self.temperature,
        }
    }
}

/// Random walk over all resources, each within its own bounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceMonitor {
    readings: SystemResources,
}

impl ResourceMonitor {
    /// Initial readings are clamped into their bounds.
    pub fn new(initial: SystemResources) -> Self {
        let mut readings = initial;
        for resource in Resource::ALL {
            let slot = readings.slot(resource);
            *slot = resource.jitter().clamp(*slot);
        }
        Self { readings }
    }

    pub fn readings(&self) -> &SystemResources {
        &self.readings
    }
}

impl Default for ResourceMonitor {
    fn default() -> Self {
        Self::new(SystemResources::default())
    }
}

impl Simulator for ResourceMonitor {
    fn tick(&mut self, rng: &mut dyn RngCore) -> TickOutcome {
        for resource in Resource::ALL {
            let u: f64 = rng.gen();
            let slot = self.readings.slot(resource);
            *slot = resource.jitter().apply(*slot, u);
        }
        TickOutcome::Continue
    }
}
