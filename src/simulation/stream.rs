//! Live data stream samples

use rand::{Rng, RngCore};
use serde::Serialize;

use super::{RollingWindow, Simulator, TickOutcome};

/// Uniform samples in [0, 100), keeping the newest `capacity`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataStream {
    window: RollingWindow<f64>,
}

impl DataStream {
    pub fn new(capacity: usize) -> Self {
        Self {
            window: RollingWindow::new(capacity),
        }
    }

    pub fn window(&self) -> &RollingWindow<f64> {
        &self.window
    }

    pub fn samples(&self) -> Vec<f64> {
        self.window.to_vec()
    }
}

impl Simulator for DataStream {
    fn tick(&mut self, rng: &mut dyn RngCore) -> TickOutcome {
        self.window.push(rng.gen_range(0.0..100.0));
        TickOutcome::Continue
    }
}
