//! Neural network panel: node flicker, data stream, training and throughput

use serde::Serialize;

use crate::charts::{line_chart, network_layout, LineChart, NetworkLayout};
use crate::simulation::{
    DataStream, NodeActivity, PredictionCounter, SimulationSettings, TrainingProgress,
};

pub const NETWORK_LAYERS: usize = 5;
pub const NODES_PER_LAYER: usize = 8;
const STREAM_STEP: f64 = 20.0;
/// Trailing samples drawn as floating particles
const PARTICLE_COUNT: usize = 10;

/// View state of the neural panel; each field has its own timer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeuralState {
    pub nodes: NodeActivity,
    pub stream: DataStream,
    pub training: TrainingProgress,
    pub predictions: PredictionCounter,
}

impl NeuralState {
    pub fn new(settings: &SimulationSettings) -> Self {
        Self {
            nodes: NodeActivity::new(NODES_PER_LAYER, 0.5),
            stream: DataStream::new(settings.stream_capacity),
            training: TrainingProgress::default(),
            predictions: PredictionCounter::default(),
        }
    }

    pub fn network(&self) -> NetworkLayout {
        network_layout(NETWORK_LAYERS, NODES_PER_LAYER, self.nodes.active())
    }

    pub fn stream_chart(&self) -> LineChart {
        line_chart(&self.stream.samples(), STREAM_STEP)
    }

    /// Newest samples rendered as particles, oldest first
    pub fn particles(&self) -> Vec<f64> {
        self.stream
            .window()
            .recent(PARTICLE_COUNT)
            .copied()
            .collect()
    }
}

impl Default for NeuralState {
    fn default() -> Self {
        Self::new(&SimulationSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Simulator;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_fresh_state() {
        let state = NeuralState::default();
        assert_eq!(state.training.value(), 0);
        assert_eq!(state.predictions.value(), 0);
        assert!(state.stream_chart().points.is_empty());
        assert_eq!(state.network().nodes.len(), 40);
    }

    #[test]
    fn test_particles_follow_stream() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut state = NeuralState::default();
        for _ in 0..25 {
            state.stream.tick(&mut rng);
        }
        assert_eq!(state.stream_chart().points.len(), 20);
        let particles = state.particles();
        assert_eq!(particles.len(), 10);
        assert_eq!(particles.last(), state.stream.window().latest());
    }
}
