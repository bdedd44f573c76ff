//! Neural node activity flicker

use rand::{Rng, RngCore};
use serde::Serialize;

use super::{Simulator, TickOutcome};

/// Each node is redrawn as active with probability `probability` every tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeActivity {
    active: Vec<bool>,
    probability: f64,
}

impl NodeActivity {
    pub fn new(nodes: usize, probability: f64) -> Self {
        Self {
            active: vec![false; nodes],
            probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn active(&self) -> &[bool] {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }
}

impl Default for NodeActivity {
    fn default() -> Self {
        Self::new(8, 0.5)
    }
}

impl Simulator for NodeActivity {
    fn tick(&mut self, rng: &mut dyn RngCore) -> TickOutcome {
        for node in self.active.iter_mut() {
            *node = rng.gen_bool(self.probability);
        }
        TickOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_extreme_probabilities() {
        let mut rng = SmallRng::seed_from_u64(1);

        let mut always = NodeActivity::new(8, 1.0);
        always.tick(&mut rng);
        assert_eq!(always.active_count(), 8);

        let mut never = NodeActivity::new(8, 0.0);
        never.tick(&mut rng);
        assert_eq!(never.active_count(), 0);
    }

    #[test]
    fn test_starts_idle() {
        let nodes = NodeActivity::default();
        assert_eq!(nodes.active().len(), 8);
        assert_eq!(nodes.active_count(), 0);
    }
}
