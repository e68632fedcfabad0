//! Configuration for an interactive mapping session.

/// Settings a session starts from.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// RNG seed. `None` draws one from the operating system.
    pub seed: Option<u64>,
    /// Starting stress level.
    pub stress: i32,
}

impl SimConfig {
    /// Seed the RNG for reproducible panic rolls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start at a given stress level.
    pub fn with_stress(mut self, stress: i32) -> Self {
        self.stress = stress;
        self
    }
}
