use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomness used by ball serves and AI aim error.
///
/// Injected explicitly so tests can seed it and assert exact trajectories.
#[derive(Debug)]
pub struct GameRng(StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Uniform in [0, 1).
    pub fn unit(&mut self) -> f32 {
        self.0.random()
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.0.random_bool(0.5)
    }
}
