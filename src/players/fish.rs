use super::Player;
use crate::gameplay::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Uniform random player. Nothing to exploit.
pub struct Fish(SmallRng);

impl Fish {
    pub fn new() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
    /// Reproducible sequence of throws.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for Fish {
    fn play(&mut self) -> anyhow::Result<Move> {
        Ok(Move::from(self.0.random_range(0..3u8)))
    }
    fn name(&self) -> String {
        String::from("Fish")
    }
}
