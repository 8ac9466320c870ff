//! The dice roller: the only source of randomness in the workspace.
//!
//! Seeded explicitly so whole games are reproducible; the rules core and
//! the advisor never see an RNG.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

pub struct Roller {
    rng: Box<ChaCha8Rng>,
}

impl Roller {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// One die value in 1..=6.
    pub fn roll_die(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }

    /// `n` die values in 1..=6.
    pub fn roll_dice(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.roll_die()).collect()
    }
}
