//! Uniform piece sampling
//!
//! Every draw is an independent uniform pick over the seven kinds - this
//! ruleset deliberately has no bag randomizer, so droughts and repeats are
//! possible. Seeded construction keeps whole games reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use tetrohash_types::PieceKind;

#[derive(Debug, Clone)]
pub struct PieceSampler {
    rng: SmallRng,
    seed: u64,
}

impl PieceSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one kind, uniform over the seven
    pub fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Uniform roll in `lo..=hi`
    pub fn roll(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }
}
