use zeroize::Zeroize;

use super::{RandomSource, finalize};

const GOLDEN_GAMMA: u64 = 0x9e3779b97f4a7c15;

/// Seeded SplitMix64 generator. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct SplitMix {
    state: u64,
}

impl SplitMix {
    pub fn new(seed: u64) -> Self {
        SplitMix { state: seed }
    }
}

impl RandomSource for SplitMix {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        finalize(self.state)
    }
}

impl Drop for SplitMix {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
