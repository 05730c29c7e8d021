//! Hardware-entropy generator.

use zeroize::Zeroize;

use super::primes::PRIMES;
use super::{RandomSource, finalize, hw};

/// Default random source.
///
/// Each draw XORs a fresh timer reading into the state, rotates it and
/// multiplies by a prime picked from the mixed value, then runs the SplitMix64
/// finalizer over the result. The state is wiped when the generator drops.
pub struct Rand {
    state: u64,
}

impl Rand {
    #[inline]
    pub fn new() -> Self {
        Rand {
            state: hw::entropy(),
        }
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Rand {
    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into prime selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;
        finalize(self.state)
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_draws_differ() {
        let mut rng = Rand::new();
        let draws: Vec<u64> = (0..64).map(|_| rng.next_u64()).collect();
        let mut unique = draws.clone();
        unique.sort_unstable();
        unique.dedup();
        assert!(unique.len() > 60);
    }

    #[test]
    fn bounded_draws_cover_small_range() {
        let mut rng = Rand::new();
        let mut seen = [false; 10];
        for _ in 0..2000 {
            seen[rng.below(10)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
