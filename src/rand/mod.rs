//! Injectable random sources.
//!
//! Generation code never reaches for a global generator; it takes any
//! [`RandomSource`]. [`Rand`] mixes hardware timer entropy for everyday use,
//! [`SplitMix`] is seeded and reproducible.

mod hw;
mod mixer;
mod primes;
mod splitmix;

pub use mixer::Rand;
pub use splitmix::SplitMix;

/// A source of uniformly distributed 64-bit words.
///
/// Only [`next_u64`](RandomSource::next_u64) is required; the bounded helpers
/// are derived from it without modulo bias.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform integer in `[0, bound)`. A `bound` of 0 or 1 yields 0.
    fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = bound as u64;
        // 2^64 mod bound: words under this value would over-represent the low residues
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let x = self.next_u64();
            if x >= threshold {
                return (x % bound) as usize;
            }
        }
    }

    /// Uniform integer in `[min, max)`. Returns `min` when the range is empty.
    fn range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        min + self.below(max - min)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Name of the entropy source backing [`Rand`] on this target.
pub fn entropy_source() -> &'static str {
    hw::source_name()
}

/// SplitMix64 output finalizer.
#[inline(always)]
pub(crate) fn finalize(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
