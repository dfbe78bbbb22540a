//! Seeded randomness: the draw primitives selection consumes.
//!
//! Selection code never touches a concrete generator. It draws through
//! [`SeedStream`], and any `rand_core::RngCore` implementor satisfies it
//! via the blanket impl; the crate default is `bevy_prng::WyRand`. Tests
//! inject hand-written streams to pin exact draw sequences.

use rand_core::RngCore;

/// Draw interface for one generation pass.
///
/// Two streams built from the same seed must answer identical call
/// sequences with identical values. A stream is owned by exactly one
/// generation call for its whole duration; sharing one across concurrent
/// calls would interleave draws and break determinism.
pub trait SeedStream {
    /// Uniform double in `[0, 1)`.
    fn uniform_double(&mut self) -> f64;

    /// Uniform integer in `[lo, hi)`.
    fn uniform_int(&mut self, lo: usize, hi: usize) -> usize;

    /// Remove and return a uniformly random element.
    fn take_random<T>(&mut self, items: &mut Vec<T>) -> T
    where
        Self: Sized,
    {
        let ix = self.uniform_int(0, items.len());
        items.remove(ix)
    }
}

impl<R: RngCore> SeedStream for R {
    fn uniform_double(&mut self) -> f64 {
        ((self.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
    }

    fn uniform_int(&mut self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo < hi);
        lo + (self.uniform_double() * (hi - lo) as f64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_prng::WyRand;
    use rand_core::SeedableRng;

    #[test]
    fn doubles_stay_in_unit_interval() {
        let mut rng = WyRand::from_seed(99u64.to_le_bytes());
        for _ in 0..1000 {
            let x = rng.uniform_double();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn ints_respect_the_half_open_range() {
        let mut rng = WyRand::from_seed(7u64.to_le_bytes());
        for _ in 0..1000 {
            let x = rng.uniform_int(3, 9);
            assert!((3..9).contains(&x));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = WyRand::from_seed(1234u64.to_le_bytes());
        let mut b = WyRand::from_seed(1234u64.to_le_bytes());
        for _ in 0..100 {
            assert_eq!(a.uniform_double().to_bits(), b.uniform_double().to_bits());
        }
    }

    #[test]
    fn take_random_drains_without_redraws() {
        let mut rng = WyRand::from_seed(42u64.to_le_bytes());
        let mut pool: Vec<u32> = (0..10).collect();
        let mut drawn = Vec::new();
        while !pool.is_empty() {
            drawn.push(rng.take_random(&mut pool));
        }
        drawn.sort_unstable();
        assert_eq!(drawn, (0..10).collect::<Vec<u32>>());
    }
}
