/*!

Random number plumbing for the engine. A `Population` owns exactly one `SimRng` and passes it by
`&mut` into everything that consumes randomness, so the order of draws is decided by call order
alone and a run is reproducible from its seed.

The sampling primitives are provided as an extension trait over any `rand::Rng`:

 - `sample_chance()`: one uniform variate in `[0, 1)`
 - `sample_index(len)`: one uniform index in `0..len`
 - `sample_with_replacement(candidates, count)`: `count` independent uniform picks

*/

use crate::log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// The generator type owned by a `Population`.
pub type SimRng = StdRng;

/// Creates a generator whose stream is fully determined by `seed`.
#[must_use]
pub fn rng_from_seed(seed: u64) -> SimRng {
    trace!("seeding random number generator with {seed}");
    SimRng::seed_from_u64(seed)
}

pub trait RandomExt: Rng {
    /// Draws one uniform variate in `[0, 1)`.
    fn sample_chance(&mut self) -> f64 {
        self.random::<f64>()
    }

    /// Draws one uniform index in `0..len`. Panics if `len == 0`.
    fn sample_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    /// Draws `count` independent uniform picks from `candidates`. The same candidate may be drawn
    /// more than once. If `candidates` is empty or `count` is zero, returns an empty vector
    /// without consuming any random state.
    fn sample_with_replacement<T: Copy>(&mut self, candidates: &[T], count: usize) -> Vec<T> {
        if candidates.is_empty() || count == 0 {
            return Vec::new();
        }
        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            selected.push(candidates[self.sample_index(candidates.len())]);
        }
        selected
    }
}

impl<R: Rng + ?Sized> RandomExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn get_rng_basic() {
        let mut rng = rng_from_seed(42);
        assert_ne!(rng.next_u64(), rng.next_u64());
    }

    #[test]
    fn reset_seed() {
        let mut rng = rng_from_seed(42);
        let run_0 = rng.next_u64();
        let run_1 = rng.next_u64();

        // Reseed with the same seed, ensure we get the same values
        let mut rng = rng_from_seed(42);
        assert_eq!(run_0, rng.next_u64());
        assert_eq!(run_1, rng.next_u64());

        // Reseed with a different seed, ensure we get different values
        let mut rng = rng_from_seed(88);
        assert_ne!(run_0, rng.next_u64());
        assert_ne!(run_1, rng.next_u64());
    }

    #[test]
    fn sample_chance_in_unit_interval() {
        let mut rng = rng_from_seed(7);
        for _ in 0..1000 {
            let chance = rng.sample_chance();
            assert!((0.0..1.0).contains(&chance));
        }
    }

    #[test]
    fn sample_index_in_range() {
        let mut rng = rng_from_seed(42);
        for _ in 0..100 {
            assert!(rng.sample_index(10) < 10);
        }
    }

    #[test]
    fn sample_with_replacement_draws_count_items() {
        let mut rng = rng_from_seed(42);
        let candidates = [3usize, 5, 8];
        let sample = rng.sample_with_replacement(&candidates, 50);
        assert_eq!(sample.len(), 50);
        assert!(sample.iter().all(|item| candidates.contains(item)));
    }

    #[test]
    fn sample_with_replacement_repeats_single_candidate() {
        let mut rng = rng_from_seed(42);
        assert_eq!(rng.sample_with_replacement(&[9u8], 3), vec![9, 9, 9]);
    }

    #[test]
    fn degenerate_samples_do_not_consume_rng() {
        let mut rng = rng_from_seed(42);
        let mut reference = rng_from_seed(42);

        let empty: [usize; 0] = [];
        assert!(rng.sample_with_replacement(&empty, 4).is_empty());
        assert!(rng.sample_with_replacement(&[1usize, 2], 0).is_empty());

        assert_eq!(rng.next_u64(), reference.next_u64());
    }

    #[test]
    fn sampling_is_roughly_uniform() {
        let mut rng = rng_from_seed(42);
        let sample = rng.sample_with_replacement(&[0usize, 1], 3000);
        let zero_counter = sample.iter().filter(|&&item| item == 0).count() as i64;
        assert!((zero_counter - 1500).abs() < 100);
    }
}
