//! Injectable randomness used by generation, placement, and wounded-Otyugh encounters.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub trait Randomness {
    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;

    fn coin_flip(&mut self) -> bool;
}

impl<R: Randomness + ?Sized> Randomness for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Seeded ChaCha stream; the same seed always yields the same dungeon.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Randomness for SeededRandom {
    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.rng.next_u64() % bound as u64) as usize
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.next_u64() & 1 == 1
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Randomness, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Draws `count` distinct elements (in draw order) without replacement.
pub(crate) fn sample<T: Copy>(rng: &mut impl Randomness, pool: &[T], count: usize) -> Vec<T> {
    let mut pool = pool.to_vec();
    let count = count.min(pool.len());
    for i in 0..count {
        let j = i + rng.below(pool.len() - i);
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn below_stays_inside_bound() {
        let mut rng = SeededRandom::new(12_345);
        for bound in 1..50 {
            assert!(rng.below(bound) < bound);
        }
    }

    #[test]
    fn same_seed_replays_same_stream() {
        let mut left = SeededRandom::new(7);
        let mut right = SeededRandom::new(7);
        for _ in 0..32 {
            assert_eq!(left.below(1_000), right.below(1_000));
            assert_eq!(left.coin_flip(), right.coin_flip());
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SeededRandom::new(99);
        let mut items: Vec<u32> = (0..40).collect();
        shuffle(&mut rng, &mut items);
        let seen: BTreeSet<u32> = items.iter().copied().collect();
        assert_eq!(seen.len(), 40);
        assert_ne!(items, (0..40).collect::<Vec<_>>(), "40 items should not stay sorted");
    }

    #[test]
    fn sample_draws_distinct_elements_and_clamps_to_pool() {
        let mut rng = SeededRandom::new(3);
        let picked = sample(&mut rng, &[10, 20, 30, 40, 50], 3);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked.iter().collect::<BTreeSet<_>>().len(), 3);

        let everything = sample(&mut rng, &[1, 2], 10);
        assert_eq!(everything.len(), 2);
    }

    #[test]
    fn coin_flip_is_roughly_fair() {
        let mut rng = SeededRandom::new(2024);
        let heads = (0..2_000).filter(|_| rng.coin_flip()).count();
        assert!((800..1_200).contains(&heads), "heads={heads}");
    }
}
