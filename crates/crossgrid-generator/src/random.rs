//! Randomness used by the placement engine.

use rand::Rng;

/// A source of uniform random choices.
///
/// Every random decision the generator makes goes through this trait, so a
/// test can drive generation with a fixed sequence. Any [`rand::Rng`] is a
/// `RandomSource`.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..bound`.
    ///
    /// `bound` is never zero when called by the generator.
    fn index(&mut self, bound: usize) -> usize;

    /// Returns `true` or `false` with equal probability.
    fn flip(&mut self) -> bool;
}

impl<R> RandomSource for R
where
    R: Rng + ?Sized,
{
    fn index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    fn flip(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// Shuffles `items` in place with the Fisher-Yates algorithm.
///
/// Draws exactly `items.len() - 1` indices (none for fewer than two items),
/// from the back of the slice towards the front.
pub fn shuffle<T, R>(source: &mut R, items: &mut [T])
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = source.index(i + 1);
        items.swap(i, j);
    }
}


#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::{testing::ScriptedSource, *};

    #[test]
    fn test_shuffle_draws_from_back() {
        let mut items = ['a', 'b', 'c', 'd'];
        // i = 3 swaps with 0, i = 2 with 2, i = 1 with 0.
        let mut source = ScriptedSource::new([0, 2, 0]);
        shuffle(&mut source, &mut items);
        assert_eq!(items, ['b', 'd', 'c', 'a']);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_shuffle_short_slices_draw_nothing() {
        let mut source = ScriptedSource::new([7]);
        let mut one = [1];
        shuffle(&mut source, &mut one);
        let mut none: [u8; 0] = [];
        shuffle(&mut source, &mut none);
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_rng_index_stays_in_bounds() {
        let mut rng = Pcg64::seed_from_u64(7);
        for bound in 1..50 {
            assert!(rng.index(bound) < bound);
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = Pcg64::seed_from_u64(42);
        let mut items: Vec<u32> = (0..30).collect();
        shuffle(&mut rng, &mut items);
        items.sort_unstable();
        assert_eq!(items, (0..30).collect::<Vec<_>>());
    }
}
