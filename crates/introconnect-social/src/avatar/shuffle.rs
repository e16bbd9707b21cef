use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reorders a slice in place. Implementations decide where randomness
/// comes from so tests can pin the order.
pub trait Shuffle {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Unbiased in-place Fisher–Yates shuffle.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot in `[0, i]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// [`Shuffle`] driven by a random number generator.
#[derive(Debug, Clone)]
pub struct RandomShuffle<R> {
    rng: R,
}

impl<R: Rng> RandomShuffle<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomShuffle<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffle for RandomShuffle<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        fisher_yates(items, &mut self.rng);
    }
}

/// Leaves items as they are.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct InOrder;

#[cfg(test)]
impl Shuffle for InOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
