//! Non-destructive Fisher-Yates shuffling with an injectable RNG.

use rand::seq::SliceRandom;
use rand::Rng;

/// Return a uniformly shuffled copy of `items`, leaving the input
/// untouched. Pass a seeded RNG for deterministic ordering in tests.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Shuffle with the thread-local RNG; each call yields an independent
/// permutation.
pub fn shuffled_default<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled(items, &mut rand::thread_rng())
}
