//! Randomness used for synthesized resume content.
//!
//! All draws go through [`RandomSource`] so callers can inject a seeded or
//! scripted source. Production code creates a fresh [`fastrand::Rng`] per
//! invocation; no generator state is shared between requests, and runs are
//! not reproducible unless a seed is supplied.

/// Source of uniform random integers.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

impl RandomSource for fastrand::Rng {
    fn index(&mut self, len: usize) -> usize {
        self.usize(0..len)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.u32(low..=high)
    }
}

/// Pick one element uniformly.
///
/// # Panics
///
/// Panics if `items` is empty. Every table this is called with is a
/// non-empty static, so an empty slice is a programming error.
pub fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[rng.index(items.len())]
}

/// Shuffle in place (Fisher-Yates).
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

/// Draw up to `count` elements without replacement, in random order.
pub fn sample<T: Clone>(rng: &mut dyn RandomSource, items: &[T], count: usize) -> Vec<T> {
    let mut pool = items.to_vec();
    shuffle(rng, &mut pool);
    pool.truncate(count.min(items.len()));
    pool
}

/// Create a generator, seeded when reproducible output is wanted.
pub fn source_from_seed(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}
