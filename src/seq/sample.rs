//! Random sampling without replacement
//!
//! The randomness comes from a [`RandomSource`], so tests can swap in a
//! seeded or scripted source. The default source is a `StdRng` seeded from
//! the operating system.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::iter::FusedIterator;

/// Source of uniform index choices
pub trait RandomSource {
    /// Pick an index in `0..len`; `len` is never zero
    fn pick_index(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// A fresh generator seeded from the operating system's CSPRNG
pub fn system_random() -> StdRng {
    StdRng::from_os_rng()
}

/// Iterator yielding every element of a private copy once, in random order
#[derive(Debug, Clone)]
pub struct RandomSample<T, R> {
    pool: Vec<T>,
    source: R,
}

impl<T, R: RandomSource> Iterator for RandomSample<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.pool.is_empty() {
            return None;
        }
        let len = self.pool.len();
        // Out-of-range picks from custom sources wrap instead of panicking
        let index = self.source.pick_index(len) % len;
        Some(self.pool.swap_remove(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pool.len(), Some(self.pool.len()))
    }
}

impl<T, R: RandomSource> ExactSizeIterator for RandomSample<T, R> {}

impl<T, R: RandomSource> FusedIterator for RandomSample<T, R> {}

/// Yield every element of `seq` exactly once in a uniformly random order
///
/// `seq` is copied first and never modified. Every call seeds a new
/// generator, so orders are independent between calls.
pub fn random_sample_without_replacement<T: Clone>(seq: &[T]) -> RandomSample<T, StdRng> {
    random_sample_with(seq, system_random())
}

/// Like [`random_sample_without_replacement`] with an explicit source
pub fn random_sample_with<T: Clone, R: RandomSource>(seq: &[T], source: R) -> RandomSample<T, R> {
    RandomSample {
        pool: seq.to_vec(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the first remaining slot
    struct FirstSlot;

    impl RandomSource for FirstSlot {
        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_sample_is_permutation() {
        let input = vec![1, 2, 3];
        let mut sample: Vec<_> = random_sample_without_replacement(&input).collect();
        assert_eq!(sample.len(), 3);
        sample.sort_unstable();
        assert_eq!(sample, vec![1, 2, 3]);
        assert_eq!(input, vec![1, 2, 3]);
    }

    #[test]
    fn test_sample_empty() {
        assert_eq!(random_sample_without_replacement::<u8>(&[]).count(), 0);
    }

    #[test]
    fn test_scripted_source() {
        // swap_remove(0) moves the last element to the front each time
        let order: Vec<_> = random_sample_with(&['a', 'b', 'c', 'd'], FirstSlot).collect();
        assert_eq!(order, vec!['a', 'd', 'c', 'b']);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let input: Vec<u32> = (0..20).collect();
        let first: Vec<_> = random_sample_with(&input, StdRng::seed_from_u64(7)).collect();
        let second: Vec<_> = random_sample_with(&input, StdRng::seed_from_u64(7)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exact_size() {
        let mut sample = random_sample_without_replacement(&[1, 2, 3]);
        assert_eq!(sample.len(), 3);
        sample.next();
        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn test_borrowed_source() {
        let mut rng = StdRng::seed_from_u64(1);
        let sample: Vec<_> = random_sample_with(&[1, 2], &mut rng).collect();
        assert_eq!(sample.len(), 2);
    }
}
