//! Generic sequence helpers
//!
//! Eager helpers return a new `Vec`; the grouping, flattening and sampling
//! helpers return fresh single-pass iterators.

pub mod flatten;
pub mod grouped;
pub mod sample;

use ahash::AHashSet;
use std::hash::Hash;

pub use flatten::{Flatten, Nested, flatten};
pub use grouped::{Grouped, Pairwise, grouped, pairwise};
pub use sample::{
    RandomSample, RandomSource, random_sample_with, random_sample_without_replacement,
    system_random,
};

/// Drop repeated values, keeping the first occurrence of each in order
///
/// ```
/// # use vital_tools::seq::unique;
/// assert_eq!(unique([3, 1, 2, 1, 3]), vec![3, 1, 2]);
/// ```
pub fn unique<I>(seq: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut seen = AHashSet::new();
    seq.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

/// Drop every `None`, keeping the remaining values in order
pub fn remove_empty<I, T>(seq: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    seq.into_iter().flatten().collect()
}
