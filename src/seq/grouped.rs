//! Fixed-size chunking of sequences
//!
//! Both adapters drop a trailing group that would come up short.

use crate::error::{Result, ToolsError};
use std::iter::FusedIterator;

/// Iterator over consecutive, non-overlapping groups of `size` elements
#[derive(Debug, Clone)]
pub struct Grouped<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Iterator for Grouped<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let group: Vec<_> = self.iter.by_ref().take(self.size).collect();
        (group.len() == self.size).then_some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower / self.size, upper.map(|n| n / self.size))
    }
}

impl<I: FusedIterator> FusedIterator for Grouped<I> {}

/// Group `seq` into chunks of exactly `size` elements
///
/// ```
/// # use vital_tools::seq::grouped;
/// let groups: Vec<_> = grouped([0, 1, 2, 3, 4, 5], 3).unwrap().collect();
/// assert_eq!(groups, vec![vec![0, 1, 2], vec![3, 4, 5]]);
/// ```
///
/// # Errors
///
/// Returns [`ToolsError::InvalidGroupSize`] when `size` is zero.
pub fn grouped<I: IntoIterator>(seq: I, size: usize) -> Result<Grouped<I::IntoIter>> {
    if size < 1 {
        return Err(ToolsError::InvalidGroupSize(size));
    }
    Ok(Grouped {
        iter: seq.into_iter(),
        size,
    })
}

/// Iterator over consecutive, non-overlapping pairs
#[derive(Debug, Clone)]
pub struct Pairwise<I> {
    iter: I,
}

impl<I: Iterator> Iterator for Pairwise<I> {
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        let second = self.iter.next()?;
        Some((first, second))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower / 2, upper.map(|n| n / 2))
    }
}

impl<I: FusedIterator> FusedIterator for Pairwise<I> {}

/// Group `seq` into pairs: `[0, 1, 2, 3]` yields `(0, 1)` then `(2, 3)`
pub fn pairwise<I: IntoIterator>(seq: I) -> Pairwise<I::IntoIter> {
    Pairwise {
        iter: seq.into_iter(),
    }
}
