//! One-level flattening of nested sequences

use std::iter::FusedIterator;
use std::vec;

/// A sequence element that is either a plain value or a nested sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Item(T),
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn item(value: T) -> Self {
        Nested::Item(value)
    }

    /// Nested sequence of plain values
    pub fn seq<I: IntoIterator<Item = T>>(values: I) -> Self {
        Nested::Seq(values.into_iter().map(Nested::Item).collect())
    }

    pub fn as_item(&self) -> Option<&T> {
        match self {
            Nested::Item(value) => Some(value),
            Nested::Seq(_) => None,
        }
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            Nested::Item(value) => Some(value),
            Nested::Seq(_) => None,
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Item(value)
    }
}

/// Iterator that expands nested sequences by exactly one level
#[derive(Debug, Clone)]
pub struct Flatten<I, T> {
    outer: I,
    inner: Option<vec::IntoIter<Nested<T>>>,
}

impl<I, T> Iterator for Flatten<I, T>
where
    I: Iterator<Item = Nested<T>>,
{
    type Item = Nested<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(member) = inner.next() {
                    return Some(member);
                }
                self.inner = None;
            }
            match self.outer.next()? {
                Nested::Seq(members) => self.inner = Some(members.into_iter()),
                item => return Some(item),
            }
        }
    }
}

impl<I, T> FusedIterator for Flatten<I, T> where I: FusedIterator<Item = Nested<T>> {}

/// Expand each nested sequence in `seq` into its members
///
/// Plain items pass through. Sequences nested two levels deep come out as
/// sequences.
pub fn flatten<I, T>(seq: I) -> Flatten<I::IntoIter, T>
where
    I: IntoIterator<Item = Nested<T>>,
{
    Flatten {
        outer: seq.into_iter(),
        inner: None,
    }
}
