//! The `Compact` iterator adapter.

use std::iter::FusedIterator;

use crate::maybe::ToMaybe;

/// An iterator yielding only the present values of its source.
///
/// Created by [`MaybeIteratorExt::compact`](super::MaybeIteratorExt::compact).
/// Each call to `next()` pulls source elements only until one is present, so
/// the adapter works on infinite sources.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Compact<I> {
    source: I,
}

impl<I> Compact<I> {
    pub(super) const fn new(source: I) -> Self {
        Self { source }
    }

    /// Returns the wrapped source iterator.
    pub fn into_inner(self) -> I {
        self.source
    }
}

impl<I> Iterator for Compact<I>
where
    I: Iterator,
    I::Item: ToMaybe,
{
    type Item = <I::Item as ToMaybe>::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source
            .by_ref()
            .find_map(|element| element.to_maybe().into_option())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I> DoubleEndedIterator for Compact<I>
where
    I: DoubleEndedIterator,
    I::Item: ToMaybe,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(element) = self.source.next_back() {
            if let Some(value) = element.to_maybe().into_option() {
                return Some(value);
            }
        }
        None
    }
}

impl<I> FusedIterator for Compact<I>
where
    I: FusedIterator,
    I::Item: ToMaybe,
{
}
