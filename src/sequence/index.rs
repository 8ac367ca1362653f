//! Positional lookup returning `Maybe`.

use std::collections::VecDeque;

use crate::maybe::Maybe;

/// Positional access that answers `Nothing` instead of panicking.
///
/// Positions are signed so that a negative position, like one past the end,
/// simply finds nothing.
///
/// # Examples
///
/// ```rust
/// use maybe::Maybe;
/// use maybe::sequence::MaybeIndexExt;
///
/// let values = vec![10, 20];
/// assert_eq!(values.maybe_at(-1), Maybe::nothing());
/// assert_eq!(values.maybe_at(1), Maybe::just(&20));
/// assert_eq!(values.maybe_at(2), Maybe::nothing());
/// ```
pub trait MaybeIndexExt {
    /// The element type.
    type Element;

    /// Returns the element at the zero-based `position`.
    fn maybe_at(&self, position: isize) -> Maybe<&Self::Element>;
}

impl<T> MaybeIndexExt for [T] {
    type Element = T;

    #[inline]
    fn maybe_at(&self, position: isize) -> Maybe<&T> {
        Maybe::from_option(usize::try_from(position).ok().and_then(|index| self.get(index)))
    }
}

impl<T> MaybeIndexExt for VecDeque<T> {
    type Element = T;

    #[inline]
    fn maybe_at(&self, position: isize) -> Maybe<&T> {
        Maybe::from_option(usize::try_from(position).ok().and_then(|index| self.get(index)))
    }
}
