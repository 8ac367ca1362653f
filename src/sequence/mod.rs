//! Sequence combinators producing `Maybe` values.
//!
//! Every combinator reads its source at most once and stops as soon as the
//! answer is known:
//!
//! - [`MaybeIteratorExt::maybe_first`]: one `next()` call
//! - [`MaybeIteratorExt::maybe_first_where`]: `next()` until the first match
//! - [`MaybeIteratorExt::maybe_single`]: at most two `next()` calls
//! - [`MaybeIteratorExt::maybe_single_where`]: up to the second match
//! - [`MaybeIteratorExt::compact`]: lazy, one element per `next()` demand
//!
//! The iterator is taken by value, so each call owns its cursor and releases
//! it on every exit path, including the error path.
//!
//! A missing source is a `Maybe` of a collection and reads as an empty
//! sequence through [`Maybe::or_empty`]. Sequences of optional elements are
//! iterators of `Option<T>` or `Maybe<T>`; [`Maybe::flatten`] collapses the
//! scan result so an absent element yields `Nothing`.
//!
//! # Examples
//!
//! ```rust
//! use maybe::Maybe;
//! use maybe::sequence::MaybeIteratorExt;
//!
//! let numbers = vec![1, 2, 3, 4];
//! assert_eq!(numbers.iter().copied().maybe_first_where(|n| *n > 2), Maybe::just(3));
//!
//! let absent: Maybe<Vec<i32>> = Maybe::nothing();
//! assert_eq!(absent.or_empty().maybe_first(), Maybe::nothing());
//!
//! let optional = vec![None, Some(1)];
//! assert_eq!(optional.into_iter().maybe_first().flatten(), Maybe::nothing());
//! ```

mod compact;
mod index;
mod lookup;
#[cfg(feature = "async")]
mod stream;

pub use compact::Compact;
pub use index::MaybeIndexExt;
pub use lookup::MaybeLookupExt;
#[cfg(feature = "async")]
pub use stream::{CompactStream, MaybeStreamExt};

use crate::error::MaybeError;
use crate::maybe::{Maybe, ToMaybe};

/// `Maybe`-producing scans over any [`Iterator`].
///
/// Implemented for every iterator.
pub trait MaybeIteratorExt: Iterator + Sized {
    /// Returns the first element, or `Nothing` for an empty sequence.
    ///
    /// Calls `next()` exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    /// use maybe::sequence::MaybeIteratorExt;
    ///
    /// assert_eq!([5, 6].into_iter().maybe_first(), Maybe::just(5));
    /// assert_eq!(std::iter::empty::<i32>().maybe_first(), Maybe::nothing());
    /// ```
    #[inline]
    fn maybe_first(mut self) -> Maybe<Self::Item> {
        Maybe::from_option(self.next())
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// Stops advancing at the first match.
    #[inline]
    fn maybe_first_where<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::from_option(self.find(predicate))
    }

    /// Returns the only element of the sequence.
    ///
    /// Reads at most two elements: the candidate, and one more to prove
    /// there is no second element.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::TooManyElements`] if there is a second element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{Maybe, MaybeError};
    /// use maybe::sequence::MaybeIteratorExt;
    ///
    /// assert_eq!([1].into_iter().maybe_single(), Ok(Maybe::just(1)));
    /// assert_eq!(std::iter::empty::<i32>().maybe_single(), Ok(Maybe::nothing()));
    /// assert_eq!(
    ///     [1, 2].into_iter().maybe_single(),
    ///     Err(MaybeError::TooManyElements { filtered: false })
    /// );
    /// ```
    fn maybe_single(mut self) -> Result<Maybe<Self::Item>, MaybeError> {
        let Some(candidate) = self.next() else {
            return Ok(Maybe::nothing());
        };
        if self.next().is_some() {
            tracing::debug!("single element requested from a sequence with more than one");
            return Err(MaybeError::TooManyElements { filtered: false });
        }
        Ok(Maybe::just(candidate))
    }

    /// Returns the only element satisfying `predicate`.
    ///
    /// After the first match the remainder is scanned for a second one; the
    /// scan stops at that second match.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::TooManyElements`] if a second element matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    /// use maybe::sequence::MaybeIteratorExt;
    ///
    /// let result = [1, 12].into_iter().maybe_single_where(|n| *n < 10);
    /// assert_eq!(result, Ok(Maybe::just(1)));
    /// ```
    fn maybe_single_where<P>(mut self, mut predicate: P) -> Result<Maybe<Self::Item>, MaybeError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let Some(candidate) = self.find(&mut predicate) else {
            return Ok(Maybe::nothing());
        };
        if self.any(|element| predicate(&element)) {
            tracing::debug!("single match requested from a sequence with more than one");
            return Err(MaybeError::TooManyElements { filtered: true });
        }
        Ok(Maybe::just(candidate))
    }

    /// Keeps only the present values of a sequence of optional elements.
    ///
    /// The adapter is lazy, preserves order, and can be cloned (restarted)
    /// whenever the source can.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    /// use maybe::sequence::MaybeIteratorExt;
    ///
    /// let values = vec![Maybe::nothing(), Maybe::just(1), Maybe::nothing(), Maybe::just(2)];
    /// assert_eq!(values.into_iter().compact().collect::<Vec<_>>(), vec![1, 2]);
    ///
    /// let first_even_squares: Vec<u64> = (1..)
    ///     .map(|n: u64| if n % 2 == 0 { Some(n * n) } else { None })
    ///     .compact()
    ///     .take(3)
    ///     .collect();
    /// assert_eq!(first_even_squares, vec![4, 16, 36]);
    /// ```
    #[inline]
    fn compact(self) -> Compact<Self>
    where
        Self::Item: ToMaybe,
    {
        Compact::new(self)
    }
}

impl<I: Iterator> MaybeIteratorExt for I {}
