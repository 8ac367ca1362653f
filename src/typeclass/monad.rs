//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::Maybe;
//! use maybe::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::just(text).parse::<i32>().filter(|n| *n > 0)
//! }
//!
//! let result = Maybe::just("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::just(n * 2));
//! assert_eq!(result, Maybe::just(84));
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the inner value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}
