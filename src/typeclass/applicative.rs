//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with lifting a plain value (`pure`) and
//! combining independent values (`map2`, `map3`, `product`, `apply`).
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                         // identity
//! pure(f).apply(pure(x)) == pure(f(x))              // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)       // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::Maybe;
//! use maybe::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::just(42));
//!
//! let sum = Maybe::just(1).map2(Maybe::just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::just(3));
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three values in the context with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two values in the context.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value if both are present.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value if both are present.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function in the context to a value in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    /// use maybe::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip(second)
            .zip_with(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.zip_with(other, |function, b| function(b))
    }
}
