//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::Maybe;
//! use maybe::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::just(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::just("5".to_string()));
//!
//! let nothing: Maybe<String> = Maybe::<i32>::nothing().fmap(|n| n.to_string());
//! assert_eq!(nothing, Maybe::nothing());
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies a function to the inner value, consuming `self`.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the inner value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the inner value with `value`, keeping the structure.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the inner value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
