//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] records the applied type (`Inner`) and how to re-apply
//! the constructor to another type (`WithType<B>`), which is enough to state
//! `Functor`, `Applicative` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use maybe::Maybe;
//! use maybe::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let empty: Maybe<String> = reset(Maybe::just(42));
//! assert_eq!(empty, Maybe::nothing());
//! ```

use crate::maybe::Maybe;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn maybe_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Maybe<String> = transform(Maybe::just(42));
        assert_eq!(result, Maybe::nothing());
    }
}
