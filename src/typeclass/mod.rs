//! Type class traits for [`Maybe`](crate::Maybe).
//!
//! `Maybe` takes part in the usual functional hierarchy:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over the present value
//! - [`Applicative`]: Lifting values and combining independent `Maybe`s
//! - [`Monad`]: Sequencing dependent computations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Generic Associated Types let these traits talk about `Maybe<_>` as a
//! constructor, so generic code written against `Monad` works with `Maybe`.
//!
//! # Examples
//!
//! ```rust
//! use maybe::Maybe;
//! use maybe::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     value.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::just(21)), Maybe::just(42));
//!
//! let chained = <Maybe<()>>::pure(3).flat_map(|n| Maybe::just(n + 1));
//! assert_eq!(chained, Maybe::just(4));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
