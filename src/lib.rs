//! # maybe
//!
//! An explicit optional value type with a total ordering, plus `Maybe`-returning
//! combinators over sequences, maps and indexed collections.
//!
//! ## Overview
//!
//! - **`Maybe<T>`**: either `Just(value)` or `Nothing`, with extraction,
//!   transformation, filtering and zipping operations
//! - **Ordering**: `Nothing` sorts before every present value
//! - **Sequences**: `maybe_first`, `maybe_single`, `compact`, `maybe_at`,
//!   `maybe_get`, each pulling no more elements than the answer needs
//! - **Type classes**: `Functor`, `Applicative` and `Monad` for `Maybe`
//! - **Query composition**: the `maybe!` do-notation macro
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `sequence`: Sequence, map and index combinators
//! - `compose`: The `maybe!` macro
//! - `async`: Async callbacks on `Maybe` and `Stream` combinators
//! - `serde`: `Serialize` / `Deserialize` with the same shape as `Option`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe::prelude::*;
//!
//! let scores = vec![Maybe::just(7), Maybe::nothing(), Maybe::just(3)];
//! let present: Vec<i32> = scores.iter().compact().copied().collect();
//! assert_eq!(present, vec![7, 3]);
//!
//! let best = present.into_iter().maybe_first_where(|score| *score > 5);
//! assert_eq!(best.or(0), 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::MaybeError;
    pub use crate::maybe::{Maybe, ToMaybe};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::{MaybeIndexExt, MaybeIteratorExt, MaybeLookupExt};

    #[cfg(feature = "async")]
    pub use crate::sequence::MaybeStreamExt;
}

pub mod error;
pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;

pub use error::MaybeError;
pub use maybe::{Maybe, ToMaybe};
