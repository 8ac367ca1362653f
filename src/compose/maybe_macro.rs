//! `maybe!` macro for do-notation over [`Maybe`](crate::Maybe).
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the present value of a `Maybe`
//! - `let pattern = expression;` is a pure binding
//! - `yield expression` ends the block, wrapping the value with `Maybe::just`
//! - `expression` ends the block with an expression that is already a `Maybe`
//!
//! Any absent step short-circuits the rest of the block.
//!
//! # Examples
//!
//! ```rust
//! use maybe::{Maybe, maybe};
//!
//! let total = maybe! {
//!     price <= Maybe::just(120);
//!     quantity <= Maybe::just(3);
//!     let subtotal = price * quantity;
//!     yield subtotal + 10
//! };
//! assert_eq!(total, Maybe::just(370));
//!
//! let missing: Maybe<i32> = maybe! {
//!     price <= Maybe::just(120);
//!     quantity <= Maybe::<i32>::nothing();
//!     yield price * quantity
//! };
//! assert!(missing.is_nothing());
//! ```
//!
//! # Implementation Notes
//!
//! `pattern <= expression; rest` expands to
//! ```rust,ignore
//! expression.bind(move |pattern| { /* rest */ })
//! ```

/// Do-notation for chaining [`Maybe`](crate::Maybe) computations.
///
/// ```text
/// maybe! {
///     pattern <= maybe_expression;    // Bind
///     let pattern = expression;       // Pure let binding
///     yield expression                // Final value, wrapped in Just
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use maybe::{Maybe, maybe};
///
/// let name = maybe! {
///     (first, last) <= Maybe::just(("Ada", "Lovelace"));
///     _ <= Maybe::just(()).filter(|()| !first.is_empty());
///     Maybe::non_empty(format!("{first} {last}"))
/// };
/// assert_eq!(name, Maybe::just("Ada Lovelace".to_string()));
/// ```
#[macro_export]
macro_rules! maybe {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    (yield $value:expr) => {
        $crate::Maybe::just($value)
    };

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= maybe; rest
    // ==========================================================================

    ($pattern:ident <= $source:expr ; $($rest:tt)+) => {
        $crate::Maybe::bind($source, move |$pattern| {
            $crate::maybe!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $source:expr ; $($rest:tt)+) => {
        $crate::Maybe::bind($source, move |($($pattern)*)| {
            $crate::maybe!($($rest)+)
        })
    };

    (_ <= $source:expr ; $($rest:tt)+) => {
        $crate::Maybe::bind($source, move |_| {
            $crate::maybe!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $value:expr ; $($rest:tt)+) => {
        {
            let $pattern = $value;
            $crate::maybe!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $value;
            $crate::maybe!($($rest)+)
        }
    };
}
