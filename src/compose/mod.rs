//! Query composition over [`Maybe`](crate::Maybe).
//!
//! This module provides the [`maybe!`](crate::maybe!) macro, a do-notation that
//! chains dependent `Maybe` computations without nesting closures by hand.
//!
//! # Examples
//!
//! ```
//! use maybe::{Maybe, maybe};
//! use std::collections::HashMap;
//!
//! let ages = HashMap::from([("ada", 36), ("alan", 41)]);
//! let lookup = |name: &str| Maybe::from_option(ages.get(name).copied());
//!
//! let gap = maybe! {
//!     a <= lookup("ada");
//!     b <= lookup("alan");
//!     yield b - a
//! };
//! assert_eq!(gap, Maybe::just(5));
//!
//! let unknown = maybe! {
//!     a <= lookup("ada");
//!     b <= lookup("grace");
//!     yield b - a
//! };
//! assert!(unknown.is_nothing());
//! ```

mod maybe_macro;
