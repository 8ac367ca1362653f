//! Error types for `Maybe` and the sequence combinators.
//!
//! Absence itself is never an error: it is the `Nothing` state of a
//! [`Maybe`](crate::maybe::Maybe). The variants below only describe contract
//! violations that a caller has to handle.

use thiserror::Error;

/// Represents the ways an operation on a `Maybe` or a sequence scan can fail.
///
/// # Examples
///
/// ```rust
/// use maybe::MaybeError;
///
/// let error = MaybeError::TooManyElements { filtered: true };
/// assert_eq!(
///     error.to_string(),
///     "Sequence contains more than one matching element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MaybeError {
    /// The payload of a `Nothing` was read.
    #[error("No value is present")]
    EmptyValueAccess,

    /// A uniqueness scan found a second element.
    ///
    /// `filtered` is `true` when the scan was restricted by a predicate.
    #[error("Sequence contains more than one {}element", qualifier(.filtered))]
    TooManyElements {
        /// Whether the scan counted only elements matching a predicate.
        filtered: bool,
    },

    /// Two payloads have no defined order relative to each other.
    #[error("Values are not comparable")]
    NotComparable,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn qualifier(filtered: &bool) -> &'static str {
    if *filtered { "matching " } else { "" }
}
