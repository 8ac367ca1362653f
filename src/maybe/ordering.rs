//! Ordering of `Maybe` values.
//!
//! `Nothing` is less than every `Just`; two `Just` values compare by their
//! payloads. The order is consistent with equality, so sorting a slice of
//! `Maybe<T>` puts every `Nothing` first followed by the payloads in
//! ascending order.
//!
//! For payloads with only a partial order (such as `f64`), the fallible
//! comparisons [`Maybe::compare_to`], [`Maybe::try_lt`], [`Maybe::try_le`],
//! [`Maybe::try_gt`] and [`Maybe::try_ge`] report
//! [`MaybeError::NotComparable`] instead of silently answering `false`.

use std::cmp::Ordering;

use super::Maybe;
use crate::error::MaybeError;

impl<T: PartialOrd> PartialOrd for Maybe<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.inner.partial_cmp(&other.inner)
    }
}

impl<T: Ord> Ord for Maybe<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<T: PartialOrd> Maybe<T> {
    /// Compares two values, failing when the payloads have no relative order.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NotComparable`] when both values are present and
    /// the payloads cannot be ordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use maybe::{Maybe, MaybeError};
    ///
    /// assert_eq!(Maybe::nothing().compare_to(&Maybe::just(1.0)), Ok(Ordering::Less));
    /// assert_eq!(Maybe::just(2.0).compare_to(&Maybe::just(1.0)), Ok(Ordering::Greater));
    /// assert_eq!(
    ///     Maybe::just(f64::NAN).compare_to(&Maybe::just(1.0)),
    ///     Err(MaybeError::NotComparable)
    /// );
    /// ```
    pub fn compare_to(&self, other: &Self) -> Result<Ordering, MaybeError> {
        self.partial_cmp(other).ok_or_else(|| {
            tracing::debug!("payloads have no relative order");
            MaybeError::NotComparable
        })
    }

    /// Fallible `<`.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NotComparable`] as [`Maybe::compare_to`] does.
    pub fn try_lt(&self, other: &Self) -> Result<bool, MaybeError> {
        self.compare_to(other).map(Ordering::is_lt)
    }

    /// Fallible `<=`.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NotComparable`] as [`Maybe::compare_to`] does.
    pub fn try_le(&self, other: &Self) -> Result<bool, MaybeError> {
        self.compare_to(other).map(Ordering::is_le)
    }

    /// Fallible `>`.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NotComparable`] as [`Maybe::compare_to`] does.
    pub fn try_gt(&self, other: &Self) -> Result<bool, MaybeError> {
        self.compare_to(other).map(Ordering::is_gt)
    }

    /// Fallible `>=`.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::NotComparable`] as [`Maybe::compare_to`] does.
    pub fn try_ge(&self, other: &Self) -> Result<bool, MaybeError> {
        self.compare_to(other).map(Ordering::is_ge)
    }
}
