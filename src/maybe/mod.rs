//! The `Maybe` type - a value that is either present or absent.
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. It is an immutable value:
//! the state is fixed at construction, equality and hashing are by content,
//! and every `Nothing` of the same `T` is indistinguishable from
//! [`Maybe::NOTHING`].
//!
//! # Examples
//!
//! ```rust
//! use maybe::Maybe;
//!
//! let port = Maybe::just("8080")
//!     .parse::<u16>()
//!     .filter(|port| *port >= 1024)
//!     .or(80);
//! assert_eq!(port, 8080);
//!
//! let missing: Maybe<u16> = Maybe::nothing();
//! assert_eq!(missing.map(|port| port + 1).or(80), 80);
//! ```
//!
//! # Ordering
//!
//! `Nothing` sorts before every `Just`, and two `Just` values compare by their
//! payloads:
//!
//! ```rust
//! use maybe::Maybe;
//!
//! let mut values = vec![Maybe::just(3), Maybe::nothing(), Maybe::just(1)];
//! values.sort();
//! assert_eq!(values, vec![Maybe::nothing(), Maybe::just(1), Maybe::just(3)]);
//! ```

#[cfg(feature = "async")]
mod async_ops;
mod convert;
mod ordering;
#[cfg(feature = "serde")]
mod serde_impl;

pub use convert::ToMaybe;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::MaybeError;

/// An optional value: either `Just(value)` or `Nothing`.
///
/// # Type Parameters
///
/// * `T` - The type of the payload
///
/// # Examples
///
/// ```rust
/// use maybe::Maybe;
///
/// let name = Maybe::just("Ada".to_string());
/// assert!(name.has_value());
/// assert_eq!(name.map(|name| name.len()), Maybe::just(3));
///
/// let nothing = Maybe::<String>::NOTHING;
/// assert_eq!(nothing.to_string(), "");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Maybe<T> {
    inner: Option<T>,
}

impl<T> Maybe<T> {
    /// The canonical `Nothing` for this payload type.
    pub const NOTHING: Self = Self { inner: None };

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value. The result always has a value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Returns the canonical `Nothing`.
    #[inline]
    pub const fn nothing() -> Self {
        Self::NOTHING
    }

    /// Converts an `Option`, mapping `None` to `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(1)), Maybe::just(1));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::nothing());
    /// ```
    #[inline]
    pub const fn from_option(option: Option<T>) -> Self {
        Self { inner: option }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        self.inner.is_none()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the payload.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::EmptyValueAccess`] if there is no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{Maybe, MaybeError};
    ///
    /// assert_eq!(Maybe::just(7).value(), Ok(7));
    /// assert_eq!(
    ///     Maybe::<i32>::nothing().value(),
    ///     Err(MaybeError::EmptyValueAccess)
    /// );
    /// ```
    pub fn value(self) -> Result<T, MaybeError> {
        self.inner.ok_or_else(|| {
            tracing::trace!("payload requested from an empty Maybe");
            MaybeError::EmptyValueAccess
        })
    }

    /// Returns a reference to the payload.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::EmptyValueAccess`] if there is no value.
    pub fn value_ref(&self) -> Result<&T, MaybeError> {
        self.inner.as_ref().ok_or_else(|| {
            tracing::trace!("payload reference requested from an empty Maybe");
            MaybeError::EmptyValueAccess
        })
    }

    /// Returns the payload, or `default_value` if there is none.
    #[inline]
    pub fn or(self, default_value: T) -> T {
        self.inner.unwrap_or(default_value)
    }

    /// Returns the payload, or computes a default with `supplier`.
    ///
    /// `supplier` is only invoked when there is no value.
    #[inline]
    pub fn or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.inner.unwrap_or_else(supplier)
    }

    /// Returns the payload, or `T::default()`.
    ///
    /// This covers the empty string, the empty collection and `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// assert_eq!(Maybe::<String>::nothing().or_default(), "");
    /// assert_eq!(Maybe::<Vec<i32>>::nothing().or_default(), Vec::<i32>::new());
    /// ```
    #[inline]
    pub fn or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    /// Returns the payload, or the error produced by `error_supplier`.
    ///
    /// # Errors
    ///
    /// Returns the result of `error_supplier` if there is no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// let missing: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(missing.or_throw(|| "missing"), Err("missing"));
    /// assert_eq!(Maybe::just(1).or_throw(|| "missing"), Ok(1));
    /// ```
    #[inline]
    pub fn or_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.inner.ok_or_else(error_supplier)
    }

    /// Returns `self` if it has a value, otherwise `alternative`.
    ///
    /// The alternative may be a plain `T` or another `Maybe<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::nothing().or_alternative(2), Maybe::just(2));
    /// assert_eq!(Maybe::just(1).or_alternative(2), Maybe::just(1));
    /// assert_eq!(
    ///     Maybe::<i32>::nothing().or_alternative(Maybe::<i32>::NOTHING),
    ///     Maybe::nothing()
    /// );
    /// ```
    #[inline]
    pub fn or_alternative<A>(self, alternative: A) -> Self
    where
        A: Into<Self>,
    {
        if self.has_value() { self } else { alternative.into() }
    }

    /// Returns `self` if it has a value, otherwise the alternative computed by
    /// `supplier`.
    #[inline]
    pub fn or_alternative_with<A, F>(self, supplier: F) -> Self
    where
        A: Into<Self>,
        F: FnOnce() -> A,
    {
        if self.has_value() {
            self
        } else {
            supplier().into()
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `selector` to the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|n| n * 10), Maybe::just(20));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n * 10), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe::from_option(self.inner.map(selector))
    }

    /// Applies a selector that may itself produce no value.
    #[inline]
    pub fn filter_map<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Maybe::from_option(self.inner.and_then(selector))
    }

    /// Applies `selector` to the payload and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
    /// }
    ///
    /// assert_eq!(Maybe::just(8).bind(half).bind(half), Maybe::just(2));
    /// assert_eq!(Maybe::just(6).bind(half).bind(half), Maybe::nothing());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.inner {
            Some(value) => selector(value),
            None => Maybe::NOTHING,
        }
    }

    /// Binds with `selector` and combines both payloads with `projector`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// let total = Maybe::just(2).bind_with(|n| Maybe::just(n * 3), |a, b| a + b);
    /// assert_eq!(total, Maybe::just(8));
    /// ```
    pub fn bind_with<U, V, F, P>(self, selector: F, projector: P) -> Maybe<V>
    where
        F: FnOnce(&T) -> Maybe<U>,
        P: FnOnce(T, U) -> V,
    {
        match self.inner {
            Some(value) => selector(&value).map(|other| projector(value, other)),
            None => Maybe::NOTHING,
        }
    }

    /// Applies a fallible selector, surfacing its error.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `selector`.
    pub fn try_map<U, E, F>(self, selector: F) -> Result<Maybe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.map(selector).transpose()
    }

    /// Keeps the payload only if `predicate` holds.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self::from_option(self.inner.filter(predicate))
    }

    /// Returns `true` if a value is present and `predicate` holds on it.
    #[inline]
    pub fn matches<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.inner.as_ref().is_some_and(predicate)
    }

    /// Returns `true` if a value is present and equals `other`.
    #[inline]
    pub fn matches_value(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.as_ref() == Some(other)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes `consumer` with the payload, if there is one.
    #[inline]
    pub fn for_each<F>(self, consumer: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.inner {
            consumer(value);
        }
    }

    /// Invokes `consumer` with a reference to the payload and returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.inner {
            consumer(value);
        }
        self
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Pairs two payloads.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        Maybe::from_option(self.inner.zip(other.inner))
    }

    /// Combines two payloads with `combiner`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// let label = Maybe::just(2).zip_with(Maybe::just(1.5), |count, price| {
    ///     format!("{count} x {price}")
    /// });
    /// assert_eq!(label, Maybe::just("2 x 1.5".to_string()));
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, combiner: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(left, right)| combiner(left, right))
    }

    /// Combines two payloads with a `combiner` that may produce no value.
    #[inline]
    pub fn zip_bind<U, R, F>(self, other: Maybe<U>, combiner: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> Maybe<R>,
    {
        self.zip(other).bind(|(left, right)| combiner(left, right))
    }

    /// Invokes `consumer` only when both payloads are present.
    #[inline]
    pub fn zip_for_each<U, F>(self, other: Maybe<U>, consumer: F)
    where
        F: FnOnce(T, U),
    {
        self.zip(other).for_each(|(left, right)| consumer(left, right));
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Converts into the underlying `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.inner
    }

    /// Borrows the underlying `Option`.
    #[inline]
    pub const fn as_option(&self) -> &Option<T> {
        &self.inner
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe::from_option(self.inner.as_ref())
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        Maybe::from_option(self.inner.as_mut())
    }

    /// Iterates over the payload: one item or none.
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clones the referenced payload.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        Maybe::from_option(self.inner.cloned())
    }
}

impl<T: Copy> Maybe<&T> {
    /// Copies the referenced payload.
    #[inline]
    pub fn copied(self) -> Maybe<T> {
        Maybe::from_option(self.inner.copied())
    }
}

impl Maybe<bool> {
    /// Returns the payload, or `true` if there is none.
    #[inline]
    pub fn or_true(self) -> bool {
        self.or(true)
    }

    /// Returns the payload, or `false` if there is none.
    #[inline]
    pub fn or_false(self) -> bool {
        self.or(false)
    }
}

impl<T, E> Maybe<Result<T, E>> {
    /// Turns a `Maybe` of a `Result` into a `Result` of a `Maybe`.
    ///
    /// # Errors
    ///
    /// Returns the contained error if the payload is an `Err`.
    pub fn transpose(self) -> Result<Maybe<T>, E> {
        self.inner.transpose().map(Maybe::from_option)
    }
}

impl<I: IntoIterator> Maybe<I> {
    /// Iterates the contained collection, or nothing at all.
    ///
    /// A missing collection behaves exactly like an empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// let present: Vec<i32> = Maybe::just(vec![1, 2]).or_empty().collect();
    /// assert_eq!(present, vec![1, 2]);
    ///
    /// let absent: Vec<i32> = Maybe::<Vec<i32>>::nothing().or_empty().collect();
    /// assert!(absent.is_empty());
    /// ```
    #[inline]
    pub fn or_empty(self) -> std::iter::Flatten<std::option::IntoIter<I>> {
        self.inner.into_iter().flatten()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::NOTHING
    }
}

impl<T> From<T> for Maybe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::just(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => formatter.debug_tuple("Just").field(value).finish(),
            None => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => write!(formatter, "{value}"),
            None => Ok(()),
        }
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.inner {
            Some(value) => value.hash(state),
            None => state.write_u64(0),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

// Thread safety follows the payload.
static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<std::sync::Arc<String>>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_just_has_value() {
        let value = Maybe::just(1);
        assert!(value.has_value());
        assert!(!value.is_nothing());
    }

    #[rstest]
    fn test_nothing_is_canonical() {
        assert_eq!(Maybe::<i32>::nothing(), Maybe::NOTHING);
        assert_eq!(Maybe::<i32>::default(), Maybe::NOTHING);
        assert_eq!(Maybe::<i32>::from_option(None), Maybe::NOTHING);
    }

    #[rstest]
    fn test_from_value_and_identity_conversion() {
        let wrapped: Maybe<i32> = Maybe::from(5);
        let rewrapped: Maybe<i32> = Maybe::from(wrapped);
        assert_eq!(rewrapped, Maybe::just(5));
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    #[rstest]
    fn test_value_of_nothing_fails() {
        assert_eq!(
            Maybe::<i32>::nothing().value(),
            Err(MaybeError::EmptyValueAccess)
        );
        assert_eq!(
            Maybe::<i32>::nothing().value_ref(),
            Err(MaybeError::EmptyValueAccess)
        );
        assert_eq!(Maybe::just(3).value_ref(), Ok(&3));
    }

    #[rstest]
    #[case(Some(1), 3, 1)]
    #[case(None, 3, 3)]
    fn test_or_returns_value_or_default(
        #[case] value: Option<i32>,
        #[case] default_value: i32,
        #[case] expected: i32,
    ) {
        assert_eq!(Maybe::from_option(value).or(default_value), expected);
        assert_eq!(Maybe::from_option(value).or_else(|| default_value), expected);
    }

    #[rstest]
    fn test_or_else_is_lazy() {
        let calls = Cell::new(0);
        let result = Maybe::just(1).or_else(|| {
            calls.set(calls.get() + 1);
            2
        });
        assert_eq!(result, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_or_throw() {
        let missing: Maybe<i32> = Maybe::nothing();
        assert_eq!(missing.or_throw(|| "boom"), Err("boom"));
        assert_eq!(Maybe::just(4).or_throw(|| "boom"), Ok(4));
    }

    #[rstest]
    #[case(Some(false), false, false)]
    #[case(Some(true), true, true)]
    #[case(None, true, false)]
    fn test_bool_defaults(
        #[case] value: Option<bool>,
        #[case] expected_or_true: bool,
        #[case] expected_or_false: bool,
    ) {
        assert_eq!(Maybe::from_option(value).or_true(), expected_or_true);
        assert_eq!(Maybe::from_option(value).or_false(), expected_or_false);
    }

    #[rstest]
    fn test_or_alternative_accepts_value_and_maybe() {
        assert_eq!(Maybe::<i32>::nothing().or_alternative(2), Maybe::just(2));
        assert_eq!(
            Maybe::<i32>::nothing().or_alternative(Maybe::just(2)),
            Maybe::just(2)
        );
        assert_eq!(Maybe::just(1).or_alternative(Maybe::just(2)), Maybe::just(1));
    }

    #[rstest]
    fn test_or_alternative_with_is_lazy() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            Maybe::just(9)
        };
        assert_eq!(Maybe::just(1).or_alternative_with(supplier), Maybe::just(1));
        assert_eq!(calls.get(), 0);
        assert_eq!(Maybe::<i32>::nothing().or_alternative_with(|| 9), Maybe::just(9));
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    #[rstest]
    fn test_map_and_filter_map() {
        assert_eq!(Maybe::just(2).map(|n| n + 1), Maybe::just(3));
        assert_eq!(Maybe::just(2).filter_map(|_| None::<i32>), Maybe::nothing());
        assert_eq!(Maybe::just("7").filter_map(|s| s.parse::<i32>().ok()), Maybe::just(7));
    }

    #[rstest]
    fn test_bind_on_nothing_does_not_call_selector() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::nothing().bind(|n| {
            calls.set(calls.get() + 1);
            Maybe::just(n)
        });
        assert_eq!(result, Maybe::nothing());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_try_map_surfaces_error() {
        let parsed: Result<Maybe<i32>, _> = Maybe::just("x").try_map(str::parse::<i32>);
        assert!(parsed.is_err());
        let parsed: Result<Maybe<i32>, std::num::ParseIntError> =
            Maybe::<&str>::nothing().try_map(str::parse::<i32>);
        assert_eq!(parsed, Ok(Maybe::nothing()));
    }

    #[rstest]
    #[case("value", "value")]
    #[case("another", "")]
    fn test_filter_applies_predicate(#[case] value: &str, #[case] expected: &str) {
        let result = Maybe::just(value).filter(|s| s.starts_with('v'));
        assert_eq!(result.to_string(), expected);
    }

    #[rstest]
    #[case(Some("value"), "value", true)]
    #[case(Some("value"), "other", false)]
    #[case(None, "value", false)]
    fn test_matches_value(
        #[case] value: Option<&str>,
        #[case] other: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(Maybe::from_option(value).matches_value(&other), expected);
    }

    #[rstest]
    fn test_matches_with_predicate() {
        assert!(Maybe::just(3).matches(|n| *n > 2));
        assert!(!Maybe::just(1).matches(|n| *n > 2));
        assert!(!Maybe::<i32>::nothing().matches(|_| true));
    }

    // =========================================================================
    // Side Effects and Combination
    // =========================================================================

    #[rstest]
    fn test_for_each_runs_only_with_value() {
        let seen = Cell::new(0);
        Maybe::just(5).for_each(|n| seen.set(n));
        assert_eq!(seen.get(), 5);
        Maybe::<i32>::nothing().for_each(|_| seen.set(-1));
        assert_eq!(seen.get(), 5);
    }

    #[rstest]
    #[case(Some(1), Some(2.5), "1 2.5")]
    #[case(None, Some(2.5), "")]
    #[case(Some(1), None, "")]
    fn test_zip_with(
        #[case] value: Option<i32>,
        #[case] other: Option<f64>,
        #[case] expected: &str,
    ) {
        let zipped = Maybe::from_option(value)
            .zip_with(Maybe::from_option(other), |a, b| format!("{a} {b}"));
        assert_eq!(zipped.to_string(), expected);

        let bound = Maybe::from_option(value).zip_bind(Maybe::from_option(other), |a, b| {
            Maybe::just(format!("{a} {b}"))
        });
        assert_eq!(bound.to_string(), expected);
    }

    #[rstest]
    fn test_zip_for_each_requires_both() {
        let calls = Cell::new(0);
        Maybe::just(1).zip_for_each(Maybe::just(2), |a, b| calls.set(a + b));
        assert_eq!(calls.get(), 3);
        Maybe::just(1).zip_for_each(Maybe::<i32>::nothing(), |_, _| calls.set(0));
        assert_eq!(calls.get(), 3);
    }

    // =========================================================================
    // Standard Traits
    // =========================================================================

    #[rstest]
    fn test_display_and_debug() {
        assert_eq!(Maybe::just(12).to_string(), "12");
        assert_eq!(Maybe::<i32>::nothing().to_string(), "");
        assert_eq!(format!("{:?}", Maybe::just(12)), "Just(12)");
        assert_eq!(format!("{:?}", Maybe::<i32>::nothing()), "Nothing");
    }

    #[rstest]
    fn test_hash_matches_payload_hash() {
        assert_eq!(hash_of(&Maybe::just("key")), hash_of(&"key"));
        assert_eq!(hash_of(&Maybe::<i32>::nothing()), hash_of(&Maybe::<i32>::NOTHING));
        assert_eq!(hash_of(&Maybe::<String>::nothing()), hash_of(&0_u64));
    }

    #[rstest]
    fn test_equality_by_content() {
        assert_eq!(Maybe::just("a".to_string()), Maybe::just("a".to_string()));
        assert_ne!(Maybe::just(1), Maybe::nothing());
        assert_ne!(Maybe::just(1), Maybe::just(2));
    }

    #[rstest]
    fn test_into_iterator_yields_zero_or_one() {
        assert_eq!(Maybe::just(1).into_iter().collect::<Vec<_>>(), vec![1]);
        assert!(Maybe::<i32>::nothing().into_iter().next().is_none());
        let borrowed = Maybe::just(2);
        assert_eq!((&borrowed).into_iter().copied().sum::<i32>(), 2);
    }

    #[rstest]
    fn test_option_round_trip() {
        let option: Option<i32> = Maybe::just(1).into();
        assert_eq!(option, Some(1));
        assert_eq!(Maybe::just(1).as_ref().copied(), Maybe::just(1));
    }
}
