//! Conversions into `Maybe` that never nest.
//!
//! Wrapping is idempotent: converting something that is already optional
//! (`Maybe<T>`, `Option<T>` or a reference to either) yields a `Maybe` of the
//! payload, not a `Maybe` of the wrapper. This is resolved statically through
//! the [`ToMaybe`] trait.

use std::str::FromStr;

use super::Maybe;

/// Types that already represent an optional value.
///
/// # Examples
///
/// ```rust
/// use maybe::{Maybe, ToMaybe};
///
/// assert_eq!(Some(3).to_maybe(), Maybe::just(3));
/// assert_eq!(None::<i32>.to_maybe(), Maybe::nothing());
///
/// // Already a Maybe: returned unchanged.
/// assert_eq!(Maybe::just(3).to_maybe(), Maybe::just(3));
///
/// // References give a Maybe of a reference.
/// let stored = Maybe::just(String::from("x"));
/// assert_eq!((&stored).to_maybe(), Maybe::just(&String::from("x")));
/// ```
pub trait ToMaybe {
    /// The payload type.
    type Item;

    /// Converts `self` into a `Maybe` of the payload.
    fn to_maybe(self) -> Maybe<Self::Item>;
}

impl<T> ToMaybe for Maybe<T> {
    type Item = T;

    #[inline]
    fn to_maybe(self) -> Maybe<T> {
        self
    }
}

impl<T> ToMaybe for Option<T> {
    type Item = T;

    #[inline]
    fn to_maybe(self) -> Maybe<T> {
        Maybe::from_option(self)
    }
}

impl<'a, T> ToMaybe for &'a Maybe<T> {
    type Item = &'a T;

    #[inline]
    fn to_maybe(self) -> Maybe<&'a T> {
        self.as_ref()
    }
}

impl<'a, T> ToMaybe for &'a Option<T> {
    type Item = &'a T;

    #[inline]
    fn to_maybe(self) -> Maybe<&'a T> {
        Maybe::from_option(self.as_ref())
    }
}

impl<X: ToMaybe> Maybe<X> {
    /// Removes one level of optionality.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(1)).flatten(), Maybe::just(1));
    /// assert_eq!(Maybe::just(None::<i32>).flatten(), Maybe::nothing());
    /// assert_eq!(Maybe::<Option<i32>>::nothing().flatten(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<X::Item> {
        self.bind(ToMaybe::to_maybe)
    }
}

impl<S: AsRef<str>> Maybe<S> {
    /// Wraps a string, treating the empty string as no value.
    ///
    /// `Maybe::just("")` keeps an empty string as a present value; use this
    /// constructor to opt into the "empty means missing" policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// assert_eq!(Maybe::non_empty("name"), Maybe::just("name"));
    /// assert_eq!(Maybe::non_empty(""), Maybe::<&str>::nothing());
    /// assert!(Maybe::just("").has_value());
    /// ```
    #[inline]
    pub fn non_empty(value: S) -> Self {
        if value.as_ref().is_empty() {
            Self::NOTHING
        } else {
            Self::just(value)
        }
    }

    /// Parses the contained string, yielding no value on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// assert_eq!(Maybe::just("42").parse::<i32>(), Maybe::just(42));
    /// assert_eq!(Maybe::just("4x2").parse::<i32>(), Maybe::nothing());
    /// assert_eq!(Maybe::<&str>::nothing().parse::<i32>(), Maybe::nothing());
    /// ```
    pub fn parse<F: FromStr>(&self) -> Maybe<F> {
        self.as_ref().filter_map(|text| {
            let text: &str = text.as_ref();
            match text.parse() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    tracing::trace!(input = text, "string could not be parsed");
                    None
                }
            }
        })
    }
}
