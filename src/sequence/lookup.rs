//! Key lookup returning `Maybe`.
//!
//! Maps whose values are themselves optional keep them as they are: the
//! lookup returns a `Maybe` of a reference to the stored `Maybe`, and
//! [`Maybe::flatten`] turns that into a `Maybe` of the payload without ever
//! nesting twice.
//!
//! ```rust
//! use std::collections::HashMap;
//! use maybe::Maybe;
//! use maybe::sequence::MaybeLookupExt;
//!
//! let mut settings: HashMap<&str, Maybe<u16>> = HashMap::new();
//! settings.insert("port", Maybe::just(8080));
//! settings.insert("timeout", Maybe::nothing());
//!
//! assert_eq!(settings.maybe_get("port").flatten(), Maybe::just(&8080));
//! assert_eq!(settings.maybe_get("timeout").flatten(), Maybe::nothing());
//! assert_eq!(settings.maybe_get("host").flatten(), Maybe::nothing());
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::maybe::Maybe;

/// Key lookup over a map with unique keys.
///
/// `Q` is the borrowed form of the key, as in [`HashMap::get`].
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use maybe::Maybe;
/// use maybe::sequence::MaybeLookupExt;
///
/// let names = BTreeMap::from([(0, "0"), (1, "1")]);
/// assert_eq!(names.maybe_get(&2), Maybe::nothing());
/// assert_eq!(names.maybe_get(&0), Maybe::just(&"0"));
/// ```
pub trait MaybeLookupExt<Q: ?Sized> {
    /// The value type.
    type Value;

    /// Returns the value stored under `key`.
    fn maybe_get(&self, key: &Q) -> Maybe<&Self::Value>;

    /// Returns the value stored under an optional `key`.
    ///
    /// A missing key finds nothing without consulting the map.
    #[inline]
    fn maybe_get_with(&self, key: Maybe<&Q>) -> Maybe<&Self::Value> {
        key.bind(|key| self.maybe_get(key))
    }
}

impl<K, V, Q, S> MaybeLookupExt<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn maybe_get(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_option(self.get(key))
    }
}

impl<K, V, Q> MaybeLookupExt<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn maybe_get(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_option(self.get(key))
    }
}
