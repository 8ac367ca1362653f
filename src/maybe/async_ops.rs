//! Asynchronous counterparts of the `Maybe` combinators.
//!
//! Presence and absence behave exactly as in the synchronous versions; the
//! only difference is that the callback returns a future which is awaited.
//! Callbacks are never polled when there is nothing to apply them to.

use std::future::Future;

use super::Maybe;

impl<T> Maybe<T> {
    /// Applies an asynchronous `selector` to the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Maybe;
    ///
    /// let doubled = futures::executor::block_on(
    ///     Maybe::just(21).map_async(|n| async move { n * 2 }),
    /// );
    /// assert_eq!(doubled, Maybe::just(42));
    /// ```
    pub async fn map_async<U, F, Fut>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.inner {
            Some(value) => Maybe::just(selector(value).await),
            None => Maybe::NOTHING,
        }
    }

    /// Applies an asynchronous `selector` producing a `Maybe` and flattens.
    pub async fn bind_async<U, F, Fut>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self.inner {
            Some(value) => selector(value).await,
            None => Maybe::NOTHING,
        }
    }

    /// Applies an asynchronous fallible `selector`, surfacing its error once
    /// the future settles.
    ///
    /// # Errors
    ///
    /// Returns the error produced by the future.
    pub async fn try_map_async<U, E, F, Fut>(self, selector: F) -> Result<Maybe<U>, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self.inner {
            Some(value) => selector(value).await.map(Maybe::just),
            None => Ok(Maybe::NOTHING),
        }
    }

    /// Keeps the payload only if the asynchronous `predicate` resolves to `true`.
    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        let Some(value) = self.inner else {
            return Self::NOTHING;
        };
        if predicate(&value).await {
            Self::just(value)
        } else {
            Self::NOTHING
        }
    }

    /// Awaits `consumer` with the payload, if there is one.
    pub async fn for_each_async<F, Fut>(self, consumer: F)
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Some(value) = self.inner {
            consumer(value).await;
        }
    }

    /// Returns the payload, or awaits `supplier` for a default.
    pub async fn or_else_async<F, Fut>(self, supplier: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self.inner {
            Some(value) => value,
            None => supplier().await,
        }
    }
}
