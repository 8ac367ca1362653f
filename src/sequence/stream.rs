//! Asynchronous counterparts of the sequence combinators over [`Stream`].
//!
//! The traversal contracts match [`MaybeIteratorExt`](super::MaybeIteratorExt):
//! items are pulled one at a time and pulling stops as soon as the answer is
//! known. The stream is consumed by value and dropped before the returned
//! future completes.

use std::pin::{Pin, pin};
use std::task::{Context, Poll, ready};

use futures::stream::{Stream, StreamExt};
use pin_project_lite::pin_project;

use crate::error::MaybeError;
use crate::maybe::{Maybe, ToMaybe};

/// `Maybe`-producing scans over any [`Stream`].
///
/// # Examples
///
/// ```rust
/// use futures::stream;
/// use maybe::Maybe;
/// use maybe::sequence::MaybeStreamExt;
///
/// futures::executor::block_on(async {
///     let found = stream::iter(1..=7).maybe_first_where(|n| *n > 2).await;
///     assert_eq!(found, Maybe::just(3));
/// });
/// ```
#[allow(async_fn_in_trait)]
pub trait MaybeStreamExt: Stream + Sized {
    /// Resolves to the first item, or `Nothing` for an empty stream.
    async fn maybe_first(self) -> Maybe<Self::Item> {
        let mut stream = pin!(self);
        Maybe::from_option(stream.next().await)
    }

    /// Resolves to the first item satisfying `predicate`.
    async fn maybe_first_where<P>(self, mut predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut stream = pin!(self);
        while let Some(item) = stream.next().await {
            if predicate(&item) {
                return Maybe::just(item);
            }
        }
        Maybe::nothing()
    }

    /// Resolves to the only item of the stream.
    ///
    /// # Errors
    ///
    /// Resolves to [`MaybeError::TooManyElements`] if there is a second item.
    async fn maybe_single(self) -> Result<Maybe<Self::Item>, MaybeError> {
        let mut stream = pin!(self);
        let Some(candidate) = stream.next().await else {
            return Ok(Maybe::nothing());
        };
        if stream.next().await.is_some() {
            tracing::debug!("single item requested from a stream with more than one");
            return Err(MaybeError::TooManyElements { filtered: false });
        }
        Ok(Maybe::just(candidate))
    }

    /// Resolves to the only item satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Resolves to [`MaybeError::TooManyElements`] if a second item matches.
    async fn maybe_single_where<P>(self, mut predicate: P) -> Result<Maybe<Self::Item>, MaybeError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut stream = pin!(self);
        let mut candidate = None;
        while let Some(item) = stream.next().await {
            if !predicate(&item) {
                continue;
            }
            if candidate.is_some() {
                tracing::debug!("single match requested from a stream with more than one");
                return Err(MaybeError::TooManyElements { filtered: true });
            }
            candidate = Some(item);
        }
        Ok(Maybe::from_option(candidate))
    }

    /// Keeps only the present values of a stream of optional items.
    fn compact(self) -> CompactStream<Self>
    where
        Self::Item: ToMaybe,
    {
        CompactStream { stream: self }
    }
}

impl<S: Stream> MaybeStreamExt for S {}

pin_project! {
    /// A stream yielding only the present values of its source.
    ///
    /// Created by [`MaybeStreamExt::compact`].
    #[derive(Debug, Clone)]
    #[must_use = "streams do nothing unless polled"]
    pub struct CompactStream<S> {
        #[pin]
        stream: S,
    }
}

impl<S> Stream for CompactStream<S>
where
    S: Stream,
    S::Item: ToMaybe,
{
    type Item = <S::Item as ToMaybe>::Item;

    fn poll_next(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match ready!(this.stream.as_mut().poll_next(context)) {
                Some(item) => {
                    if let Some(value) = item.to_maybe().into_option() {
                        return Poll::Ready(Some(value));
                    }
                }
                None => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.stream.size_hint().1)
    }
}
