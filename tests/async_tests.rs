#![cfg(feature = "async")]
//! Tests for the asynchronous `Maybe` combinators and the `Stream` scans.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use futures::stream::{self, StreamExt};
use maybe::sequence::MaybeStreamExt;
use maybe::{Maybe, MaybeError};
use rstest::rstest;

// =============================================================================
// Maybe async combinators
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_map_async_applies_to_value() {
    let result = Maybe::just(20)
        .map_async(|n| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            n + 1
        })
        .await;
    assert_eq!(result, Maybe::just(21));
}

#[rstest]
#[tokio::test]
async fn test_map_async_skips_nothing() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&called);

    let result = Maybe::<i32>::nothing()
        .map_async(|n| async move {
            flag.store(true, Ordering::SeqCst);
            n + 1
        })
        .await;

    assert_eq!(result, Maybe::nothing());
    assert!(!called.load(Ordering::SeqCst));
}

#[rstest]
#[case(Maybe::just(4), Maybe::just(2))]
#[case(Maybe::just(3), Maybe::nothing())]
#[case(Maybe::nothing(), Maybe::nothing())]
#[tokio::test]
async fn test_bind_async(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
    let result = input
        .bind_async(|n| async move {
            if n % 2 == 0 {
                Maybe::just(n / 2)
            } else {
                Maybe::nothing()
            }
        })
        .await;
    assert_eq!(result, expected);
}

#[rstest]
#[tokio::test]
async fn test_try_map_async_surfaces_error() {
    let parsed: Result<Maybe<i32>, String> = Maybe::just("12")
        .try_map_async(|text| async move { text.parse::<i32>().map_err(|error| error.to_string()) })
        .await;
    assert_eq!(parsed, Ok(Maybe::just(12)));

    let failed: Result<Maybe<i32>, String> = Maybe::just("x")
        .try_map_async(|text| async move { text.parse::<i32>().map_err(|error| error.to_string()) })
        .await;
    assert!(failed.is_err());
}

#[rstest]
#[tokio::test]
async fn test_filter_async() {
    let keep = Maybe::just(10)
        .filter_async(|n| {
            let n = *n;
            async move { n > 5 }
        })
        .await;
    let rejected = Maybe::just(1)
        .filter_async(|n| {
            let n = *n;
            async move { n > 5 }
        })
        .await;

    assert_eq!(keep, Maybe::just(10));
    assert_eq!(rejected, Maybe::nothing());
}

#[rstest]
#[tokio::test]
async fn test_for_each_async_and_or_else_async() {
    let counter = Arc::new(AtomicUsize::new(0));
    let shared = Arc::clone(&counter);
    Maybe::just(5_usize)
        .for_each_async(|n| async move {
            shared.fetch_add(n, Ordering::SeqCst);
        })
        .await;
    assert_eq!(counter.load(Ordering::SeqCst), 5);

    let fallback = Maybe::nothing().or_else_async(|| async { 7 }).await;
    assert_eq!(fallback, 7);
}

// =============================================================================
// Stream scans
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_stream_first_where_polls_until_match() {
    let pulled = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&pulled);
    let source = stream::iter(1..=7).inspect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let found = source.maybe_first_where(|n| *n > 2).await;

    assert_eq!(found, Maybe::just(3));
    assert_eq!(pulled.load(Ordering::SeqCst), 3);
}

#[rstest]
#[case(vec![], Ok(Maybe::nothing()))]
#[case(vec![1], Ok(Maybe::just(1)))]
#[case(vec![1, 2], Err(MaybeError::TooManyElements { filtered: false }))]
#[tokio::test]
async fn test_stream_single(#[case] items: Vec<i32>, #[case] expected: Result<Maybe<i32>, MaybeError>) {
    assert_eq!(stream::iter(items).maybe_single().await, expected);
}

#[rstest]
#[tokio::test]
async fn test_stream_single_where() {
    let unique = stream::iter(vec![1, 12, 3]).maybe_single_where(|n| *n >= 10).await;
    assert_eq!(unique, Ok(Maybe::just(12)));

    let duplicated = stream::iter(vec![10, 2, 30]).maybe_single_where(|n| *n >= 10).await;
    assert_eq!(duplicated, Err(MaybeError::TooManyElements { filtered: true }));
}

#[rstest]
#[tokio::test]
async fn test_stream_first_of_empty() {
    let found = stream::empty::<i32>().maybe_first().await;
    assert_eq!(found, Maybe::nothing());
}

#[rstest]
#[tokio::test]
async fn test_compact_stream_preserves_order() {
    let source = stream::iter(vec![Maybe::nothing(), Maybe::just(1), Maybe::nothing(), Maybe::just(2)]);
    let compacted: Vec<i32> = source.compact().collect().await;
    assert_eq!(compacted, vec![1, 2]);
}

#[rstest]
#[tokio::test]
async fn test_compact_stream_with_options() {
    let source = stream::iter(vec![Some("a"), None, Some("b")]);
    let compacted: Vec<&str> = MaybeStreamExt::compact(source).collect().await;
    assert_eq!(compacted, vec!["a", "b"]);
}
