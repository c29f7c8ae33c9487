//! Repository turning one fetch into a `Loading → Success | Error` sequence.
//!
//! The fetch is driven by the stream itself: dropping the stream drops the
//! request. Every failure (transport, decoding, panicking source) is
//! captured and emitted as [`FetchResult::Error`] instead of being
//! propagated.

use crate::client::StreamSource;
use crate::error::Error;
use crate::models::Stream;
use crate::result::FetchResult;
use futures::FutureExt;
use futures::stream::BoxStream;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, warn};

/// Boxed sequence of fetch states
pub type ResultStream<T> = BoxStream<'static, FetchResult<T>>;

/// Source of stream lists for the presentation layer
pub trait StreamRepository: Send + Sync {
    /// Cold sequence of exactly two states per call
    fn get_streams(&self) -> ResultStream<Vec<Stream>>;
}

/// Repository backed by a remote [`StreamSource`]
#[derive(Clone)]
pub struct StreamRepositoryImpl {
    source: Arc<dyn StreamSource>,
}

impl StreamRepositoryImpl {
    pub fn new(source: Arc<dyn StreamSource>) -> Self {
        Self { source }
    }
}

impl StreamRepository for StreamRepositoryImpl {
    fn get_streams(&self) -> ResultStream<Vec<Stream>> {
        let source = self.source.clone();

        Box::pin(async_stream::stream! {
            yield FetchResult::Loading;

            let fetch = async move {
                let response = source.fetch().await?;
                Ok::<_, Error>(response.into_streams())
            };

            match AssertUnwindSafe(fetch).catch_unwind().await {
                Ok(Ok(streams)) => {
                    debug!(count = streams.len(), "Streams fetched");
                    yield FetchResult::Success(streams);
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "Failed to fetch streams");
                    yield FetchResult::Error(Arc::new(e));
                }
                Err(panic) => {
                    let reason = panic
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| panic.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "fetch panicked".to_string());
                    warn!(error = %reason, "Stream fetch panicked");
                    yield FetchResult::Error(Arc::new(Error::Task(reason)));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::{StreamResponse, StreamsResponse};
    use async_trait::async_trait;
    use futures::StreamExt;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSource {
        outcome: fn() -> Result<StreamsResponse>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(outcome: fn() -> Result<StreamsResponse>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl StreamSource for FakeSource {
        async fn fetch(&self) -> Result<StreamsResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl StreamSource for PanickingSource {
        async fn fetch(&self) -> Result<StreamsResponse> {
            panic!("source exploded");
        }
    }

    fn two_videos() -> Result<StreamsResponse> {
        Ok(StreamsResponse {
            videos: vec![
                StreamResponse {
                    name: "Name1".into(),
                    author: "Author1".into(),
                    url: "Url1".into(),
                },
                StreamResponse {
                    name: "Name2".into(),
                    author: "Author2".into(),
                    url: "Url2".into(),
                },
            ],
        })
    }

    #[tokio::test]
    async fn test_success_emits_loading_then_mapped_list() {
        let repository = StreamRepositoryImpl::new(FakeSource::new(two_videos));

        let states: Vec<_> = repository.get_streams().collect().await;

        assert_eq!(
            states,
            vec![
                FetchResult::Loading,
                FetchResult::Success(vec![
                    Stream::new("Name1", "Author1", "Url1"),
                    Stream::new("Name2", "Author2", "Url2"),
                ]),
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_emits_loading_then_error() {
        let repository =
            StreamRepositoryImpl::new(FakeSource::new(|| Err(Error::other("Network down"))));

        let states: Vec<_> = repository.get_streams().collect().await;

        assert_eq!(states.len(), 2);
        assert_eq!(states[0], FetchResult::Loading);
        let cause = states[1].error().expect("expected an error state");
        assert!(matches!(cause.as_ref(), Error::Other(msg) if msg == "Network down"));
    }

    #[tokio::test]
    async fn test_empty_list_is_success() {
        let repository =
            StreamRepositoryImpl::new(FakeSource::new(|| Ok(StreamsResponse { videos: vec![] })));

        let states: Vec<_> = repository.get_streams().collect().await;

        assert_eq!(states, vec![FetchResult::Loading, FetchResult::Success(vec![])]);
    }

    #[tokio::test]
    async fn test_panicking_fetch_becomes_error() {
        let repository = StreamRepositoryImpl::new(Arc::new(PanickingSource));

        let states: Vec<_> = repository.get_streams().collect().await;

        assert_eq!(states.len(), 2);
        assert!(matches!(
            states[1].error().map(|e| e.as_ref()),
            Some(Error::Task(_))
        ));
    }

    #[tokio::test]
    async fn test_sequence_is_cold() {
        let source = FakeSource::new(two_videos);
        let repository = StreamRepositoryImpl::new(source.clone());

        let first = repository.get_streams();
        let second = repository.get_streams();
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);

        let _: Vec<_> = first.collect().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        let _: Vec<_> = second.collect().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    /// Completes after a delay, counting finished fetches.
    struct SlowSource {
        completed: AtomicUsize,
    }

    #[async_trait]
    impl StreamSource for SlowSource {
        async fn fetch(&self) -> Result<StreamsResponse> {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            two_videos()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_stream_cancels_fetch() {
        let source = Arc::new(SlowSource {
            completed: AtomicUsize::new(0),
        });
        let repository = StreamRepositoryImpl::new(source.clone());

        let mut states = repository.get_streams();
        assert_eq!(states.next().await, Some(FetchResult::Loading));
        let pending = tokio::time::timeout(std::time::Duration::from_secs(1), states.next()).await;
        assert!(pending.is_err());
        drop(states);

        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        assert_eq!(source.completed.load(Ordering::SeqCst), 0);
    }
}
