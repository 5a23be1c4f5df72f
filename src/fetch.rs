//! Asynchronous data-fetch utility
//!
//! Owns the lifecycle of one outbound fetch per screen visit. The result is
//! delivered through [`FetchState`], an explicit state machine driving the
//! render path: loading, not-found, and network failure each render
//! distinctly instead of collapsing into per-field fallbacks.
//!
//! Dropping a [`Fetcher`] aborts the in-flight task, so leaving the screen
//! can never deliver a stale result afterwards.

use std::future::Future;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::TmdbError;

/// Why a fetch failed, at the granularity the UI cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The record does not exist (HTTP 404)
    NotFound,
    /// Anything else: transport failure, server error, bad payload
    Network(String),
}

impl FetchError {
    /// Classify an API-layer error for rendering
    pub fn classify(err: anyhow::Error) -> Self {
        match err.downcast_ref::<TmdbError>() {
            Some(TmdbError::NotFound) => FetchError::NotFound,
            _ => FetchError::Network(err.to_string()),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "not found"),
            FetchError::Network(msg) => write!(f, "{}", msg),
        }
    }
}

/// State of an asynchronous fetch, as seen by the render loop
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// No fetch started yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Fetch completed with data
    Loaded(T),
    /// Fetch failed
    Failed(FetchError),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The loaded value, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Handle to one in-flight fetch
///
/// The producer future runs on the tokio runtime; the UI tick loop polls
/// [`Fetcher::try_take`] without blocking. The task is aborted on drop.
#[derive(Debug)]
pub struct Fetcher<T> {
    rx: oneshot::Receiver<Result<T, FetchError>>,
    handle: JoinHandle<()>,
}

impl<T: Send + 'static> Fetcher<T> {
    /// Spawn the producer and return a handle to its eventual result
    pub fn spawn<F>(producer: F) -> Self
    where
        F: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let result = producer.await.map_err(FetchError::classify);
            // Receiver may already be gone; nothing to do then
            let _ = tx.send(result);
        });
        Self { rx, handle }
    }

    /// Take the result if the fetch has finished; `None` while in flight
    pub fn try_take(&mut self) -> Option<Result<T, FetchError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(FetchError::Network(
                "fetch task ended without a result".to_string(),
            ))),
        }
    }
}

impl<T> Drop for Fetcher<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_default_is_idle() {
        let state: FetchState<u32> = FetchState::default();
        assert_eq!(state, FetchState::Idle);
        assert!(!state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_fetch_state_accessors() {
        let loaded = FetchState::Loaded(7u32);
        assert_eq!(loaded.data(), Some(&7));

        let failed: FetchState<u32> = FetchState::Failed(FetchError::NotFound);
        assert_eq!(failed.error(), Some(&FetchError::NotFound));
        assert!(FetchState::<u32>::Loading.is_loading());
    }

    #[test]
    fn test_classify_not_found() {
        let err = anyhow::Error::new(TmdbError::NotFound);
        assert_eq!(FetchError::classify(err), FetchError::NotFound);
    }

    #[test]
    fn test_classify_server_error_as_network() {
        let err = anyhow::Error::new(TmdbError::ServerError(502));
        match FetchError::classify(err) {
            FetchError::Network(msg) => assert!(msg.contains("502")),
            other => panic!("expected Network, got {:?}", other),
        }
    }
}
