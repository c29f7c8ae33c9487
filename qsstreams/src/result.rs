//! Outcome of one asynchronous fetch attempt.

use crate::error::Error;
use std::sync::Arc;

/// State of a fetch attempt
///
/// A fetch produces exactly two values: [`FetchResult::Loading`] followed by
/// either [`FetchResult::Success`] or [`FetchResult::Error`].
#[derive(Debug, Clone)]
pub enum FetchResult<T> {
    /// The request is in progress
    Loading,
    /// The request completed with a payload
    Success(T),
    /// The request failed; the cause is shared, never re-wrapped
    Error(Arc<Error>),
}

impl<T> FetchResult<T> {
    /// Cause of an `Error`
    pub fn error(&self) -> Option<&Arc<Error>> {
        match self {
            FetchResult::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors compare by identity: two `Error` states are equal only when they
/// carry the same cause.
impl<T: PartialEq> PartialEq for FetchResult<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FetchResult::Loading, FetchResult::Loading) => true,
            (FetchResult::Success(a), FetchResult::Success(b)) => a == b,
            (FetchResult::Error(a), FetchResult::Error(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_equality_is_identity() {
        let cause = Arc::new(Error::other("Oops"));
        let a: FetchResult<()> = FetchResult::Error(cause.clone());
        let b: FetchResult<()> = FetchResult::Error(cause);
        let c: FetchResult<()> = FetchResult::Error(Arc::new(Error::other("Oops")));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_error_accessor() {
        let loading: FetchResult<u8> = FetchResult::Loading;
        assert!(loading.error().is_none());
        assert!(FetchResult::Success(3u8).error().is_none());

        let cause = Arc::new(Error::other("Oops"));
        let failed: FetchResult<u8> = FetchResult::Error(cause.clone());
        assert!(Arc::ptr_eq(failed.error().unwrap(), &cause));
    }
}
