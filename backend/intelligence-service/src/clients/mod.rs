// ============================================
// Upstream collaborators
// ============================================
//
// Backend data API (courses, enrollments) and the content retrieval
// store. Both are fallible; callers go through `fetch_or_empty` so a
// slow or failing upstream degrades to an empty collection instead of
// failing the request.

pub mod backend;
pub mod retrieval;

pub use backend::{BackendClient, HttpBackendClient};
pub use retrieval::{ContentRetriever, HttpContentRetriever};

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Unexpected payload: {0}")]
    Payload(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Run an upstream call under `limit`; errors and timeouts yield an empty Vec
pub async fn fetch_or_empty<F, T>(upstream: &str, limit: Duration, future: F) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>>>,
{
    match timeout(limit, future).await {
        Ok(Ok(items)) => items,
        Ok(Err(e)) => {
            warn!(upstream = upstream, error = %e, "Upstream fetch failed, using empty result");
            Vec::new()
        }
        Err(_) => {
            warn!(
                upstream = upstream,
                timeout_ms = limit.as_millis() as u64,
                "Upstream fetch timed out, using empty result"
            );
            Vec::new()
        }
    }
}
