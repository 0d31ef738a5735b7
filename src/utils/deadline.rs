//! Helpers for bounding how long a call may wait on the backend
//!
//! The HTTP client has no timeout of its own; call sites that need a bounded
//! wait wrap the call here and get a distinct [`AppError::Timeout`] when the
//! bound is hit.
use crate::error::AppError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Runs `operation`, aborting it once `limit` has elapsed
///
/// The inner future is dropped on expiry, which cancels the in-flight
/// request.
///
/// # Examples
/// ```ignore
/// use storefront_client::utils::deadline::with_timeout;
///
/// let data: serde_json::Value =
///     with_timeout(Duration::from_secs(5), client.get("/api/products")).await?;
/// ```
pub async fn with_timeout<F, T>(limit: Duration, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Backend did not answer within {}ms", limit.as_millis());
            Err(AppError::Timeout(limit))
        }
    }
}
