use std::{future::Future, time::Duration};

use crate::server::error::generation::SlotError;

/// Timeout for single outbound calls that do not pick their own.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Runs an outbound call, abandoning it once `timeout` elapses.
///
/// On timeout the call future is dropped, which aborts the underlying request and
/// releases its timer. The timer is likewise released as soon as the call finishes.
///
/// # Arguments
/// - `timeout` - Upper bound for the whole call; `None` uses [`DEFAULT_FETCH_TIMEOUT`]
/// - `call` - The request, including reading its body
///
/// # Returns
/// - `Ok(T)` - The call finished in time
/// - `Err(SlotError::Timeout)` - The call was still pending when the timeout elapsed
/// - `Err(_)` - Whatever error the call itself produced
pub async fn fetch_with_timeout<F, T>(timeout: Option<Duration>, call: F) -> Result<T, SlotError>
where
    F: Future<Output = Result<T, SlotError>>,
{
    let timeout = timeout.unwrap_or(DEFAULT_FETCH_TIMEOUT);

    tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| SlotError::Timeout(timeout))?
}
