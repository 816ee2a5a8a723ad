//! Bounded status-polling loop shared by both action runners.

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::errors::{RunError, RunResult};
use crate::infrastructure::alex::ApiError;

/// Interval and upper bound for a status-polling loop.
#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    /// Delay between consecutive probes.
    pub interval: Duration,
    /// Upper bound on the total wait; exceeding it is a [`RunError::Timeout`].
    pub max_wait: Duration,
}

/// Probe until the server reports the operation inactive.
///
/// The first probe fires immediately; afterwards the loop sleeps
/// `interval` between probes. The loop refuses to start a sleep that would
/// cross `max_wait` and fails with the timeout kind instead, so a hung
/// server cannot stall the run indefinitely.
pub async fn wait_until_inactive<F, Fut>(settings: PollSettings, mut probe: F) -> RunResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, ApiError>>,
{
    let started = Instant::now();
    loop {
        let active = probe().await?;
        if !active {
            return Ok(());
        }
        debug!(elapsed_secs = started.elapsed().as_secs(), "still active");
        if started.elapsed() + settings.interval > settings.max_wait {
            return Err(RunError::Timeout(settings.max_wait.as_secs()));
        }
        tokio::time::sleep(settings.interval).await;
    }
}
