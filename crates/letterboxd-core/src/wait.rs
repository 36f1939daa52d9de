//! Capped polling wait for client-rendered content

use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep};

/// How long to wait for a page to render, and how often to check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Give up after this long
    pub timeout: Duration,
    /// Delay between readiness checks
    pub poll_interval: Duration,
}

impl WaitPolicy {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }
}

/// Polls `probe` until it reports ready or the policy's timeout elapses
///
/// The probe always runs at least once, even with a zero timeout.
///
/// # Returns
/// `true` as soon as the probe succeeds, `false` if the timeout ran out
pub async fn wait_until<F, Fut>(policy: &WaitPolicy, mut probe: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = Instant::now() + policy.timeout;

    loop {
        if probe().await {
            return true;
        }

        let now = Instant::now();
        if now >= deadline {
            return false;
        }

        sleep(policy.poll_interval.min(deadline - now)).await;
    }
}
