//! Proactive rate limiting for the question endpoint
//!
//! The bank rejects question requests issued closer together than a minimum
//! interval. The limiter gates each dispatch on the elapsed time since the
//! previous one completed, so the rejection is never observed in normal
//! operation. Timestamps are recorded when a request finishes, not when it
//! starts: a slow call must not understate the next required gap.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::debug;

use crate::client::{ClientError, ClientResult};
use crate::shutdown::ShutdownCoordinator;

/// A monotonic time source.
///
/// Injected so tests can drive elapsed time deterministically instead of
/// sleeping through the real interval.
pub trait Clock: Send + Sync {
    /// Current instant on this clock
    fn now(&self) -> Instant;
}

/// Wall-clock time source used outside of tests
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Enforces a minimum interval between question-endpoint dispatches.
///
/// Scoped to one client instance; the owning client serializes fetches, so
/// the limiter itself needs no internal locking.
pub struct RateLimiter {
    min_interval: Duration,
    last_dispatch: Option<Instant>,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Create a limiter on the system clock
    ///
    /// # Arguments
    /// * `min_interval` - Minimum gap between dispatch completions and the
    ///   next dispatch start
    pub fn new(min_interval: Duration) -> Self {
        Self::with_clock(min_interval, Arc::new(SystemClock))
    }

    /// Create a limiter on an explicit time source
    pub fn with_clock(min_interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            min_interval,
            last_dispatch: None,
            clock,
        }
    }

    /// The configured minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// The time source this limiter reads
    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    /// Remaining delay before the next dispatch may start.
    ///
    /// `None` when no dispatch has been recorded yet or the interval has
    /// already elapsed.
    pub fn required_delay(&self) -> Option<Duration> {
        let last = self.last_dispatch?;
        let elapsed = self.clock.now().saturating_duration_since(last);
        if elapsed < self.min_interval {
            Some(self.min_interval - elapsed)
        } else {
            None
        }
    }

    /// Suspend until the minimum interval since the last recorded dispatch
    /// has passed. Returns immediately when no wait is needed.
    ///
    /// # Errors
    /// [`ClientError::Cancelled`] when `shutdown` is triggered during the
    /// wait.
    pub async fn gate(&self, shutdown: Option<&ShutdownCoordinator>) -> ClientResult<()> {
        let Some(delay) = self.required_delay() else {
            return Ok(());
        };

        if let Some(shutdown) = shutdown {
            if shutdown.is_shutdown_requested() {
                return Err(ClientError::Cancelled);
            }
        }

        debug!("Rate gate: waiting {:?} before next dispatch", delay);

        match shutdown {
            Some(shutdown) => {
                tokio::select! {
                    _ = sleep(delay) => Ok(()),
                    _ = shutdown.wait_for_shutdown() => Err(ClientError::Cancelled),
                }
            }
            None => {
                sleep(delay).await;
                Ok(())
            }
        }
    }

    /// Record that a dispatch just completed.
    ///
    /// Called after the question request finishes, whether it succeeded or
    /// failed; token and category calls are never recorded.
    pub fn record_dispatch(&mut self) {
        self.last_dispatch = Some(self.clock.now());
    }
}
