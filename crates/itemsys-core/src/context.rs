//! Per-request call context: deadline plus cancellation.
//!
//! A `CallContext` is created when a request is accepted and dropped when
//! its response is written. It is owned by that request alone; clones stay
//! within the same request's pipeline.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{ServiceError, ServiceResult};

/// Deadline and cancellation signal for one backend call chain.
#[derive(Debug, Clone)]
pub struct CallContext {
    deadline: Instant,
    cancel: CancellationToken,
}

impl CallContext {
    /// Context with a fresh cancellation token, expiring `timeout` from now.
    pub fn new(timeout: Duration) -> Self {
        Self::with_cancel(timeout, &CancellationToken::new())
    }

    /// Context whose cancellation chains off `parent`: cancelling the
    /// parent (e.g. the inbound connection going away) cancels this
    /// context as well.
    pub fn with_cancel(timeout: Duration, parent: &CancellationToken) -> Self {
        Self {
            deadline: Instant::now() + timeout,
            cancel: parent.child_token(),
        }
    }

    /// The instant at which backend calls under this context fail.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left before the deadline; zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// The cancellation token backing this context.
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Whether the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Run a backend call under this context.
    ///
    /// Resolves to `DeadlineExceeded` once the deadline passes and to
    /// `Cancelled` when the token fires, whichever happens first. The
    /// inner future is dropped either way; nothing is retried.
    pub async fn run<T>(
        &self,
        call: impl Future<Output = ServiceResult<T>>,
    ) -> ServiceResult<T> {
        tokio::select! {
            _ = self.cancel.cancelled() => Err(ServiceError::Cancelled),
            outcome = tokio::time::timeout_at(self.deadline, call) => match outcome {
                Ok(result) => result,
                Err(_) => Err(ServiceError::DeadlineExceeded),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_passes_through_a_completed_call() {
        let ctx = CallContext::new(Duration::from_secs(1));
        let result = ctx.run(async { Ok(7u32) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn run_fails_with_deadline_exceeded_when_the_call_hangs() {
        let ctx = CallContext::new(Duration::from_millis(20));
        let result: ServiceResult<()> = ctx.run(std::future::pending()).await;
        assert!(matches!(result, Err(ServiceError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn cancelling_the_parent_cancels_the_call() {
        let parent = CancellationToken::new();
        let ctx = CallContext::with_cancel(Duration::from_secs(5), &parent);

        let killer = parent.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            killer.cancel();
        });

        let result: ServiceResult<()> = ctx.run(std::future::pending()).await;
        assert!(matches!(result, Err(ServiceError::Cancelled)));
    }

    #[tokio::test]
    async fn remaining_saturates_at_zero() {
        let ctx = CallContext::new(Duration::from_millis(1));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(ctx.remaining(), Duration::ZERO);
    }
}
