//! Per-request cancellation and deadline.
//!
//! Every upstream call is driven through [`RequestContext::run`], so a
//! cancelled caller or an elapsed deadline aborts the call promptly instead
//! of waiting on the network.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::domain::errors::UpstreamError;

/// Cancellation signal and optional deadline threaded through a request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline elapses `timeout` from now.
    ///
    /// A timeout too large to represent as an instant means no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Instant::now()
            .checked_add(timeout)
            .map_or_else(Self::background, Self::with_deadline)
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Derive a context that is cancelled with its parent and shares its deadline.
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancel this context and every child.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// True once `cancel` was called here or on a parent.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Deadline, if any.
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Run `future` until it completes, the context is cancelled, or the
    /// deadline passes, whichever comes first.
    pub async fn run<T, F>(&self, future: F) -> Result<T, UpstreamError>
    where
        F: Future<Output = Result<T, UpstreamError>>,
    {
        if self.cancel.is_cancelled() {
            return Err(UpstreamError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(UpstreamError::Timeout);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(UpstreamError::Cancelled),
            () = deadline => Err(UpstreamError::Timeout),
            result = future => result,
        }
    }
}
