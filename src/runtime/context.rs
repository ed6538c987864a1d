//! # Execution Context
//!
//! A deadline shared by every step between parameter validation and the end
//! of the request. Work run through the context is dropped (cancelled) when
//! the deadline fires.

use crate::error::RetrievalError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Time-bounded context for one invocation
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext {
    deadline: Instant,
    timeout: Duration,
}

impl ExecutionContext {
    /// Context whose deadline is `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now() + timeout,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Time left before the deadline, zero once it has passed
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Drive `fut` until it completes or the deadline passes
    ///
    /// An expired context never polls `fut`.
    ///
    /// # Errors
    /// [`RetrievalError::DeadlineExceeded`] when the deadline passes first
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, RetrievalError>
    where
        F: Future,
    {
        if self.remaining().is_zero() {
            return Err(self.deadline_exceeded());
        }

        tokio::time::timeout_at(self.deadline, fut)
            .await
            .map_err(|_elapsed| self.deadline_exceeded())
    }

    fn deadline_exceeded(&self) -> RetrievalError {
        RetrievalError::DeadlineExceeded {
            timeout_ms: u64::try_from(self.timeout().as_millis()).unwrap_or(u64::MAX),
        }
    }
}
