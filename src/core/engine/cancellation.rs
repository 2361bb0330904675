use std::time::Instant;

/// How many cells a generation worker computes between cancellation checks.
pub const CANCEL_CHECK_INTERVAL_CELLS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field generation cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Polled by generation workers between batches of cells. Implementations
/// must be cheap: a frame-budget render polls this thousands of times.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Token for renders that must run to completion, such as snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Cancels once the wall clock passes a fixed instant. Used to bound a frame's
/// engine invocation to the frame budget; a generation that trips the deadline
/// discards its output and the previous field is shown instead.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    #[must_use]
    pub fn at(expires_at: Instant) -> Self {
        Self { expires_at }
    }

    #[must_use]
    pub fn after(budget: std::time::Duration) -> Self {
        Self {
            expires_at: Instant::now() + budget,
        }
    }
}

impl CancelToken for Deadline {
    #[inline]
    fn is_cancelled(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
