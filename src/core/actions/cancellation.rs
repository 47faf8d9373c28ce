use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Pixels processed between cancellation polls inside a row.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

/// A render stopped early because its result is no longer wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render abandoned for a newer request")
    }
}

impl Error for Cancelled {}

/// Polled by parallel actions between units of work.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Token for renders that always run to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Cancels the render of generation `job` once a later generation has been
/// submitted or shutdown has been requested.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    job: u64,
    latest: &'a AtomicU64,
    shutdown: &'a AtomicBool,
}

impl<'a> GenerationToken<'a> {
    #[must_use]
    pub fn new(job: u64, latest: &'a AtomicU64, shutdown: &'a AtomicBool) -> Self {
        Self {
            job,
            latest,
            shutdown,
        }
    }

    #[must_use]
    pub fn job(&self) -> u64 {
        self.job
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed) || self.latest.load(Ordering::Relaxed) != self.job
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
