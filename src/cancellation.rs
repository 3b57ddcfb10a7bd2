//! Cooperative cancellation for document scans.
//!
//! A scan polls its token once per line and stops early when the host flips it.
//! Cancellation truncates the result; it is never reported as a failure.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Boolean-queryable signal the host may raise while a scan is running.
pub trait CancellationToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Token that is never raised.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancelled;

impl CancellationToken for NeverCancelled {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancellationToken for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: CancellationToken + ?Sized> CancellationToken for Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: CancellationToken + ?Sized> CancellationToken for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
