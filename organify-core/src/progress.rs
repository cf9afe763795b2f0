//! Progress reporting and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Receives human-readable status updates from a running operation.
///
/// Called at least once per processed item, with 0% at the start and 100% at
/// the end of every operation. A cancelled run ends with a terminal 0%
/// "cancelled" update instead. Implementations must be safe to call from a
/// worker thread.
pub trait ProgressSink: Send + Sync {
    fn update(&self, message: &str, percent: Option<u8>);
}

impl<F> ProgressSink for F
where
    F: Fn(&str, Option<u8>) + Send + Sync,
{
    fn update(&self, message: &str, percent: Option<u8>) {
        self(message, percent);
    }
}

/// Sink for callers that do not track progress.
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn update(&self, _message: &str, _percent: Option<u8>) {}
}

/// Shared flag polled at the top of every per-item loop.
///
/// Once observed set, an operation stops promptly and returns its partial
/// count; completed filesystem mutations are not rolled back.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::new();
        let clone = flag.clone();
        assert!(!flag.is_cancelled());

        clone.cancel();
        assert!(flag.is_cancelled());
        assert!(clone.is_cancelled());
    }
}
