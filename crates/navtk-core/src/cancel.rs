//! Cooperative cancellation for long-running passes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared one-bit cancellation request.
///
/// Clones observe the same flag. Checking is advisory: a routine that never
/// calls [`is_cancelled`](Self::is_cancelled) cannot be stopped through it.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a flag in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Visible to every clone.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Clear a previous request so the flag can be reused.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}
