//! Session running flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Concurrently readable/writable flag recording whether a session is active.
///
/// Cloning hands out another handle to the same flag, so status readers can
/// keep one without holding the controller. Individual loads and stores are
/// atomic; no ordering across the Start/Stop pipeline is implied — a reader
/// observing `true` may race an in-flight Stop.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    running: Arc<AtomicBool>,
}

impl SessionState {
    /// New state, not running.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::SeqCst);
    }
}
