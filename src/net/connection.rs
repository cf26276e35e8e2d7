//! Connection handles used during session teardown.
//!
//! The controller never owns live connections; the engine's statistics
//! collaborator hands out a point-in-time snapshot of closable handles when a
//! session is being stopped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global atomic counter for connection IDs.
/// Relaxed ordering is sufficient since we only need uniqueness, not synchronization.
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a connection, used in teardown logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Generate a new unique connection ID.
    pub fn new() -> Self {
        Self(CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// A live connection that can be closed independently of its peers.
pub trait ClosableConnection: Send {
    /// Identifier for logging.
    fn id(&self) -> ConnectionId;

    /// Close the connection. A failure here is logged and skipped by the
    /// controller; it never blocks closing the rest of the snapshot.
    fn close(&self) -> std::io::Result<()>;
}

/// Point-in-time view of the engine's live connections.
///
/// Implemented by the hosting application over the engine's statistics
/// subsystem. The snapshot is a copy: connections opened after the call are
/// not included and belong to the next teardown.
pub trait ConnectionStats: Send + Sync {
    fn snapshot(&self) -> Vec<Box<dyn ClosableConnection>>;
}
