//! Seam to the external tunnel-execution engine.

use crate::config::schema::ConfigDocument;
use crate::error::EngineError;

/// The external subsystem that performs actual traffic forwarding.
///
/// The controller mutates the engine only through this single entry point.
/// Applying includes the engine's own schema validation of the full document;
/// a rejection surfaces as [`crate::Error::SchemaRejected`].
pub trait TunnelEngine: Send + Sync {
    /// Validate and apply a patched configuration. The controller always
    /// passes `force_reload = true` so listeners are rebound even when the
    /// document is unchanged.
    fn apply(&self, document: &ConfigDocument, force_reload: bool) -> Result<(), EngineError>;
}
