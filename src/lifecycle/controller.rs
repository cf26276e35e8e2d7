//! Session start/stop orchestration.
//!
//! Start runs validate → load → patch → apply and flips the session flag on.
//! Stop drains live connections, re-arms the engine with an inert loopback
//! configuration through the same pipeline, and flips the flag off.

use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::schema::ConfigDocument;
use crate::config::{loader, patcher, CONFIG_FILE_NAME};
use crate::engine::TunnelEngine;
use crate::error::{Error, Result};
use crate::lifecycle::state::SessionState;
use crate::net::{endpoint, ConnectionStats};

/// Runtime connection parameters for one session, immutable per call.
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    /// Overrides the controller's configured home directory when set; a
    /// relative path is resolved against the current working directory.
    pub home_dir: Option<PathBuf>,
    /// Local `"host:port"` entry point for client traffic.
    pub listener_address: String,
    /// Remote `"host:port"` proxy endpoint.
    pub upstream_address: String,
    /// Upstream kind as announced by the caller. Informational only; the
    /// actual variant is selected by the document's entry tags.
    pub proxy_kind: String,
    pub credential: String,
    pub cipher: String,
    pub obfuscation: String,
    pub obfuscation_param: String,
    pub protocol: String,
    pub protocol_param: String,
    pub udp_enabled: bool,
}

impl StartOptions {
    /// Options describing an inert loopback target, used by Stop to re-arm
    /// the engine instead of tearing it down.
    pub fn inert() -> Self {
        Self {
            listener_address: "127.0.0.1:0".to_string(),
            upstream_address: "127.0.0.1:0".to_string(),
            obfuscation: "plain".to_string(),
            protocol: "origin".to_string(),
            udp_enabled: true,
            ..Self::default()
        }
    }
}

/// Orchestrates the session lifecycle against an injected tunnel engine and
/// connection-statistics collaborator.
///
/// The whole Start/Stop pipeline is serialized by an internal mutex, so two
/// callers cannot interleave their load/patch/apply sequences. The session
/// flag itself stays lock-free for status queries.
pub struct SessionController {
    home_dir: PathBuf,
    engine: Arc<dyn TunnelEngine>,
    stats: Arc<dyn ConnectionStats>,
    state: SessionState,
    pipeline: Mutex<()>,
}

impl SessionController {
    pub fn new(
        home_dir: impl Into<PathBuf>,
        engine: Arc<dyn TunnelEngine>,
        stats: Arc<dyn ConnectionStats>,
    ) -> Self {
        Self {
            home_dir: home_dir.into(),
            engine,
            stats,
            state: SessionState::new(),
            pipeline: Mutex::new(()),
        }
    }

    /// Start a session with the given options.
    ///
    /// Any pipeline failure is returned before the session flag changes; the
    /// engine is only reached once validation, loading and patching have all
    /// succeeded.
    pub fn start(&self, options: &StartOptions) -> Result<()> {
        let _guard = self.pipeline.lock().unwrap_or_else(|e| e.into_inner());

        tracing::info!(
            listener = %options.listener_address,
            upstream = %options.upstream_address,
            proxy_kind = %options.proxy_kind,
            "starting session"
        );
        self.apply_options(options)?;
        self.state.set_running(true);
        tracing::info!("session started");
        Ok(())
    }

    /// Stop the current session.
    ///
    /// Drains the connection snapshot (close failures are logged and
    /// skipped), then re-arms the engine with [`StartOptions::inert`] through
    /// the same pipeline, then flips the flag off. Callable with no session
    /// active; an empty snapshot is not an error.
    pub fn stop(&self) -> Result<()> {
        let _guard = self.pipeline.lock().unwrap_or_else(|e| e.into_inner());

        self.drain_connections();
        self.apply_options(&StartOptions::inert())?;
        self.state.set_running(false);
        tracing::info!("session stopped, engine re-armed on loopback");
        Ok(())
    }

    /// Whether a session is currently active.
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// A handle to the session flag for status readers.
    pub fn state(&self) -> SessionState {
        self.state.clone()
    }

    /// The full pipeline shared by Start and Stop: validate both endpoints,
    /// load the document fresh from disk, patch it, hand it to the engine.
    fn apply_options(&self, options: &StartOptions) -> Result<()> {
        let listener = endpoint::validate(&options.listener_address)?;
        let upstream = endpoint::validate(&options.upstream_address)?;

        let path = self.config_path(options);
        let raw = loader::read_document(&path)?;
        let mut document = ConfigDocument::from_slice(&raw)?;

        let variant = patcher::patch(&mut document, &listener, &upstream, options)?;
        tracing::debug!(?variant, config = %path.display(), "document patched");

        self.engine
            .apply(&document, true)
            .map_err(Error::SchemaRejected)
    }

    /// Close every connection in the statistics snapshot. Best effort: a
    /// close failure is logged and the rest of the snapshot still gets
    /// closed.
    fn drain_connections(&self) {
        let snapshot = self.stats.snapshot();
        tracing::debug!(connections = snapshot.len(), "draining live connections");
        for conn in snapshot {
            if let Err(err) = conn.close() {
                tracing::warn!(connection_id = %conn.id(), error = %err, "failed to close connection");
            }
        }
    }

    /// Path of the configuration document for this call. The options' home
    /// directory wins when present, resolved against the current working
    /// directory if relative.
    fn config_path(&self, options: &StartOptions) -> PathBuf {
        let home = match &options.home_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => env::current_dir()
                .map(|cwd| cwd.join(dir))
                .unwrap_or_else(|_| dir.clone()),
            None => self.home_dir.clone(),
        };
        home.join(CONFIG_FILE_NAME)
    }
}
