//! Error types for the session pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a Start/Stop pipeline run.
///
/// Every variant is fatal to the run that produced it; none of them leave a
/// half-applied configuration behind. The caller decides whether to retry.
#[derive(Debug, Error)]
pub enum Error {
    /// The address string could not be split into host and port.
    #[error("malformed endpoint {0:?}: expected host:port")]
    MalformedEndpoint(String),

    /// The address split left a zero-length host.
    #[error("endpoint {0:?} has an empty host")]
    EmptyHost(String),

    /// The port part of the address is not a valid port number.
    #[error("endpoint {0:?} has a malformed port")]
    MalformedPort(String),

    /// No configuration document at the expected path.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// The configuration document exists but could not be read.
    #[error("failed to read configuration file {path}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document exists but contains zero bytes.
    #[error("configuration file {0} is empty")]
    EmptyDocument(PathBuf),

    /// The document bytes are not a well-formed configuration.
    #[error("failed to parse configuration document")]
    ParseFailure(#[from] serde_yaml::Error),

    /// The document's proxy list is empty.
    #[error("configuration must declare at least one upstream proxy entry")]
    NoUpstreamProxy,

    /// The first proxy entry matches neither recognized variant tag pair.
    #[error("first proxy entry is not a recognized relay shape (type={type_tag:?}, name={name_tag:?})")]
    UnsupportedProxyEntry {
        type_tag: Option<String>,
        name_tag: Option<String>,
    },

    /// The tunnel engine rejected the patched configuration.
    #[error("engine rejected the patched configuration")]
    SchemaRejected(#[source] EngineError),
}

/// Opaque rejection reason reported by the tunnel engine.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Convenience alias for pipeline results.
pub type Result<T> = std::result::Result<T, Error>;
