//! Endpoint address validation.
//!
//! Runtime options carry listener and upstream addresses as `"host:port"`
//! strings; nothing downstream touches them until they have passed through
//! [`validate`].

use std::fmt;

use crate::error::Error;

/// A validated `host:port` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Validate a `"host:port"` string into an [`Endpoint`].
///
/// Splits on the last colon so IPv6 literals survive; a bracketed IPv6 host
/// has its brackets stripped. Pure function, no side effects.
pub fn validate(addr: &str) -> Result<Endpoint, Error> {
    let (host, port) = addr
        .rsplit_once(':')
        .ok_or_else(|| Error::MalformedEndpoint(addr.to_string()))?;

    let host = host
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(host);

    if host.is_empty() {
        return Err(Error::EmptyHost(addr.to_string()));
    }

    let port = port
        .parse::<u16>()
        .map_err(|_| Error::MalformedPort(addr.to_string()))?;

    Ok(Endpoint {
        host: host.to_string(),
        port,
    })
}
