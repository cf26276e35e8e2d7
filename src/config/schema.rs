//! Configuration document model.
//!
//! The on-disk document is operator-authored YAML. Only the fields this
//! controller rewrites are typed; everything else round-trips untouched
//! through a flattened mapping so operator edits outside our reach survive a
//! load/patch/apply cycle byte-for-byte in meaning.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// One record in the document's proxy list. Kept as a raw mapping: the two
/// recognized variants share it, and unrecognized entries must pass through
/// unmodified.
pub type ProxyEntry = Mapping;

/// The structured configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Whether the engine may listen on non-loopback interfaces. Forced on
    /// by the patcher; the effective bind is still constrained by
    /// `bind_address`.
    #[serde(rename = "allow-lan", default)]
    pub allow_lan: bool,

    /// Local SOCKS listener port.
    #[serde(rename = "socks-port", default)]
    pub socks_port: u16,

    /// Address the local listener binds to.
    #[serde(rename = "bind-address", default = "default_bind_address")]
    pub bind_address: String,

    /// Upstream proxy entries. Entry 0 is the one this controller manages;
    /// operators may keep additional entries for manual use.
    #[serde(rename = "proxies", alias = "Proxy", default)]
    pub proxies: Vec<ProxyEntry>,

    /// Everything else in the document, preserved verbatim.
    #[serde(flatten)]
    pub rest: Mapping,
}

fn default_bind_address() -> String {
    "*".to_string()
}

impl ConfigDocument {
    /// Deserialize a document from raw YAML bytes.
    pub fn from_slice(raw: &[u8]) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_slice(raw)
    }
}

/// The two proxy-entry shapes this controller knows how to patch.
///
/// Disambiguated by an exact, case-sensitive `(type, name)` tag pair; any
/// other pair is an unsupported entry and aborts the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyVariant {
    /// `(type = "ssr", name = "ssr")`: carries password, cipher, obfuscation
    /// and protocol parameters in addition to the server address.
    ObfuscatedRelay,
    /// `(type = "socks5", name = "trojan")`: a plain SOCKS5 hand-off; only
    /// server, port and udp are managed.
    SocksRelay,
}

/// Classify a proxy entry against the recognized variant tag pairs.
pub fn classify(entry: &ProxyEntry) -> Option<ProxyVariant> {
    match (tag(entry, "type"), tag(entry, "name")) {
        (Some("ssr"), Some("ssr")) => Some(ProxyVariant::ObfuscatedRelay),
        (Some("socks5"), Some("trojan")) => Some(ProxyVariant::SocksRelay),
        _ => None,
    }
}

/// String value of a tag field, if present and a string.
pub(crate) fn tag<'a>(entry: &'a ProxyEntry, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}
