//! Splices validated runtime options into a loaded configuration document.
//!
//! Only the FIRST proxy entry is managed; an exact `(type, name)` tag match
//! selects which field set gets overwritten. Secondary entries are
//! operator-authored and never touched.

use serde_yaml::Value;

use crate::config::schema::{classify, tag, ConfigDocument, ProxyEntry, ProxyVariant};
use crate::error::Error;
use crate::lifecycle::StartOptions;
use crate::net::Endpoint;

/// Patch `document` in place with the validated listener and upstream
/// endpoints plus the options' tunnel parameters.
///
/// Classification happens before any write, so a failure leaves the document
/// exactly as loaded. Returns the variant that was patched.
pub fn patch(
    document: &mut ConfigDocument,
    listener: &Endpoint,
    upstream: &Endpoint,
    options: &StartOptions,
) -> Result<ProxyVariant, Error> {
    if document.proxies.is_empty() {
        return Err(Error::NoUpstreamProxy);
    }

    let entry = &mut document.proxies[0];
    let variant = classify(entry).ok_or_else(|| Error::UnsupportedProxyEntry {
        type_tag: tag(entry, "type").map(str::to_string),
        name_tag: tag(entry, "name").map(str::to_string),
    })?;

    // The engine's schema takes the entry port as text; keep it that way.
    set(entry, "server", upstream.host.as_str().into());
    set(entry, "port", upstream.port.to_string().into());
    if variant == ProxyVariant::ObfuscatedRelay {
        set(entry, "password", options.credential.as_str().into());
        set(entry, "cipher", options.cipher.as_str().into());
        set(entry, "obfs", options.obfuscation.as_str().into());
        set(entry, "obfsparam", options.obfuscation_param.as_str().into());
        set(entry, "protocol", options.protocol.as_str().into());
        set(entry, "protocolparam", options.protocol_param.as_str().into());
    }
    set(entry, "udp", options.udp_enabled.into());

    // Session-wide listener fields, variant-independent. allow-lan is forced
    // on; the effective bind is still constrained by bind-address.
    document.allow_lan = true;
    document.socks_port = listener.port;
    document.bind_address = listener.host.clone();

    Ok(variant)
}

fn set(entry: &mut ProxyEntry, key: &str, value: Value) {
    entry.insert(key.into(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;

    fn options() -> StartOptions {
        StartOptions {
            listener_address: "127.0.0.1:7890".into(),
            upstream_address: "1.2.3.4:443".into(),
            credential: "p".into(),
            cipher: "aes-256-cfb".into(),
            obfuscation: "plain".into(),
            protocol: "origin".into(),
            udp_enabled: true,
            ..StartOptions::default()
        }
    }

    fn endpoints() -> (Endpoint, Endpoint) {
        (
            crate::net::endpoint::validate("127.0.0.1:7890").unwrap(),
            crate::net::endpoint::validate("1.2.3.4:443").unwrap(),
        )
    }

    fn document(yaml: &str) -> ConfigDocument {
        ConfigDocument::from_slice(yaml.as_bytes()).unwrap()
    }

    const SSR_DOC: &str = "proxies:\n  - { type: ssr, name: ssr, server: old, port: 1, password: x, cipher: y, obfs: z, obfsparam: \"\", protocol: origin, protocolparam: \"\", udp: false }\n";

    #[test]
    fn obfuscated_relay_gets_full_field_set() {
        let mut doc = document(SSR_DOC);
        let (listener, upstream) = endpoints();
        let variant = patch(&mut doc, &listener, &upstream, &options()).unwrap();
        assert_eq!(variant, ProxyVariant::ObfuscatedRelay);

        let entry = &doc.proxies[0];
        assert_eq!(entry.get("server"), Some(&Value::from("1.2.3.4")));
        assert_eq!(entry.get("port"), Some(&Value::from("443")));
        assert_eq!(entry.get("password"), Some(&Value::from("p")));
        assert_eq!(entry.get("cipher"), Some(&Value::from("aes-256-cfb")));
        assert_eq!(entry.get("obfs"), Some(&Value::from("plain")));
        assert_eq!(entry.get("obfsparam"), Some(&Value::from("")));
        assert_eq!(entry.get("protocol"), Some(&Value::from("origin")));
        assert_eq!(entry.get("protocolparam"), Some(&Value::from("")));
        assert_eq!(entry.get("udp"), Some(&Value::from(true)));

        assert!(doc.allow_lan);
        assert_eq!(doc.socks_port, 7890);
        assert_eq!(doc.bind_address, "127.0.0.1");
    }

    #[test]
    fn socks_relay_gets_only_server_port_udp() {
        let mut doc = document(
            "proxies:\n  - { type: socks5, name: trojan, server: \"127.0.0.1\", port: 1081, udp: true }\n",
        );
        let (listener, upstream) = endpoints();
        let variant = patch(&mut doc, &listener, &upstream, &options()).unwrap();
        assert_eq!(variant, ProxyVariant::SocksRelay);

        let entry = &doc.proxies[0];
        assert_eq!(entry.get("server"), Some(&Value::from("1.2.3.4")));
        assert_eq!(entry.get("port"), Some(&Value::from("443")));
        assert_eq!(entry.get("udp"), Some(&Value::from(true)));
        // No obfuscation fields appear on a socks relay.
        assert_eq!(entry.get("password"), None);
        assert_eq!(entry.get("cipher"), None);
        assert_eq!(entry.get("obfs"), None);
        assert_eq!(entry.get("protocol"), None);
    }

    #[test]
    fn secondary_entries_are_untouched() {
        let mut doc = document(
            "proxies:\n  - { type: ssr, name: ssr }\n  - { type: socks5, name: trojan, server: keep, port: 9 }\n  - { type: vmess, name: spare, server: keep2 }\n",
        );
        let before: Vec<Mapping> = doc.proxies[1..].to_vec();
        let (listener, upstream) = endpoints();
        patch(&mut doc, &listener, &upstream, &options()).unwrap();
        assert_eq!(&doc.proxies[1..], &before[..]);
    }

    #[test]
    fn empty_proxy_list_is_rejected() {
        let mut doc = document("proxies: []\nmode: rule\n");
        let (listener, upstream) = endpoints();
        let err = patch(&mut doc, &listener, &upstream, &options()).unwrap_err();
        assert!(matches!(err, Error::NoUpstreamProxy));
    }

    #[test]
    fn unsupported_entry_aborts_without_mutation() {
        let mut doc = document(
            "proxies:\n  - { type: vmess, name: vmess, server: keep, port: 1 }\nmode: rule\n",
        );
        let before = doc.clone();
        let (listener, upstream) = endpoints();
        let err = patch(&mut doc, &listener, &upstream, &options()).unwrap_err();
        match err {
            Error::UnsupportedProxyEntry { type_tag, name_tag } => {
                assert_eq!(type_tag.as_deref(), Some("vmess"));
                assert_eq!(name_tag.as_deref(), Some("vmess"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(doc, before);
    }

    #[test]
    fn mismatched_tag_pair_selects_no_variant() {
        // Right type, wrong name: still unsupported, never half-patched.
        let mut doc = document("proxies:\n  - { type: ssr, name: trojan, server: keep }\n");
        let before = doc.clone();
        let (listener, upstream) = endpoints();
        assert!(matches!(
            patch(&mut doc, &listener, &upstream, &options()),
            Err(Error::UnsupportedProxyEntry { .. })
        ));
        assert_eq!(doc, before);
    }
}
