//! Configuration document handling: schema, disk loading and patching.

pub mod loader;
pub mod patcher;
pub mod schema;

pub use schema::{ConfigDocument, ProxyEntry, ProxyVariant};

/// File name of the configuration document under the home directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";
