//! Network-facing leaf types: endpoint validation and connection handles.

pub mod connection;
pub mod endpoint;

pub use connection::{ClosableConnection, ConnectionId, ConnectionStats};
pub use endpoint::Endpoint;
