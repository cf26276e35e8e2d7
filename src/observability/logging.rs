//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with an env-filter.
///
/// `RUST_LOG` wins when set; `default_directive` applies otherwise. Safe to
/// call more than once (later calls are no-ops), so hosts and tests can both
/// use it.
pub fn init(default_directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
