//! Session lifecycle controller and configuration-patch engine for a
//! rule-based tunnel process.
//!
//! # Architecture Overview
//!
//! ```text
//!  Start(options)                          Stop()
//!       │                                    │
//!       ▼                                    ▼
//!  ┌──────────┐   ┌────────┐   ┌─────────┐  ┌──────────────────┐
//!  │ endpoint │──▶│ loader │──▶│ patcher │  │ drain connections│
//!  │ validate │   │ (disk) │   │ entry 0 │  │ (ConnectionStats)│
//!  └──────────┘   └────────┘   └────┬────┘  └────────┬─────────┘
//!                                   │                │ re-arm inert
//!                                   ▼                ▼
//!                             ┌─────────────────────────┐
//!                             │ TunnelEngine::apply(_,  │
//!                             │       force = true)     │
//!                             └─────────────────────────┘
//! ```
//!
//! The crate exposes no network listener or CLI; the hosting application
//! injects the tunnel engine and connection statistics and calls
//! [`SessionController::start`], [`SessionController::stop`] and
//! [`SessionController::is_running`].

// Core subsystems
pub mod config;
pub mod engine;
pub mod error;
pub mod net;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{ConfigDocument, ProxyEntry, ProxyVariant};
pub use engine::TunnelEngine;
pub use error::{EngineError, Error};
pub use lifecycle::{SessionController, SessionState, StartOptions};
pub use net::{ClosableConnection, ConnectionId, ConnectionStats, Endpoint};
