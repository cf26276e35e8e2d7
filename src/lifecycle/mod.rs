//! Session lifecycle subsystem.
//!
//! # State Flow
//! ```text
//! Stopped → Starting → Running → Stopping → Stopped
//!
//! Start (controller.rs):
//!     Validate endpoints → Load document → Patch entry 0 → Apply(force) → flag = true
//!
//! Stop (controller.rs):
//!     Snapshot connections → Close each (best effort) → Re-arm inert → flag = false
//! ```
//!
//! # Design Decisions
//! - One mutex serializes the whole pipeline; the flag stays lock-free
//! - Stop reuses the Start pipeline with inert loopback options
//! - Every pipeline failure is a returned error, never an abort

pub mod controller;
pub mod state;

pub use controller::{SessionController, StartOptions};
pub use state::SessionState;
