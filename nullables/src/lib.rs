//! Nullable infrastructure for deterministic testing.
//!
//! External inputs (the wall clock, the host's network status) are
//! abstracted behind traits in `ballot-types`. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the system clock or the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod network;

pub use clock::NullClock;
pub use network::NullNetworkStatus;
