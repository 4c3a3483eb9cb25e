//! Fundamental types for the ballot client core.
//!
//! This crate defines the primitives shared by every other crate in the
//! workspace: millisecond timestamps, the clock and network-status
//! abstractions, election windows, and the common error type.

pub mod error;
pub mod network;
pub mod time;
pub mod window;

pub use error::BallotError;
pub use network::{FixedNetworkStatus, NetworkStatus};
pub use time::{Clock, SystemClock, Timestamp};
pub use window::{ElectionStatus, ElectionWindow};
