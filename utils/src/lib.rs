//! Shared utilities for the ballot client core.

pub mod logging;

pub use logging::{init_tracing, LogFormat};
