//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the ballot client core.
///
/// The core computations never fail; these variants only arise at parsing
/// and configuration boundaries.
#[derive(Debug, Error)]
pub enum BallotError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("configuration error: {0}")]
    Config(String),
}
