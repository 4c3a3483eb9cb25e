//! Reconciler timing configuration with TOML support.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use ballot_types::BallotError;

/// Delays for the staged online transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    /// Time between an online signal and trusting it (marking online).
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,

    /// Time after marking online before the indicator is hidden.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

fn default_reconnect_delay_ms() -> u64 {
    1500
}

fn default_settle_delay_ms() -> u64 {
    2000
}

impl ConnectivityConfig {
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, BallotError> {
        toml::from_str(s).map_err(|e| BallotError::Config(e.to_string()))
    }
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            reconnect_delay_ms: default_reconnect_delay_ms(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}
