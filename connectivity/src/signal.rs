//! The two network signals delivered by the host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkSignal {
    Online,
    Offline,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown network signal {0:?} (expected \"online\" or \"offline\")")]
pub struct UnknownSignal(pub String);

impl FromStr for NetworkSignal {
    type Err = UnknownSignal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            _ => Err(UnknownSignal(s.trim().to_string())),
        }
    }
}

impl fmt::Display for NetworkSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => f.write_str("online"),
            Self::Offline => f.write_str("offline"),
        }
    }
}
