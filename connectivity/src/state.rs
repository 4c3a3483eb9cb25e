//! Connectivity state and its transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the connectivity indicator should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityState {
    pub is_online: bool,
    pub is_reconnecting: bool,
    /// Whether the indicator is on screen.
    pub visible: bool,
}

/// The display phase derived from the three flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityPhase {
    /// No network.
    Offline,
    /// An online signal arrived; waiting before trusting it.
    Reconnecting,
    /// Online again, indicator still showing.
    OnlineJustConnected,
    /// Online with the indicator hidden.
    OnlineStable,
}

impl ConnectivityState {
    /// Initial state from the host's current network status. The indicator
    /// starts visible only when offline.
    pub fn initial(online: bool) -> Self {
        Self {
            is_online: online,
            is_reconnecting: false,
            visible: !online,
        }
    }

    pub fn phase(&self) -> ConnectivityPhase {
        match (self.is_online, self.is_reconnecting, self.visible) {
            (false, true, _) => ConnectivityPhase::Reconnecting,
            (false, false, _) => ConnectivityPhase::Offline,
            (true, _, true) => ConnectivityPhase::OnlineJustConnected,
            (true, _, false) => ConnectivityPhase::OnlineStable,
        }
    }

    /// Offline signal: drop to offline and show the indicator.
    ///
    /// Also clears `is_reconnecting`, since the staged transition that would
    /// have cleared it is cancelled by this signal.
    pub fn go_offline(&mut self) {
        self.is_online = false;
        self.is_reconnecting = false;
        self.visible = true;
    }

    /// Online signal, first stage.
    pub fn begin_reconnect(&mut self) {
        self.is_reconnecting = true;
    }

    /// Online signal, second stage (after the reconnect delay). The
    /// indicator keeps whatever visibility the offline period gave it.
    pub fn mark_online(&mut self) {
        self.is_online = true;
    }

    /// Online signal, final stage (after the settle delay).
    pub fn settle(&mut self) {
        self.is_reconnecting = false;
        self.visible = false;
    }
}

impl ConnectivityPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Reconnecting => "reconnecting",
            Self::OnlineJustConnected => "back online",
            Self::OnlineStable => "online",
        }
    }
}

impl fmt::Display for ConnectivityPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
