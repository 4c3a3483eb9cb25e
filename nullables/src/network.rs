//! Nullable network status — a fixed answer instead of the host's network stack.

use ballot_types::NetworkStatus;

/// A network status that reports whatever the test chose at construction.
pub struct NullNetworkStatus {
    online: bool,
}

impl NullNetworkStatus {
    pub fn online() -> Self {
        Self { online: true }
    }

    pub fn offline() -> Self {
        Self { online: false }
    }
}

impl NetworkStatus for NullNetworkStatus {
    fn is_online(&self) -> bool {
        self.online
    }
}

impl Default for NullNetworkStatus {
    fn default() -> Self {
        Self::online()
    }
}
