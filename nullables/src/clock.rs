//! Nullable clock — deterministic time for testing.

use ballot_types::{Clock, Timestamp};
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to. Values are milliseconds since
/// the Unix epoch.
pub struct NullClock {
    current: Cell<i64>,
}

impl NullClock {
    pub fn new(initial_millis: i64) -> Self {
        Self {
            current: Cell::new(initial_millis),
        }
    }

    /// Advance time by a number of milliseconds.
    pub fn advance(&self, millis: i64) {
        self.current.set(self.current.get() + millis);
    }

    /// Set the time to a specific value.
    pub fn set(&self, millis: i64) {
        self.current.set(millis);
    }
}

impl Clock for NullClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.current.get())
    }
}
