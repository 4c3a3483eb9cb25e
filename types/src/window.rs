//! Election windows and their lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Timestamp;

/// The start/end pair defining an election's active voting period.
///
/// `start < end` is expected but not enforced; reversed or empty windows
/// produce defined (if meaningless) results everywhere they are consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElectionWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl ElectionWindow {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Total length of the window in milliseconds (negative if reversed).
    pub fn duration_millis(&self) -> i64 {
        self.start.millis_until(self.end)
    }

    /// Whether the window has zero or negative length.
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }

    /// Lifecycle status at `now`. Both bounds count as active.
    pub fn status(&self, now: Timestamp) -> ElectionStatus {
        if now < self.start {
            ElectionStatus::Upcoming
        } else if now > self.end {
            ElectionStatus::Completed
        } else {
            ElectionStatus::Active
        }
    }
}

/// Where an election is in its lifecycle relative to a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectionStatus {
    /// Voting has not opened yet.
    Upcoming,
    /// Voting is open.
    Active,
    /// Voting has closed.
    Completed,
}

impl ElectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ElectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
