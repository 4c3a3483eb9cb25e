//! One-shot evaluation of an election window.

use ballot_types::{ElectionStatus, ElectionWindow, Timestamp};
use serde::{Deserialize, Serialize};

use crate::timing::{days_remaining, time_progress};

/// Status, remaining-time label and progress of an election, all taken at
/// the same instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSummary {
    pub window: ElectionWindow,
    pub evaluated_at: Timestamp,
    pub status: ElectionStatus,
    pub remaining: String,
    pub progress: u8,
}

pub fn summarize(window: &ElectionWindow, now: Timestamp) -> ElectionSummary {
    ElectionSummary {
        window: *window,
        evaluated_at: now,
        status: window.status(now),
        remaining: days_remaining(window, now),
        progress: time_progress(window, now),
    }
}
