//! Remaining-time labels and percentage progress for an election window.

use ballot_types::{ElectionStatus, ElectionWindow, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::trace;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Label returned once an election has closed.
pub const COMPLETED_LABEL: &str = "Completed";

/// A non-negative duration broken into whole days, hours and minutes.
///
/// Each component is the remainder after the larger ones are taken out, so
/// `hours < 24` and `minutes < 60`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTime {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl RemainingTime {
    /// Decompose a millisecond duration. Negative input is treated as zero.
    pub fn from_millis(millis: i64) -> Self {
        let millis = millis.max(0);
        Self {
            days: millis / DAY_MS,
            hours: (millis % DAY_MS) / HOUR_MS,
            minutes: (millis % HOUR_MS) / MINUTE_MS,
        }
    }

    /// Render as `"{d} day(s) {h} hour(s)"`, dropping zero components.
    ///
    /// Below one hour the minutes are used instead, and below one minute the
    /// label is `"less than a minute"`.
    pub fn label(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if self.days != 0 {
            parts.push(plural(self.days, "day"));
        }
        if self.hours != 0 {
            parts.push(plural(self.hours, "hour"));
        }
        if parts.is_empty() {
            if self.minutes != 0 {
                parts.push(plural(self.minutes, "minute"));
            } else {
                parts.push("less than a minute".to_string());
            }
        }
        parts.join(" ")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Human-readable time left in the current phase of the election.
///
/// - before `start`: `"Starts in 2 days 3 hours"`
/// - between `start` and `end` inclusive: `"4 days 1 hour"`
/// - after `end`: `"Completed"`
pub fn days_remaining(window: &ElectionWindow, now: Timestamp) -> String {
    match window.status(now) {
        ElectionStatus::Upcoming => {
            let left = RemainingTime::from_millis(now.millis_until(window.start));
            format!("Starts in {}", left.label())
        }
        ElectionStatus::Active => {
            let left = RemainingTime::from_millis(now.millis_until(window.end));
            capitalize(&left.label())
        }
        ElectionStatus::Completed => COMPLETED_LABEL.to_string(),
    }
}

/// Percentage of the window elapsed at `now`, rounded half-up, in `0..=100`.
///
/// A zero-length (or reversed) window counts as complete from `start` on.
pub fn time_progress(window: &ElectionWindow, now: Timestamp) -> u8 {
    if window.is_degenerate() {
        return if now >= window.start { 100 } else { 0 };
    }
    if now <= window.start {
        return 0;
    }
    if now >= window.end {
        return 100;
    }

    let total = i128::from(window.duration_millis());
    let elapsed = i128::from(window.start.millis_until(now));
    let percent = (elapsed * 200 + total) / (total * 2);
    trace!(%elapsed, %total, %percent, "election progress");

    // 0 < elapsed < total, so the quotient is already within 0..=100.
    percent.clamp(0, 100) as u8
}
