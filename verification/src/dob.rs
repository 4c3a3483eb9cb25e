//! Date-of-birth parsing.
//!
//! Extracted dates are printed as `DD-MM-YYYY` and are parsed strictly: a
//! value that is not a real calendar date (31 April, 29 February in a
//! common year) is rejected rather than rolled over.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DobParseError {
    #[error("expected DD-MM-YYYY, got {0:?}")]
    Malformed(String),

    #[error("month {0} is out of range")]
    MonthOutOfRange(u32),

    #[error("day {0} is out of range")]
    DayOutOfRange(u32),

    #[error("{day:02}-{month:02}-{year:04} is not a calendar date")]
    NotOnCalendar { day: u32, month: u32, year: i32 },
}

fn digits(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if part.len() < min_len || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parse an extracted `DD-MM-YYYY` date of birth.
pub fn parse_extracted_dob(raw: &str) -> Result<NaiveDate, DobParseError> {
    let trimmed = raw.trim();
    let malformed = || DobParseError::Malformed(trimmed.to_string());

    let mut parts = trimmed.split('-');
    let (Some(d), Some(m), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    let day = digits(d, 1, 2).ok_or_else(malformed)?;
    let month = digits(m, 1, 2).ok_or_else(malformed)?;
    let year = digits(y, 4, 4).ok_or_else(malformed)? as i32;

    if !(1..=12).contains(&month) {
        return Err(DobParseError::MonthOutOfRange(month));
    }
    if !(1..=31).contains(&day) {
        return Err(DobParseError::DayOutOfRange(day));
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DobParseError::NotOnCalendar { day, month, year })
}

/// Parse the date of birth submitted with the profile form.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 date-time, in which case
/// the UTC calendar date is used. Anything else yields `None`.
pub fn parse_entered_dob(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}
