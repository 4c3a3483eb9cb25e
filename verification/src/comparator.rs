//! Field-by-field comparison of extracted and entered identity details.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::dob::{parse_entered_dob, parse_extracted_dob};
use crate::input::{ProfileForm, VerificationData};

/// The identity fields that are compared, in reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MismatchField {
    #[serde(rename = "Date of Birth")]
    DateOfBirth,
    #[serde(rename = "Aadhaar Number")]
    AadhaarNumber,
    #[serde(rename = "Full Name")]
    FullName,
}

impl MismatchField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DateOfBirth => "Date of Birth",
            Self::AadhaarNumber => "Aadhaar Number",
            Self::FullName => "Full Name",
        }
    }
}

impl fmt::Display for MismatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One field where the document and the form disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub field: MismatchField,
    pub extracted: String,
    pub entered: String,
}

impl Mismatch {
    fn new(field: MismatchField, extracted: impl Into<String>, entered: impl Into<String>) -> Self {
        Self {
            field,
            extracted: extracted.into(),
            entered: entered.into(),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: document says {:?}, profile says {:?}",
            self.field, self.extracted, self.entered
        )
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Compare extracted document fields with the profile form.
///
/// Mismatches are reported in a fixed order: date of birth, Aadhaar
/// number, full name.
///
/// - No `text_details` at all: nothing is reported.
/// - Date of birth: only compared when both sides parse to a date; dates
///   are reported in `YYYY-MM-DD` form.
/// - Aadhaar number: exact string equality; a missing value compares as
///   empty, so a missing document number against an empty form value is
///   not reported.
/// - Full name: `"{first} {last}"` against the extracted name, ignoring
///   case and outer whitespace but otherwise exact. Extra spaces inside the
///   joined name are a mismatch.
pub fn check_mismatches(verification: &VerificationData, form: &ProfileForm) -> Vec<Mismatch> {
    let Some(details) = verification.text_details.as_ref() else {
        debug!("no extracted text details, skipping profile comparison");
        return Vec::new();
    };

    let mut mismatches = Vec::new();

    let extracted_dob = details
        .dob
        .as_deref()
        .and_then(|raw| match parse_extracted_dob(raw) {
            Ok(date) => Some(date),
            Err(e) => {
                debug!(error = %e, "ignoring unreadable extracted date of birth");
                None
            }
        });
    let entered_dob = form.dob.as_deref().and_then(parse_entered_dob);
    if let (Some(extracted), Some(entered)) = (extracted_dob, entered_dob) {
        if extracted != entered {
            mismatches.push(Mismatch::new(
                MismatchField::DateOfBirth,
                iso(extracted),
                iso(entered),
            ));
        }
    }

    let extracted_number = details.aadhaar_no.as_deref().unwrap_or("");
    if extracted_number != form.aadhar_number {
        mismatches.push(Mismatch::new(
            MismatchField::AadhaarNumber,
            extracted_number,
            form.aadhar_number.as_str(),
        ));
    }

    let extracted_name = details.name.as_deref().unwrap_or("");
    let entered_name = form.full_name();
    if normalize_name(extracted_name) != normalize_name(&entered_name) {
        mismatches.push(Mismatch::new(
            MismatchField::FullName,
            extracted_name.trim(),
            entered_name,
        ));
    }

    debug!(count = mismatches.len(), "profile comparison finished");
    mismatches
}
