//! Profile (KYC) verification.
//!
//! An identity document is run through text extraction upstream; this crate
//! compares the extracted name, date of birth and Aadhaar number with what
//! the user typed into their profile form and reports every field that
//! disagrees.
//!
//! The comparison fails open: missing or unreadable extraction data yields
//! no mismatches rather than an error, so partial data never blocks the
//! profile flow.

pub mod comparator;
pub mod dob;
pub mod input;

pub use comparator::{check_mismatches, Mismatch, MismatchField};
pub use dob::{parse_entered_dob, parse_extracted_dob, DobParseError};
pub use input::{ProfileForm, TextDetails, VerificationData};
