//! Comparator inputs, shaped like the JSON the frontend already exchanges.

use serde::{Deserialize, Serialize};

/// Result of document extraction. `text_details` is absent when extraction
/// produced nothing usable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationData {
    #[serde(default)]
    pub text_details: Option<TextDetails>,
}

/// Free-text fields read off the identity document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDetails {
    #[serde(default)]
    pub name: Option<String>,
    /// Date of birth as printed, `DD-MM-YYYY`.
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub aadhaar_no: Option<String>,
}

/// What the user entered in the profile form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// `YYYY-MM-DD` or an RFC 3339 date-time.
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub aadhar_number: String,
}

impl ProfileForm {
    /// `"{first} {last}"` with only the outer whitespace trimmed. Spaces
    /// inside or between the parts are kept.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_frontend_shapes() {
        let data: VerificationData = serde_json::from_str(
            r#"{"text_details":{"name":"Asha Rao","dob":"02-10-1990","aadhaar_no":"123412341234"},"confidence":0.93}"#,
        )
        .unwrap();
        let details = data.text_details.unwrap();
        assert_eq!(details.name.as_deref(), Some("Asha Rao"));
        assert_eq!(details.aadhaar_no.as_deref(), Some("123412341234"));

        let form: ProfileForm = serde_json::from_str(
            r#"{"firstName":"Asha","lastName":"Rao","dob":"1990-10-02","aadharNumber":"123412341234","email":"a@b.c"}"#,
        )
        .unwrap();
        assert_eq!(form.full_name(), "Asha Rao");
        assert_eq!(form.dob.as_deref(), Some("1990-10-02"));
    }

    #[test]
    fn missing_text_details_is_none() {
        let data: VerificationData = serde_json::from_str("{}").unwrap();
        assert!(data.text_details.is_none());
        let data: VerificationData = serde_json::from_str(r#"{"text_details":null}"#).unwrap();
        assert!(data.text_details.is_none());
    }

    #[test]
    fn full_name_handles_blank_parts() {
        let form = ProfileForm {
            first_name: "  Asha ".into(),
            ..Default::default()
        };
        assert_eq!(form.full_name(), "Asha");

        let form = ProfileForm {
            first_name: "Asha ".into(),
            last_name: " Rao".into(),
            ..Default::default()
        };
        assert_eq!(form.full_name(), "Asha   Rao");
    }
}
