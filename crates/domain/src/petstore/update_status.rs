//! Operation report returned by delete, form update and image upload.

use serde::{Deserialize, Serialize};

/// Report the Pet Store returns for operations that do not echo a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetUpdateStatus {
    /// Status code echoed in the body.
    pub code: i32,
    /// Report type. Its values are not documented by the remote API.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Message; for pet operations this is the pet identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PetUpdateStatus {
    /// Creates a report without a type.
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: None,
            message: Some(message.into()),
        }
    }

    /// The report expected after a successful operation on pet `id`.
    #[must_use]
    pub fn ok_for(id: i64) -> Self {
        Self::new(200, id.to_string())
    }

    /// Compares code and message, ignoring `type`.
    #[must_use]
    pub fn matches_ignoring_type(&self, other: &Self) -> bool {
        self.code == other.code && self.message == other.message
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decodes_type_field() {
        let report: PetUpdateStatus =
            serde_json::from_str(r#"{"code":200,"type":"unknown","message":"42"}"#).unwrap();
        assert_eq!(report.kind.as_deref(), Some("unknown"));
        assert!(report.matches_ignoring_type(&PetUpdateStatus::ok_for(42)));
        assert_ne!(report, PetUpdateStatus::ok_for(42));
    }

    #[test]
    fn test_message_mismatch() {
        let report = PetUpdateStatus::new(200, "43");
        assert!(!report.matches_ignoring_type(&PetUpdateStatus::ok_for(42)));
    }
}
