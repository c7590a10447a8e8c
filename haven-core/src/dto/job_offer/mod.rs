//! Job offer DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job_offer::{JobOffer, OfferId};

/// Request body for create and update
///
/// Absent fields are left out of the JSON so an update only touches what the
/// caller set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOfferPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl JobOfferPayload {
    pub fn new(description: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            position: Some(position.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.position.is_none()
    }
}

/// Response to a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: OfferId,
}

/// Response to a successful read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOfferResponse {
    pub job_offer: JobOffer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job_offer::JobOfferDraft;
    use serde_json::json;

    #[test]
    fn test_partial_payload_skips_absent_fields() {
        let payload = JobOfferPayload {
            description: None,
            position: Some("Recruiter".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "position": "Recruiter" })
        );
        assert!(!payload.is_empty());
        assert!(JobOfferPayload::default().is_empty());
    }

    #[test]
    fn test_read_envelope_uses_camel_case_key() {
        let resp = JobOfferResponse {
            job_offer: JobOffer::from_draft("3".into(), JobOfferDraft::new("d", "p")),
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["jobOffer"]["id"], "3");
    }
}
