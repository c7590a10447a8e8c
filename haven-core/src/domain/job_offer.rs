//! Job offer domain types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::validation::FieldViolation;

pub const DESCRIPTION_FIELD: &str = "description";
pub const POSITION_FIELD: &str = "position";

/// Store-assigned identifier of a job offer
///
/// Opaque to everything above the store: the relational store renders its
/// auto-increment key as decimal text, the document store its ObjectId as hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OfferId {
    fn from(s: String) -> Self {
        OfferId(s)
    }
}

impl From<&str> for OfferId {
    fn from(s: &str) -> Self {
        OfferId(s.to_string())
    }
}

/// A persisted job offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: OfferId,
    pub description: String,
    pub position: String,
}

impl JobOffer {
    /// Assemble a persisted offer from its id and field values
    pub fn from_draft(id: OfferId, draft: JobOfferDraft) -> Self {
        Self {
            id,
            description: draft.description,
            position: draft.position,
        }
    }

    /// Editable copy of the offer's fields
    pub fn draft(&self) -> JobOfferDraft {
        JobOfferDraft {
            description: self.description.clone(),
            position: self.position.clone(),
        }
    }
}

/// Field values of an offer that has not been (re)persisted yet
///
/// A fresh draft has both fields empty, so a create payload that omits a field
/// fails validation rather than being filled with a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOfferDraft {
    pub description: String,
    pub position: String,
}

impl JobOfferDraft {
    pub fn new(description: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            position: position.into(),
        }
    }

    /// Copy the known fields of a JSON object onto this draft.
    ///
    /// Keys other than `description` and `position` (including `id`) are
    /// ignored. A present field whose value is not a string leaves the draft
    /// untouched and is reported as a violation.
    pub fn merge_json(&mut self, payload: &Map<String, Value>) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for (field, slot) in [
            (DESCRIPTION_FIELD, &mut self.description),
            (POSITION_FIELD, &mut self.position),
        ] {
            match payload.get(field) {
                None => {}
                Some(Value::String(s)) => *slot = s.clone(),
                Some(_) => violations.push(FieldViolation::new(
                    field,
                    format!("{} must be a string", field),
                )),
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_merge_copies_known_fields() {
        let mut draft = JobOfferDraft::default();
        let violations = draft.merge_json(&object(json!({
            "description": "Build APIs",
            "position": "Backend Engineer",
            "salary": 100
        })));

        assert!(violations.is_empty());
        assert_eq!(draft, JobOfferDraft::new("Build APIs", "Backend Engineer"));
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let offer = JobOffer::from_draft("7".into(), JobOfferDraft::new("Old text", "Tester"));
        let mut draft = offer.draft();
        draft.merge_json(&object(json!({ "position": "QA Lead" })));

        assert_eq!(draft.description, "Old text");
        assert_eq!(draft.position, "QA Lead");
    }

    #[test]
    fn test_merge_ignores_id() {
        let mut draft = JobOfferDraft::new("d", "p");
        let violations = draft.merge_json(&object(json!({ "id": "99" })));
        assert!(violations.is_empty());
        assert_eq!(draft, JobOfferDraft::new("d", "p"));
    }

    #[test]
    fn test_merge_rejects_non_string_values() {
        let mut draft = JobOfferDraft::new("d", "p");
        let violations = draft.merge_json(&object(json!({ "position": 42, "description": null })));

        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.field == "position"));
        assert!(violations.iter().any(|v| v.message == "description must be a string"));
        assert_eq!(draft, JobOfferDraft::new("d", "p"));
    }

    #[test]
    fn test_offer_id_serializes_as_plain_string() {
        let offer = JobOffer::from_draft(OfferId::new("12"), JobOfferDraft::new("d", "p"));
        let value = serde_json::to_value(&offer).unwrap();
        assert_eq!(value, json!({ "id": "12", "description": "d", "position": "p" }));
    }
}
