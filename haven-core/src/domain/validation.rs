//! Field rules for job offers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::job_offer::{DESCRIPTION_FIELD, JobOfferDraft, POSITION_FIELD};

/// Maximum length of `position`, in characters (the column is VARCHAR(100))
pub const POSITION_MAX_LEN: usize = 100;

/// A single failed rule on a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Violations grouped by field, serialized as `{ field: [messages] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, empty if the field passed
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl FromIterator<FieldViolation> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldViolation>>(iter: I) -> Self {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for violation in iter {
            let messages = map.entry(violation.field).or_default();
            if !messages.contains(&violation.message) {
                messages.push(violation.message);
            }
        }
        ValidationErrors(map)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Check a draft against the required-field rules.
///
/// Returns every failed rule; an empty list means the draft may be persisted.
pub fn validate_draft(draft: &JobOfferDraft) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if draft.description.is_empty() {
        violations.push(FieldViolation::new(
            DESCRIPTION_FIELD,
            "Description is required",
        ));
    }

    if draft.position.is_empty() {
        violations.push(FieldViolation::new(POSITION_FIELD, "Position is required"));
    }

    if draft.position.chars().count() > POSITION_MAX_LEN {
        violations.push(FieldViolation::new(
            POSITION_FIELD,
            format!("Position must not exceed {} characters", POSITION_MAX_LEN),
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        let draft = JobOfferDraft::new("Design and run services", "Platform Engineer");
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn test_empty_draft_reports_both_fields() {
        let errors: ValidationErrors = validate_draft(&JobOfferDraft::default())
            .into_iter()
            .collect();

        assert_eq!(errors.field("description"), ["Description is required"]);
        assert_eq!(errors.field("position"), ["Position is required"]);
    }

    #[test]
    fn test_position_length_limit() {
        let at_limit = JobOfferDraft::new("d", "x".repeat(POSITION_MAX_LEN));
        assert!(validate_draft(&at_limit).is_empty());

        let too_long = JobOfferDraft::new("d", "x".repeat(POSITION_MAX_LEN + 1));
        let violations = validate_draft(&too_long);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Position must not exceed 100 characters"
        );
    }

    #[test]
    fn test_position_length_counts_characters() {
        // 100 two-byte characters is still within the limit
        let draft = JobOfferDraft::new("d", "é".repeat(POSITION_MAX_LEN));
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn test_validation_errors_dedupe_and_serialize() {
        let errors: ValidationErrors = vec![
            FieldViolation::new("position", "position must be a string"),
            FieldViolation::new("position", "Position is required"),
            FieldViolation::new("position", "Position is required"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "position": ["position must be a string", "Position is required"]
            })
        );
        assert!(!errors.is_empty());
        assert!(errors.field("description").is_empty());
    }
}
