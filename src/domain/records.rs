//! Persisted record types: one per completed assessment, one per contact
//! submission. These are what the store appends and lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{AssessmentRecordId, Points, SubmissionId, Timestamp};
use crate::domain::lead::ContactDetails;
use crate::domain::scoring::ScoredResult;

/// Log entry written once per completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: AssessmentRecordId,
    pub recorded_at: Timestamp,
    pub total_score: Points,
    pub category_title: String,
    pub dimension_scores: BTreeMap<String, Points>,
}

impl AssessmentRecord {
    /// Builds a record from a freshly scored result.
    pub fn from_result(result: &ScoredResult) -> Self {
        Self {
            id: AssessmentRecordId::new(),
            recorded_at: Timestamp::now(),
            total_score: result.total,
            category_title: result.category.title.clone(),
            dimension_scores: result.per_dimension.clone(),
        }
    }
}

/// Log entry written once per contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub submitted_at: Timestamp,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub score: Points,
    pub category_title: String,
}

impl SubmissionRecord {
    /// Builds a record from validated contact details and the scored result
    /// the visitor is unlocking.
    pub fn new(contact: &ContactDetails, result: &ScoredResult) -> Self {
        Self {
            id: SubmissionId::new(),
            submitted_at: Timestamp::now(),
            name: contact.name().to_string(),
            phone: contact.phone().to_string(),
            company: contact.company().map(str::to_string),
            score: result.total,
            category_title: result.category.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{OutcomeCategory, ScoreRange, StarRating};

    fn result() -> ScoredResult {
        let mut per_dimension = BTreeMap::new();
        per_dimension.insert("product".to_string(), Points::new(12.0));
        per_dimension.insert("team".to_string(), Points::new(8.5));
        ScoredResult {
            total: Points::new(20.5),
            per_dimension,
            category: OutcomeCategory {
                range: ScoreRange::new(0.0, 29.0),
                title: "Not Yet Suitable".to_string(),
                stars: StarRating::new(1),
                description: String::new(),
                priority_label: String::new(),
                advice: vec![],
                outcome_statement: String::new(),
            },
        }
    }

    #[test]
    fn assessment_record_copies_scores_and_category_title() {
        let record = AssessmentRecord::from_result(&result());
        assert_eq!(record.total_score, Points::new(20.5));
        assert_eq!(record.category_title, "Not Yet Suitable");
        assert_eq!(record.dimension_scores["team"], Points::new(8.5));
    }

    #[test]
    fn submission_record_copies_contact_and_score() {
        let contact = ContactDetails::new("Ms. Wang", "13800000000", None).unwrap();
        let record = SubmissionRecord::new(&contact, &result());
        assert_eq!(record.name, "Ms. Wang");
        assert_eq!(record.company, None);
        assert_eq!(record.score, Points::new(20.5));
    }

    #[test]
    fn records_roundtrip_through_json() {
        let record = AssessmentRecord::from_result(&result());
        let json = serde_json::to_string(&record).unwrap();
        let parsed: AssessmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
