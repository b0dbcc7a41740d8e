//! In-memory store implementation for testing.
//!
//! Deterministic, lock-backed, with capture helpers for assertions. Uses
//! `.expect()` on lock operations, which panics if a lock is poisoned;
//! acceptable for test code, so this adapter should not back a deployment.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::records::{AssessmentRecord, SubmissionRecord};
use crate::ports::{AssessmentStore, StoreError};

/// In-memory record store. Lists are kept most-recent-first, matching the
/// port contract.
#[derive(Default)]
pub struct InMemoryStore {
    assessments: RwLock<Vec<AssessmentRecord>>,
    submissions: RwLock<Vec<SubmissionRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Number of stored assessment records.
    pub fn assessment_count(&self) -> usize {
        self.assessments
            .read()
            .expect("InMemoryStore: assessments lock poisoned")
            .len()
    }

    /// Number of stored submission records.
    pub fn submission_count(&self) -> usize {
        self.submissions
            .read()
            .expect("InMemoryStore: submissions lock poisoned")
            .len()
    }

    /// The most recently appended assessment, if any.
    pub fn latest_assessment(&self) -> Option<AssessmentRecord> {
        self.assessments
            .read()
            .expect("InMemoryStore: assessments lock poisoned")
            .first()
            .cloned()
    }

    /// The most recently appended submission, if any.
    pub fn latest_submission(&self) -> Option<SubmissionRecord> {
        self.submissions
            .read()
            .expect("InMemoryStore: submissions lock poisoned")
            .first()
            .cloned()
    }
}

#[async_trait]
impl AssessmentStore for InMemoryStore {
    async fn append_assessment(&self, record: AssessmentRecord) -> Result<(), StoreError> {
        self.assessments
            .write()
            .expect("InMemoryStore: assessments write lock poisoned")
            .insert(0, record);
        Ok(())
    }

    async fn list_assessments(&self) -> Result<Vec<AssessmentRecord>, StoreError> {
        Ok(self
            .assessments
            .read()
            .expect("InMemoryStore: assessments lock poisoned")
            .clone())
    }

    async fn append_submission(&self, record: SubmissionRecord) -> Result<(), StoreError> {
        self.submissions
            .write()
            .expect("InMemoryStore: submissions write lock poisoned")
            .insert(0, record);
        Ok(())
    }

    async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        Ok(self
            .submissions
            .read()
            .expect("InMemoryStore: submissions lock poisoned")
            .clone())
    }
}
