//! Assessment Store Port - Interface for the append-only record log.
//!
//! The store behaves as an opaque key-value list: records are appended and
//! listed back most-recent-first. Calls are sequential and single-owner, so
//! adapters need no read-modify-write coordination.

use async_trait::async_trait;

use crate::domain::records::{AssessmentRecord, SubmissionRecord};

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for appending and listing assessment and submission records.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Append a completed-assessment record.
    ///
    /// # Errors
    /// Returns `StoreError` if the append fails
    async fn append_assessment(&self, record: AssessmentRecord) -> Result<(), StoreError>;

    /// List all assessment records, most recent first.
    async fn list_assessments(&self) -> Result<Vec<AssessmentRecord>, StoreError>;

    /// Append a contact-submission record.
    ///
    /// # Errors
    /// Returns `StoreError` if the append fails
    async fn append_submission(&self, record: SubmissionRecord) -> Result<(), StoreError>;

    /// List all submission records, most recent first.
    async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn AssessmentStore) {}

    #[test]
    fn store_error_messages_name_the_failure() {
        let err = StoreError::DeserializationFailed("unexpected token".to_string());
        assert!(err.to_string().contains("deserialize"));

        let err = StoreError::IoError("permission denied".to_string());
        assert!(err.to_string().contains("IO error"));
    }
}
