//! CompleteAssessmentHandler - scores a finished answer set and logs it.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::domain::catalog::Catalog;
use crate::domain::records::AssessmentRecord;
use crate::domain::scoring::{AnswerSet, CategoryTable, ScoredResult, ScoringEngine, ScoringError};
use crate::ports::{AssessmentStore, StoreError};

/// Command carrying the final answer set of a completed run.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentCommand {
    pub answers: AnswerSet,
}

/// Result of a successful completion.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentResult {
    pub scored: ScoredResult,
    pub record: AssessmentRecord,
}

#[derive(Debug, Error)]
pub enum CompleteAssessmentError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Handler for completing assessments: score, resolve, append to the log.
pub struct CompleteAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<Catalog>,
    categories: Arc<CategoryTable>,
}

impl CompleteAssessmentHandler {
    pub fn new(
        store: Arc<dyn AssessmentStore>,
        catalog: Arc<Catalog>,
        categories: Arc<CategoryTable>,
    ) -> Self {
        Self {
            store,
            catalog,
            categories,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteAssessmentCommand,
    ) -> Result<CompleteAssessmentResult, CompleteAssessmentError> {
        let scored = ScoringEngine::score(&cmd.answers, &self.catalog, &self.categories)?;
        let record = AssessmentRecord::from_result(&scored);

        self.store.append_assessment(record.clone()).await?;

        info!(
            total = scored.total.value(),
            category = %scored.category.title,
            "assessment completed and recorded"
        );

        Ok(CompleteAssessmentResult { scored, record })
    }
}
