//! SubmitContactHandler - records a contact submission, fans it out to
//! notification channels, and unlocks the category's action items.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::lead::ContactDetails;
use crate::domain::records::SubmissionRecord;
use crate::domain::scoring::ScoredResult;
use crate::ports::{AssessmentStore, ChannelReport, Notifier, StoreError, SubmissionNotice};

/// Command carrying validated contact details and the scored result the
/// visitor is unlocking.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub contact: ContactDetails,
    pub scored: ScoredResult,
}

/// Result of a successful submission. `advice` is the unlocked action list;
/// it is returned regardless of channel outcomes.
#[derive(Debug, Clone)]
pub struct SubmitContactResult {
    pub record: SubmissionRecord,
    pub reports: Vec<ChannelReport>,
    pub advice: Vec<String>,
}

#[derive(Debug, Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Handler for contact submissions.
pub struct SubmitContactHandler {
    store: Arc<dyn AssessmentStore>,
    notifier: Arc<dyn Notifier>,
    source: String,
}

impl SubmitContactHandler {
    pub fn new(
        store: Arc<dyn AssessmentStore>,
        notifier: Arc<dyn Notifier>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            source: source.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitContactCommand,
    ) -> Result<SubmitContactResult, SubmitContactError> {
        let record = SubmissionRecord::new(&cmd.contact, &cmd.scored);
        self.store.append_submission(record.clone()).await?;

        // Channel failures are reported, never escalated: the visitor must
        // still see the result and the unlocked action list.
        let notice = SubmissionNotice::from_record(&record, &self.source);
        let reports = self.notifier.dispatch(&notice).await;
        for report in reports.iter().filter(|r| !r.is_delivered()) {
            warn!(channel = %report.channel, "notification channel failed");
        }

        info!(
            submission = %record.id,
            delivered = reports.iter().filter(|r| r.is_delivered()).count(),
            channels = reports.len(),
            "contact submission recorded"
        );

        Ok(SubmitContactResult {
            record,
            reports,
            advice: cmd.scored.category.advice.clone(),
        })
    }
}
