//! Notifier Port - fire-and-forget multi-channel submission dispatch.
//!
//! A submission fans out to every configured channel concurrently. Channels
//! are independent and order-insensitive; each reports its own outcome and
//! no failure may block the caller from rendering the already-computed
//! result and recommendations.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{Points, Timestamp};
use crate::domain::records::SubmissionRecord;

/// Payload forwarded to notification channels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionNotice {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub score: Points,
    pub category_title: String,
    pub source: String,
    pub submission_date: Timestamp,
}

impl SubmissionNotice {
    /// Builds the outbound payload from a stored submission record.
    pub fn from_record(record: &SubmissionRecord, source: impl Into<String>) -> Self {
        Self {
            name: record.name.clone(),
            phone: record.phone.clone(),
            company: record.company.clone(),
            score: record.score,
            category_title: record.category_title.clone(),
            source: source.into(),
            submission_date: record.submitted_at,
        }
    }
}

/// Per-channel delivery outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelStatus {
    Delivered,
    Failed(String),
}

/// Outcome of one channel's dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelReport {
    pub channel: String,
    pub status: ChannelStatus,
}

impl ChannelReport {
    pub fn delivered(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            status: ChannelStatus::Delivered,
        }
    }

    pub fn failed(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            status: ChannelStatus::Failed(reason.into()),
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status == ChannelStatus::Delivered
    }
}

/// Port for dispatching a submission to all notification channels.
///
/// Implementations must return one report per configured channel and must
/// not propagate channel failures as errors; failures live inside the
/// reports.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn dispatch(&self, notice: &SubmissionNotice) -> Vec<ChannelReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn Notifier) {}

    #[test]
    fn channel_report_constructors_set_status() {
        assert!(ChannelReport::delivered("records").is_delivered());
        let failed = ChannelReport::failed("email", "timeout");
        assert!(!failed.is_delivered());
        assert_eq!(failed.status, ChannelStatus::Failed("timeout".to_string()));
    }

    #[test]
    fn notice_serializes_with_camel_case_fields() {
        let notice = SubmissionNotice {
            name: "Ms. Wang".to_string(),
            phone: "13800000000".to_string(),
            company: None,
            score: Points::new(72.0),
            category_title: "Fast Iterator".to_string(),
            source: "Readiness Compass".to_string(),
            submission_date: Timestamp::now(),
        };

        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["categoryTitle"], "Fast Iterator");
        assert_eq!(json["score"], 72.0);
        assert!(json.get("company").is_none());
    }
}
