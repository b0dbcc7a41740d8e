//! Mock notifier for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{ChannelReport, Notifier, SubmissionNotice};

/// Test notifier with scripted per-channel outcomes and capture of every
/// dispatched notice.
pub struct MockNotifier {
    channels: Vec<String>,
    failing: Vec<String>,
    dispatched: Mutex<Vec<SubmissionNotice>>,
}

impl MockNotifier {
    pub fn new(channels: &[&str]) -> Self {
        Self {
            channels: channels.iter().map(|c| c.to_string()).collect(),
            failing: Vec::new(),
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// Scripts a channel to fail every dispatch.
    pub fn with_failure(mut self, channel: &str) -> Self {
        self.failing.push(channel.to_string());
        self
    }

    /// Notices dispatched so far (for assertions).
    pub fn dispatched(&self) -> Vec<SubmissionNotice> {
        self.dispatched
            .lock()
            .expect("MockNotifier: dispatched lock poisoned")
            .clone()
    }

    pub fn dispatch_count(&self) -> usize {
        self.dispatched
            .lock()
            .expect("MockNotifier: dispatched lock poisoned")
            .len()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn dispatch(&self, notice: &SubmissionNotice) -> Vec<ChannelReport> {
        self.dispatched
            .lock()
            .expect("MockNotifier: dispatched lock poisoned")
            .push(notice.clone());

        self.channels
            .iter()
            .map(|channel| {
                if self.failing.contains(channel) {
                    ChannelReport::failed(channel, "scripted failure")
                } else {
                    ChannelReport::delivered(channel)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Points, Timestamp};

    fn notice() -> SubmissionNotice {
        SubmissionNotice {
            name: "Ms. Wang".to_string(),
            phone: "13800000000".to_string(),
            company: None,
            score: Points::new(55.0),
            category_title: "Nearly Ready".to_string(),
            source: "Readiness Compass".to_string(),
            submission_date: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn mock_reports_one_entry_per_channel() {
        let notifier = MockNotifier::new(&["records", "email"]);
        let reports = notifier.dispatch(&notice()).await;

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.is_delivered()));
        assert_eq!(notifier.dispatch_count(), 1);
    }

    #[tokio::test]
    async fn scripted_failure_only_affects_its_channel() {
        let notifier = MockNotifier::new(&["records", "email"]).with_failure("email");
        let reports = notifier.dispatch(&notice()).await;

        assert!(reports.iter().find(|r| r.channel == "records").unwrap().is_delivered());
        assert!(!reports.iter().find(|r| r.channel == "email").unwrap().is_delivered());
    }
}
