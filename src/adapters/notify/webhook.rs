//! Webhook notifier adapter.
//!
//! Posts the submission payload to each configured channel as JSON. All
//! channels fire concurrently and independently; each returns its own
//! report and no outcome ever surfaces as an error to the caller.

use async_trait::async_trait;
use futures::future::join_all;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, warn};

use crate::ports::{ChannelReport, Notifier, SubmissionNotice};

/// What a channel does with the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Forwards the submission to an external record-keeping endpoint.
    RecordSync,
    /// Same payload plus a trigger flag that asks the receiver to send an
    /// email alert.
    EmailAlert,
}

/// One configured webhook endpoint. URLs embed access tokens, so they stay
/// wrapped until the request is built.
#[derive(Debug, Clone)]
pub struct WebhookChannel {
    pub name: String,
    pub url: SecretString,
    pub kind: ChannelKind,
}

impl WebhookChannel {
    pub fn new(name: impl Into<String>, url: SecretString, kind: ChannelKind) -> Self {
        Self {
            name: name.into(),
            url,
            kind,
        }
    }
}

/// Multi-channel webhook dispatcher.
pub struct WebhookNotifier {
    client: reqwest::Client,
    channels: Vec<WebhookChannel>,
}

impl WebhookNotifier {
    /// Creates a notifier with a request timeout so a slow endpoint cannot
    /// hold the submission flow open indefinitely.
    pub fn new(channels: Vec<WebhookChannel>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("HTTP client construction only fails on TLS backend misconfiguration");
        Self { client, channels }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    async fn send_to(&self, channel: &WebhookChannel, notice: &SubmissionNotice) -> ChannelReport {
        let payload = match build_payload(channel.kind, notice) {
            Ok(payload) => payload,
            Err(e) => return ChannelReport::failed(&channel.name, e),
        };

        let result = self
            .client
            .post(channel.url.expose_secret())
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                debug!(channel = %channel.name, "submission delivered");
                ChannelReport::delivered(&channel.name)
            }
            Ok(response) => {
                let reason = format!("endpoint returned {}", response.status());
                warn!(channel = %channel.name, %reason, "submission delivery failed");
                ChannelReport::failed(&channel.name, reason)
            }
            Err(e) => {
                warn!(channel = %channel.name, error = %e, "submission delivery failed");
                ChannelReport::failed(&channel.name, e.to_string())
            }
        }
    }
}

fn build_payload(
    kind: ChannelKind,
    notice: &SubmissionNotice,
) -> Result<serde_json::Value, String> {
    let mut payload = serde_json::to_value(notice).map_err(|e| e.to_string())?;
    if kind == ChannelKind::EmailAlert {
        if let Some(map) = payload.as_object_mut() {
            map.insert("triggerEmail".to_string(), serde_json::Value::Bool(true));
        }
    }
    Ok(payload)
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn dispatch(&self, notice: &SubmissionNotice) -> Vec<ChannelReport> {
        join_all(
            self.channels
                .iter()
                .map(|channel| self.send_to(channel, notice)),
        )
        .await
    }
}
