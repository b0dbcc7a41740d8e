//! Notification channel configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Webhook notification configuration.
///
/// Endpoints are optional: an unset URL simply disables that channel.
/// URLs embed access tokens and are held as secrets.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Record-sync endpoint (external record keeping)
    #[serde(default)]
    pub record_webhook_url: Option<SecretString>,

    /// Email-alert endpoint (receiver forwards an email notification)
    #[serde(default)]
    pub email_webhook_url: Option<SecretString>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Source label stamped on every outbound submission
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_source() -> String {
    "Readiness Compass".to_string()
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            record_webhook_url: None,
            email_webhook_url: None,
            timeout_secs: default_timeout_secs(),
            source: default_source(),
        }
    }
}

impl NotifyConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=120).contains(&self.timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.source.trim().is_empty() {
            return Err(ValidationError::EmptySource);
        }
        validate_url(&self.record_webhook_url, "record_sync")?;
        validate_url(&self.email_webhook_url, "email_alert")?;
        Ok(())
    }
}

fn validate_url(
    url: &Option<SecretString>,
    channel: &'static str,
) -> Result<(), ValidationError> {
    if let Some(url) = url {
        let exposed = url.expose_secret();
        if !exposed.starts_with("http://") && !exposed.starts_with("https://") {
            return Err(ValidationError::InvalidWebhookUrl(channel));
        }
    }
    Ok(())
}
