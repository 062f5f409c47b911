//! Slack webhook notifications.
//!
//! Messages are posted as a single colored attachment whose text is the
//! bold title followed by the rendered body:
//!
//! ```json
//! { "attachments": [{ "color": "#36a64f", "text": "*title*\nbody" }] }
//! ```

use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use crate::Notifier;
use crate::message::MessageBody;
use crate::severity::Severity;
use crate::webhook::post_json;

/// Posts notifications to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    webhook_url: Option<String>,
    http: reqwest::Client,
}

impl SlackNotifier {
    /// Creates a notifier. `None` disables it.
    #[must_use]
    pub fn new(webhook_url: Option<String>) -> Self {
        Self::with_client(webhook_url, reqwest::Client::new())
    }

    /// Creates a notifier sharing an existing HTTP client.
    #[must_use]
    pub fn with_client(webhook_url: Option<String>, http: reqwest::Client) -> Self {
        Self { webhook_url, http }
    }

    /// Returns `true` if a webhook URL is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Builds the webhook payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghrm_notify::{MessageBody, Severity, SlackNotifier};
    ///
    /// let payload = SlackNotifier::payload("Done", &MessageBody::from("ok"), Severity::Info);
    /// assert_eq!(payload["attachments"][0]["text"], "*Done*\nok");
    /// ```
    #[must_use]
    pub fn payload(title: &str, body: &MessageBody, severity: Severity) -> Value {
        json!({
            "attachments": [{
                "color": severity.slack_color(),
                "text": format!("*{title}*\n{}", body.render("*")),
            }],
        })
    }

    /// Sends a notification.
    ///
    /// Returns `false` without any network I/O when no webhook URL is
    /// configured, and `false` after logging on any delivery failure.
    #[instrument(skip_all, fields(title = %title, severity = %severity))]
    pub async fn send(&self, title: &str, body: &MessageBody, severity: Severity) -> bool {
        let Some(url) = self.webhook_url.as_deref() else {
            warn!("SLACK_WEBHOOK_URL not set, Slack notifications are disabled");
            return false;
        };

        let payload = Self::payload(title, body, severity);
        match post_json(&self.http, url, &payload).await {
            Ok(()) => {
                debug!("Slack notification sent");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to send Slack notification");
                false
            }
        }
    }
}

impl Notifier for SlackNotifier {
    async fn send(&self, title: &str, body: &MessageBody, severity: Severity) -> bool {
        SlackNotifier::send(self, title, body, severity).await
    }
}
