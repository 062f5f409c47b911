//! Discord webhook notifications.
//!
//! Messages are posted as a single embed:
//!
//! ```json
//! { "content": null, "embeds": [{ "title": "...", "description": "...", "color": 3066993, "timestamp": "..." }] }
//! ```

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use crate::Notifier;
use crate::message::MessageBody;
use crate::severity::Severity;
use crate::webhook::post_json;

/// Posts notifications to a Discord webhook.
#[derive(Debug, Clone)]
pub struct DiscordNotifier {
    webhook_url: Option<String>,
    http: reqwest::Client,
}

impl DiscordNotifier {
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
    #[must_use]
    pub fn payload(
        title: &str,
        body: &MessageBody,
        severity: Severity,
        timestamp: DateTime<Utc>,
    ) -> Value {
        json!({
            "content": null,
            "embeds": [{
                "title": title,
                "description": body.render("**"),
                "color": severity.discord_color(),
                "timestamp": timestamp.to_rfc3339(),
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
            warn!("DISCORD_WEBHOOK_URL not set, Discord notifications are disabled");
            return false;
        };

        let payload = Self::payload(title, body, severity, Utc::now());
        match post_json(&self.http, url, &payload).await {
            Ok(()) => {
                debug!("Discord notification sent");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to send Discord notification");
                false
            }
        }
    }
}

impl Notifier for DiscordNotifier {
    async fn send(&self, title: &str, body: &MessageBody, severity: Severity) -> bool {
        DiscordNotifier::send(self, title, body, severity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn payload_shape() {
        let timestamp = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let payload = DiscordNotifier::payload(
            "Repository created",
            &MessageBody::from("service-a"),
            Severity::Success,
            timestamp,
        );

        assert_eq!(
            payload,
            json!({
                "content": null,
                "embeds": [{
                    "title": "Repository created",
                    "description": "service-a",
                    "color": 0x2ECC71,
                    "timestamp": "2024-01-02T03:04:05+00:00",
                }],
            })
        );
    }

    #[test]
    fn payload_renders_fields_as_lines() {
        let payload = DiscordNotifier::payload(
            "t",
            &MessageBody::fields([("Repository", "a"), ("Status", "created")]),
            Severity::Info,
            Utc::now(),
        );
        assert_eq!(
            payload["embeds"][0]["description"],
            "**Repository**: a\n**Status**: created"
        );
    }

    #[tokio::test]
    async fn send_without_url_returns_false() {
        let notifier = DiscordNotifier::new(None);
        assert!(!notifier.is_enabled());
        assert!(
            !notifier
                .send("t", &MessageBody::from("m"), Severity::Info)
                .await
        );
    }

    #[tokio::test]
    async fn send_posts_json_payload() {
        let (url, server) = testing::respond_once(204).await;
        let notifier = DiscordNotifier::with_client(Some(url), testing::client());

        assert!(
            notifier
                .send("Deleted", &MessageBody::from("repo-a"), Severity::Warning)
                .await
        );

        let request = server.await.unwrap();
        assert!(request.head.starts_with("POST /hook"));
        assert!(
            request
                .head
                .to_ascii_lowercase()
                .contains("content-type: application/json")
        );
        let body = request.json();
        assert_eq!(body["embeds"][0]["title"], "Deleted");
        assert_eq!(body["embeds"][0]["color"], 0xFFA500);
        assert!(body["content"].is_null());
    }

    #[tokio::test]
    async fn send_non_success_status_returns_false() {
        let (url, server) = testing::respond_once(500).await;
        let notifier = DiscordNotifier::with_client(Some(url), testing::client());

        assert!(
            !notifier
                .send("t", &MessageBody::from("m"), Severity::Error)
                .await
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn send_transport_failure_returns_false() {
        let notifier =
            DiscordNotifier::with_client(Some(testing::closed_url().await), testing::client());
        assert!(
            !notifier
                .send("t", &MessageBody::from("m"), Severity::Error)
                .await
        );
    }
}
