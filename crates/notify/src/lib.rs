//! Chat notifications for ghrm.
//!
//! Notifications are a best-effort side channel: every dispatcher returns a
//! `bool` and never an error. An unset webhook URL disables a dispatcher
//! without any network I/O; HTTP and transport failures are logged and
//! reported as `false`.
//!
//! # Overview
//!
//! - [`Severity`]: success / warning / error / info, each with a fixed color
//! - [`MessageBody`]: a plain string or labelled fields, one line per field
//! - [`DiscordNotifier`] and [`SlackNotifier`]: one webhook each
//! - [`Dispatcher`]: fans one message out to every configured webhook
//! - [`Notifier`]: the trait the CLI driver sends through
//!
//! # Examples
//!
//! ```no_run
//! use ghrm_config::WebhookSettings;
//! use ghrm_notify::{Dispatcher, MessageBody, Notifier, Severity};
//!
//! # async fn example() {
//! let dispatcher = Dispatcher::from_settings(&WebhookSettings::from_env());
//! let body = MessageBody::fields([("Repository", "service-a"), ("Status", "created")]);
//! dispatcher.send("Repository created", &body, Severity::Success).await;
//! # }
//! ```

pub mod discord;
pub mod error;
pub mod message;
pub mod severity;
pub mod slack;
mod webhook;

#[cfg(test)]
mod testing;

pub use discord::DiscordNotifier;
pub use error::{NotifyError, Result};
pub use message::MessageBody;
pub use severity::Severity;
pub use slack::SlackNotifier;

use ghrm_config::WebhookSettings;

/// A best-effort notification sink.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Sends a message, returning `true` if at least one delivery succeeded.
    async fn send(&self, title: &str, body: &MessageBody, severity: Severity) -> bool;
}

/// Fans a message out to Discord and Slack.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    discord: DiscordNotifier,
    slack: SlackNotifier,
}

impl Dispatcher {
    /// Creates a dispatcher from explicit notifiers.
    #[must_use]
    pub fn new(discord: DiscordNotifier, slack: SlackNotifier) -> Self {
        Self { discord, slack }
    }

    /// Creates a dispatcher from webhook settings, sharing one HTTP client.
    #[must_use]
    pub fn from_settings(settings: &WebhookSettings) -> Self {
        let http = reqwest::Client::new();
        Self {
            discord: DiscordNotifier::with_client(settings.discord_url.clone(), http.clone()),
            slack: SlackNotifier::with_client(settings.slack_url.clone(), http),
        }
    }

    /// Returns `true` if at least one webhook is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.discord.is_enabled() || self.slack.is_enabled()
    }
}

impl Notifier for Dispatcher {
    async fn send(&self, title: &str, body: &MessageBody, severity: Severity) -> bool {
        let discord = self.discord.send(title, body, severity).await;
        let slack = self.slack.send(title, body, severity).await;
        discord || slack
    }
}
