//! Settings read from the process environment.
//!
//! Every reader has a `from_lookup` variant taking a lookup function, so the
//! parsing rules can be exercised without touching the real environment.
//! Empty values are treated as unset.

use secrecy::SecretString;

use crate::error::{ConfigError, Result};

/// Access token variable.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Organization variable.
pub const ORG_VAR: &str = "GITHUB_ORG";
/// Optional API base URI, for GitHub Enterprise.
pub const API_URL_VAR: &str = "GITHUB_API_URL";
/// Discord webhook URL variable.
pub const DISCORD_WEBHOOK_VAR: &str = "DISCORD_WEBHOOK_URL";
/// Slack webhook URL variable.
pub const SLACK_WEBHOOK_VAR: &str = "SLACK_WEBHOOK_URL";

fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Option<String> {
    lookup(var)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Credentials for the hosting platform.
///
/// The token is held as a [`SecretString`] so it never shows up in debug
/// output or logs.
#[derive(Debug)]
pub struct Credentials {
    token: SecretString,
    organization: String,
    api_url: Option<String>,
}

impl Credentials {
    /// Creates credentials directly.
    #[must_use]
    pub fn new(token: SecretString, organization: impl Into<String>) -> Self {
        Self {
            token,
            organization: organization.into(),
            api_url: None,
        }
    }

    /// Reads credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironment`] if `GITHUB_TOKEN` or
    /// `GITHUB_ORG` is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(process_env)
    }

    /// Reads credentials through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironment`] for a missing required variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghrm_config::Credentials;
    ///
    /// let creds = Credentials::from_lookup(|var| match var {
    ///     "GITHUB_TOKEN" => Some("ghp_xxx".to_string()),
    ///     "GITHUB_ORG" => Some("acme".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(creds.organization(), "acme");
    /// assert!(creds.api_url().is_none());
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = non_empty(&lookup, TOKEN_VAR)
            .ok_or(ConfigError::MissingEnvironment { var: TOKEN_VAR })?;
        let organization =
            non_empty(&lookup, ORG_VAR).ok_or(ConfigError::MissingEnvironment { var: ORG_VAR })?;

        Ok(Self {
            token: SecretString::from(token),
            organization,
            api_url: non_empty(&lookup, API_URL_VAR),
        })
    }

    /// Sets the API base URI.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Returns the access token.
    #[must_use]
    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Returns the organization name.
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the API base URI override, if any.
    #[must_use]
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}

/// Webhook URLs gating notification dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookSettings {
    /// Discord webhook URL.
    pub discord_url: Option<String>,
    /// Slack webhook URL.
    pub slack_url: Option<String>,
}

impl WebhookSettings {
    /// Reads webhook URLs from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    /// Reads webhook URLs through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            discord_url: non_empty(&lookup, DISCORD_WEBHOOK_VAR),
            slack_url: non_empty(&lookup, SLACK_WEBHOOK_VAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn credentials_from_lookup() {
        let creds = Credentials::from_lookup(lookup(&[
            ("GITHUB_TOKEN", "ghp_secret"),
            ("GITHUB_ORG", "acme"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3"),
        ]))
        .unwrap();

        assert_eq!(creds.token().expose_secret(), "ghp_secret");
        assert_eq!(creds.organization(), "acme");
        assert_eq!(creds.api_url(), Some("https://ghe.example.com/api/v3"));
    }

    #[test]
    fn credentials_missing_token() {
        let result = Credentials::from_lookup(lookup(&[("GITHUB_ORG", "acme")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvironment { var: "GITHUB_TOKEN" })
        ));
    }

    #[test]
    fn credentials_missing_org() {
        let result = Credentials::from_lookup(lookup(&[("GITHUB_TOKEN", "ghp_secret")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvironment { var: "GITHUB_ORG" })
        ));
    }

    #[test]
    fn credentials_empty_value_is_missing() {
        let result =
            Credentials::from_lookup(lookup(&[("GITHUB_TOKEN", "  "), ("GITHUB_ORG", "acme")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvironment { var: "GITHUB_TOKEN" })
        ));
    }

    #[test]
    fn credentials_debug_redacts_token() {
        let creds = Credentials::new(SecretString::from("ghp_secret".to_string()), "acme");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("acme"));
    }

    #[test]
    fn webhooks_from_lookup() {
        let settings = WebhookSettings::from_lookup(lookup(&[
            ("DISCORD_WEBHOOK_URL", "https://discord.example/hook"),
            ("SLACK_WEBHOOK_URL", ""),
        ]));
        assert_eq!(
            settings.discord_url.as_deref(),
            Some("https://discord.example/hook")
        );
        assert!(settings.slack_url.is_none());
    }

    #[test]
    fn webhooks_default_is_disabled() {
        let settings = WebhookSettings::from_lookup(|_| None);
        assert_eq!(settings, WebhookSettings::default());
    }
}
