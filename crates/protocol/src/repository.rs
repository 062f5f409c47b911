//! Repository configuration and the override merge rule.
//!
//! A manifest entry carries a [`RepositoryOverrides`] value. The effective
//! [`RepositoryConfig`] sent to the platform is built from the defaults
//! `{ name, description, private: true }` with every explicitly set override
//! taking precedence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attributes the platform only accepts when a repository is first created.
///
/// These are stripped by [`RepositoryConfig::for_update`] before an edit call.
pub const UPDATE_UNSUPPORTED_ATTRIBUTES: &[&str] =
    &["auto_init", "gitignore_template", "license_template"];

/// Attribute keys that are never forwarded from the extension map.
///
/// The repository name always comes from the manifest key.
const RESERVED_ATTRIBUTES: &[&str] = &["name"];

/// Per-repository overrides as written in a manifest.
///
/// Well-known attributes have named fields; everything else the platform
/// understands (`has_issues`, `homepage`, `visibility`, ...) lands in
/// [`extra`](Self::extra) and is forwarded verbatim.
///
/// # Examples
///
/// ```
/// use ghrm_protocol::RepositoryOverrides;
///
/// let overrides: RepositoryOverrides =
///     serde_json::from_str(r#"{"description": "d", "has_wiki": false}"#).unwrap();
/// assert_eq!(overrides.description.as_deref(), Some("d"));
/// assert_eq!(overrides.extra["has_wiki"], serde_json::json!(false));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryOverrides {
    /// Repository description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Visibility flag. Unset means "use the default" (private).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    /// Any other platform-supported attribute.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RepositoryOverrides {
    /// Returns `true` if no attribute is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.private.is_none() && self.extra.is_empty()
    }

    /// Returns the keys of the extension map that will be ignored when merging.
    #[must_use]
    pub fn reserved_keys(&self) -> Vec<&str> {
        self.extra
            .keys()
            .map(String::as_str)
            .filter(|key| RESERVED_ATTRIBUTES.contains(key))
            .collect()
    }
}

/// The effective configuration of a single repository.
///
/// Serializes directly into the JSON body of the platform's create and edit
/// calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryConfig {
    /// Repository name. Never empty.
    pub name: String,

    /// Repository description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the repository is private.
    pub private: bool,

    /// Additional attributes forwarded to the platform.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RepositoryConfig {
    /// Creates the default configuration for `name`: no description, private.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghrm_protocol::RepositoryConfig;
    ///
    /// let config = RepositoryConfig::new("service-a");
    /// assert!(config.private);
    /// assert!(config.description.is_none());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            private: true,
            extra: BTreeMap::new(),
        }
    }

    /// Builds the effective configuration for a repository.
    ///
    /// Starts from `{ name, description: default_description, private: true }`
    /// and applies every attribute set in `overrides`. Explicit overrides
    /// always win; unset ones leave the default in place. A `name` key in the
    /// extension map is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghrm_protocol::{RepositoryConfig, RepositoryOverrides};
    ///
    /// let overrides = RepositoryOverrides {
    ///     description: Some("mine".to_string()),
    ///     ..Default::default()
    /// };
    /// let config = RepositoryConfig::merged("repo", Some("default"), &overrides);
    /// assert_eq!(config.description.as_deref(), Some("mine"));
    /// assert!(config.private);
    /// ```
    #[must_use]
    pub fn merged(
        name: impl Into<String>,
        default_description: Option<&str>,
        overrides: &RepositoryOverrides,
    ) -> Self {
        let mut config = Self::new(name);
        config.description = overrides
            .description
            .clone()
            .or_else(|| default_description.map(str::to_string));
        if let Some(private) = overrides.private {
            config.private = private;
        }
        config.extra = overrides
            .extra
            .iter()
            .filter(|(key, _)| !RESERVED_ATTRIBUTES.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        config
    }

    /// Returns a copy without the attributes the edit call rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghrm_protocol::RepositoryConfig;
    ///
    /// let mut config = RepositoryConfig::new("repo");
    /// config.extra.insert("auto_init".to_string(), true.into());
    /// config.extra.insert("has_wiki".to_string(), false.into());
    ///
    /// let update = config.for_update();
    /// assert!(!update.extra.contains_key("auto_init"));
    /// assert!(update.extra.contains_key("has_wiki"));
    /// ```
    #[must_use]
    pub fn for_update(&self) -> Self {
        let mut config = self.clone();
        config
            .extra
            .retain(|key, _| !UPDATE_UNSUPPORTED_ATTRIBUTES.contains(&key.as_str()));
        config
    }
}
