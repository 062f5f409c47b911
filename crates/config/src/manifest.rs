//! The repositories manifest.
//!
//! The `repositories` key accepts either a mapping of name to overrides or a
//! sequence of bare names. Both forms are normalized into an ordered list of
//! [`RepositoryEntry`] values, preserving the order of the file.

use std::collections::HashSet;
use std::path::Path;

use ghrm_protocol::{RepositoryConfig, RepositoryOverrides};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::persistence::{read_yaml_file, write_yaml_file};

/// A single manifest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryEntry {
    /// Repository name.
    pub name: String,
    /// Attributes overriding the defaults.
    pub overrides: RepositoryOverrides,
}

impl RepositoryEntry {
    /// Creates an entry with no overrides.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: RepositoryOverrides::default(),
        }
    }

    /// Creates an entry with the given overrides.
    #[must_use]
    pub fn with_overrides(name: impl Into<String>, overrides: RepositoryOverrides) -> Self {
        Self {
            name: name.into(),
            overrides,
        }
    }
}

/// The ordered set of entries under `repositories`.
///
/// Deserializes from either form:
///
/// ```
/// use ghrm_config::RepositoryEntries;
///
/// let from_map: RepositoryEntries =
///     serde_yaml::from_str("repo-a: {}\nrepo-b:\n  private: false\n").unwrap();
/// let from_list: RepositoryEntries = serde_yaml::from_str("- repo-a\n- repo-b\n").unwrap();
///
/// assert_eq!(from_map.names(), vec!["repo-a", "repo-b"]);
/// assert_eq!(from_list.names(), vec!["repo-a", "repo-b"]);
/// ```
///
/// Always serializes as a mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryEntries(Vec<RepositoryEntry>);

impl RepositoryEntries {
    /// Creates a collection from entries.
    #[must_use]
    pub fn new(entries: Vec<RepositoryEntry>) -> Self {
        Self(entries)
    }

    /// Returns the entries in file order.
    #[must_use]
    pub fn as_slice(&self) -> &[RepositoryEntry] {
        &self.0
    }

    /// Returns the repository names in file order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that every name is non-empty and unique.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRepositoryName`] or
    /// [`ConfigError::DuplicateRepository`].
    pub fn validate(&self) -> Result<()> {
        validate_names(self.0.iter().map(|entry| entry.name.as_str()))
    }
}

/// Rejects blank and repeated repository names.
pub(crate) fn validate_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyRepositoryName);
        }
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateRepository(name.to_string()));
        }
    }
    Ok(())
}

impl Serialize for RepositoryEntries {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.name, &entry.overrides)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RepositoryEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, SeqAccess, Visitor};

        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RepositoryEntries;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str(
                    "a mapping of repository name to attributes, or a sequence of repository names",
                )
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RepositoryEntries::default())
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RepositoryEntries::default())
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(name) = seq.next_element::<String>()? {
                    entries.push(RepositoryEntry::new(name));
                }
                Ok(RepositoryEntries(entries))
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(name) = map.next_key::<String>()? {
                    // `repo-a:` with no value is a null
                    let overrides: Option<RepositoryOverrides> = map.next_value()?;
                    entries.push(RepositoryEntry::with_overrides(
                        name,
                        overrides.unwrap_or_default(),
                    ));
                }
                Ok(RepositoryEntries(entries))
            }
        }

        deserializer.deserialize_any(EntriesVisitor)
    }
}

/// A repositories manifest.
///
/// # Examples
///
/// ```
/// use ghrm_config::RepositoryManifest;
///
/// let manifest: RepositoryManifest = serde_yaml::from_str(
///     "description: default\nrepositories:\n  - repo-a\n",
/// )
/// .unwrap();
///
/// let configs = manifest.repository_configs();
/// assert_eq!(configs[0].name, "repo-a");
/// assert_eq!(configs[0].description.as_deref(), Some("default"));
/// assert!(configs[0].private);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryManifest {
    /// Default description for entries that do not set their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The repositories to manage.
    #[serde(default)]
    pub repositories: RepositoryEntries,
}

impl RepositoryManifest {
    /// Loads and validates a manifest.
    ///
    /// An empty document, or one without repositories, yields an empty
    /// manifest and a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// lists an empty or duplicated repository name.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let Some(manifest) = read_yaml_file::<Self>(path)? else {
            warn!(path = %path.display(), "empty configuration file");
            return Ok(Self::default());
        };

        if manifest.repositories.is_empty() {
            warn!(path = %path.display(), "configuration lists no repositories");
        }

        manifest.validate()?;
        debug!(
            path = %path.display(),
            count = manifest.repositories.len(),
            "loaded repository manifest"
        );
        Ok(manifest)
    }

    /// Saves the manifest as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_yaml_file(path, self)
    }

    /// Validates repository names and reports ignored override keys.
    ///
    /// # Errors
    ///
    /// Returns an error for empty or duplicated names.
    pub fn validate(&self) -> Result<()> {
        self.repositories.validate()?;
        for entry in self.repositories.as_slice() {
            for key in entry.overrides.reserved_keys() {
                warn!(repository = %entry.name, key, "ignoring reserved override key");
            }
        }
        Ok(())
    }

    /// Returns the effective configuration of every repository, in file order.
    #[must_use]
    pub fn repository_configs(&self) -> Vec<RepositoryConfig> {
        self.repositories
            .as_slice()
            .iter()
            .map(|entry| {
                RepositoryConfig::merged(
                    entry.name.clone(),
                    self.description.as_deref(),
                    &entry.overrides,
                )
            })
            .collect()
    }
}
