//! YAML file reading and writing.
//!
//! Manifests are plain YAML documents. An empty document (no content, or only
//! comments) or an explicit `null` is reported as `None` so callers can warn
//! instead of failing.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};

/// Returns `true` if the document has no content besides blank lines and comments.
fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

/// Reads and parses a YAML file.
///
/// # Returns
///
/// - `Ok(Some(value))` for a non-empty document
/// - `Ok(None)` for an empty or `null` document
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read (missing,
/// permission denied) and [`ConfigError::ParseYaml`] if it is not valid YAML
/// or does not match `T`.
///
/// # Examples
///
/// ```no_run
/// use ghrm_config::persistence::read_yaml_file;
/// use ghrm_config::RepositoryManifest;
///
/// # fn main() -> ghrm_config::Result<()> {
/// let manifest: Option<RepositoryManifest> = read_yaml_file("repositories.yaml")?;
/// # Ok(())
/// # }
/// ```
pub fn read_yaml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Option<T>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    if is_blank_document(&content) {
        return Ok(None);
    }

    let parse_error = |source| ConfigError::ParseYaml {
        path: path.to_path_buf(),
        source,
    };

    let value: serde_yaml::Value = serde_yaml::from_str(&content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(None);
    }

    serde_yaml::from_value(value).map(Some).map_err(parse_error)
}

/// Writes a value to a YAML file, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the file cannot be
/// written.
pub fn write_yaml_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty() && !p.exists())
    {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serde_yaml::to_string(value)?;

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
