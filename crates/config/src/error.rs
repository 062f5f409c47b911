//! Error types for configuration operations.
//!
//! This module defines the error types that can occur while reading
//! manifests and environment settings.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("invalid YAML in {path}: {source}")]
    ParseYaml {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to serialize configuration to YAML.
    #[error("failed to serialize config: {0}")]
    SerializeYaml(#[from] serde_yaml::Error),

    /// A required environment variable is not set.
    #[error("{var} environment variable is not set")]
    MissingEnvironment {
        /// The variable name.
        var: &'static str,
    },

    /// A repository entry has an empty name.
    #[error("repository name cannot be empty")]
    EmptyRepositoryName,

    /// The same repository is listed more than once.
    #[error("repository `{0}` is listed more than once")]
    DuplicateRepository(String),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
