//! Configuration management for the ghrm tool.
//!
//! This crate handles loading repository manifests and decommission lists
//! from YAML files, and reading platform credentials and webhook URLs from
//! the process environment.
//!
//! # Overview
//!
//! - [`manifest`]: The repositories manifest with flexible `repositories` parsing
//! - [`decommission`]: The list of repositories to delete
//! - [`env`]: Credentials and webhook settings from environment variables
//! - [`persistence`]: YAML file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Manifest Format
//!
//! The `repositories` key accepts two formats:
//!
//! ```yaml
//! description: Shared default description
//! repositories:
//!   service-a: {}
//!   service-b:
//!     description: Overrides the default
//!     private: false
//! ```
//!
//! ```yaml
//! description: Shared default description
//! repositories:
//!   - service-a
//!   - service-b
//! ```
//!
//! # Environment
//!
//! | Variable              | Required | Purpose                          |
//! |-----------------------|----------|----------------------------------|
//! | `GITHUB_TOKEN`        | yes      | Access token                     |
//! | `GITHUB_ORG`          | yes      | Target organization              |
//! | `GITHUB_API_URL`      | no       | GitHub Enterprise API base URI   |
//! | `DISCORD_WEBHOOK_URL` | no       | Enables Discord notifications    |
//! | `SLACK_WEBHOOK_URL`   | no       | Enables Slack notifications      |
//!
//! # Examples
//!
//! ```no_run
//! use ghrm_config::RepositoryManifest;
//!
//! # fn example() -> ghrm_config::Result<()> {
//! let manifest = RepositoryManifest::load("repositories.yaml")?;
//! for config in manifest.repository_configs() {
//!     println!("{} (private: {})", config.name, config.private);
//! }
//! # Ok(())
//! # }
//! ```

pub mod decommission;
pub mod env;
pub mod error;
pub mod manifest;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use decommission::DecommissionList;
pub use env::{Credentials, WebhookSettings};
pub use error::{ConfigError, Result};
pub use manifest::{RepositoryEntries, RepositoryEntry, RepositoryManifest};
