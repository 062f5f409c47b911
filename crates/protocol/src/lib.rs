//! Shared protocol types for the ghrm tool.
//!
//! This crate defines the data model passed between the config loader, the
//! GitHub reconciliation layer and the CLI driver.
//!
//! # Overview
//!
//! - [`repository`]: Per-repository overrides and the effective
//!   [`RepositoryConfig`] produced by the merge rule
//! - [`outcome`]: Closed enumerations for actions and per-repository outcomes,
//!   plus the [`BatchSummary`] tally
//!
//! # Examples
//!
//! ```
//! use ghrm_protocol::{RepositoryConfig, RepositoryOverrides};
//!
//! let overrides = RepositoryOverrides {
//!     private: Some(false),
//!     ..Default::default()
//! };
//!
//! let config = RepositoryConfig::merged("tooling", Some("Shared tooling"), &overrides);
//! assert_eq!(config.description.as_deref(), Some("Shared tooling"));
//! assert!(!config.private);
//! ```

pub mod outcome;
pub mod repository;

// Re-export primary types at crate root for convenience
pub use outcome::{Action, BatchSummary, OperationOutcome};
pub use repository::{RepositoryConfig, RepositoryOverrides, UPDATE_UNSUPPORTED_ATTRIBUTES};
