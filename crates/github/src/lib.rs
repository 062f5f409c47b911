//! GitHub API client for ghrm.
//!
//! This crate reconciles organization repositories against a desired
//! configuration: it looks repositories up, creates missing ones, edits
//! existing ones and deletes the ones being decommissioned.
//!
//! # Overview
//!
//! - [`GitHubClient`]: Authenticated octocrab wrapper with token and
//!   organization checks, plus raw repository endpoints
//! - [`Session`]: The client bound to a resolved organization, built once per
//!   run and passed by reference into every operation
//! - [`RepositoryPlatform`]: The seam the reconciliation operations run against
//! - [`reconcile`]: [`lookup`], [`create_or_update`] and [`delete`]
//! - [`Error`]: Error types, with [`Error::is_fatal`] separating run-fatal
//!   failures from per-repository ones
//!
//! # Authentication
//!
//! Tokens are handled using [`secrecy::SecretString`] to prevent accidental
//! logging of credentials.
//!
//! # Examples
//!
//! ```no_run
//! use ghrm_config::Credentials;
//! use ghrm_github::{Session, create_or_update};
//! use ghrm_protocol::RepositoryConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::from_env()?;
//! let session = Session::connect(&credentials).await?;
//!
//! let outcome = create_or_update(&session, &RepositoryConfig::new("service-a")).await?;
//! println!("service-a: {outcome}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod platform;
pub mod reconcile;
pub mod repository;
pub mod session;

#[cfg(test)]
mod testing;

pub use client::GitHubClient;
pub use error::{Error, Operation, Result};
pub use platform::{RemoteRepository, RepositoryPlatform};
pub use reconcile::{create_or_update, delete, lookup};
pub use session::Session;
