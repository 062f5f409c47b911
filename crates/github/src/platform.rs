//! The repository platform seam.
//!
//! [`RepositoryPlatform`] is the narrow surface the reconciliation operations
//! need from the hosting platform. [`Session`](crate::Session) implements it
//! against the GitHub API; tests implement it in memory.

use ghrm_protocol::RepositoryConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A repository as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    /// Repository name.
    pub name: String,
    /// `owner/name`.
    #[serde(default)]
    pub full_name: String,
    /// Whether the repository is private.
    #[serde(default)]
    pub private: bool,
    /// Web URL.
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Repository operations scoped to one organization.
///
/// Implementations map platform statuses to [`Error`](crate::Error) variants:
/// a missing repository is `Ok(None)` from
/// [`get_repository`](Self::get_repository), a create conflict is
/// [`Error::AlreadyExists`](crate::Error::AlreadyExists).
#[allow(async_fn_in_trait)]
pub trait RepositoryPlatform {
    /// Returns the organization every call is scoped to.
    fn organization(&self) -> &str;

    /// Fetches a repository, or `None` if it does not exist.
    async fn get_repository(&self, name: &str) -> Result<Option<RemoteRepository>>;

    /// Creates a repository.
    async fn create_repository(&self, config: &RepositoryConfig) -> Result<RemoteRepository>;

    /// Edits an existing repository.
    async fn edit_repository(
        &self,
        name: &str,
        config: &RepositoryConfig,
    ) -> Result<RemoteRepository>;

    /// Deletes a repository.
    async fn delete_repository(&self, name: &str) -> Result<()>;
}
