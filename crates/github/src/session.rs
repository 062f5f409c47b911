//! The platform session.
//!
//! A [`Session`] is an authenticated client bound to a resolved organization.
//! It is built once at startup with [`Session::connect`], which checks the
//! token and the organization eagerly, and then passed by reference into
//! every repository operation.

use ghrm_config::Credentials;
use ghrm_protocol::RepositoryConfig;
use tracing::{info, instrument};

use crate::client::GitHubClient;
use crate::error::Result;
use crate::platform::{RemoteRepository, RepositoryPlatform};

/// An authenticated client scoped to one organization.
#[derive(Debug)]
pub struct Session {
    client: GitHubClient,
    login: String,
    organization: String,
}

impl Session {
    /// Authenticates and resolves the target organization.
    ///
    /// # Errors
    ///
    /// - [`Error::Unauthorized`](crate::Error::Unauthorized) if the token is rejected
    /// - [`Error::OrganizationNotFound`](crate::Error::OrganizationNotFound) if
    ///   the organization does not exist
    /// - [`Error::Forbidden`](crate::Error::Forbidden) if the token cannot
    ///   access the organization
    /// - [`Error::Api`](crate::Error::Api) for anything else, unchanged
    #[instrument(skip(credentials), fields(organization = %credentials.organization()))]
    pub async fn connect(credentials: &Credentials) -> Result<Self> {
        let client = GitHubClient::new(credentials.token(), credentials.api_url())?;
        let login = client.validate_token().await?;
        let org = client.organization(credentials.organization()).await?;

        info!(login = %login, organization = %org.login, "session established");
        Ok(Self {
            client,
            login,
            organization: org.login,
        })
    }

    /// Returns the authenticated user's login.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }
}

impl RepositoryPlatform for Session {
    fn organization(&self) -> &str {
        &self.organization
    }

    async fn get_repository(&self, name: &str) -> Result<Option<RemoteRepository>> {
        self.client.get_repository(&self.organization, name).await
    }

    async fn create_repository(&self, config: &RepositoryConfig) -> Result<RemoteRepository> {
        self.client
            .create_org_repository(&self.organization, config)
            .await
    }

    async fn edit_repository(
        &self,
        name: &str,
        config: &RepositoryConfig,
    ) -> Result<RemoteRepository> {
        self.client
            .edit_repository(&self.organization, name, config)
            .await
    }

    async fn delete_repository(&self, name: &str) -> Result<()> {
        self.client
            .delete_repository(&self.organization, name)
            .await
    }
}
