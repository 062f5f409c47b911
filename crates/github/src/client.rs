//! GitHub API client implementation.
//!
//! This module provides the [`GitHubClient`] struct, an authenticated
//! octocrab wrapper with the identity and organization checks a session
//! needs before touching repositories.

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Operation, Result, status_code};
use crate::repository::encode_segment;

/// Minimal view of an organization as returned by `GET /orgs/{org}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationInfo {
    /// The organization login.
    pub login: String,
}

/// Authenticated GitHub API client.
///
/// # Security
///
/// Tokens are passed as [`SecretString`] and only exposed to the octocrab
/// builder, never stored in a form that shows up in debug output.
///
/// # Examples
///
/// ```no_run
/// use secrecy::SecretString;
/// use ghrm_github::GitHubClient;
///
/// # async fn example() -> ghrm_github::Result<()> {
/// let token = SecretString::from("ghp_your_token".to_string());
/// let client = GitHubClient::new(&token, None)?;
///
/// let login = client.validate_token().await?;
/// println!("Authenticated as {login}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GitHubClient {
    /// The underlying octocrab client.
    inner: Octocrab,
}

impl GitHubClient {
    /// Creates a new authenticated GitHub client.
    ///
    /// # Arguments
    ///
    /// * `token` - GitHub personal access token
    /// * `base_uri` - Optional API base URI (GitHub Enterprise); defaults to
    ///   `https://api.github.com`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URI is invalid or the octocrab client
    /// fails to initialize.
    #[instrument(skip(token), fields(base_uri = base_uri.unwrap_or("default")))]
    pub fn new(token: &SecretString, base_uri: Option<&str>) -> Result<Self> {
        debug!("creating authenticated GitHub client");
        let mut builder = Octocrab::builder().personal_token(token.expose_secret());
        if let Some(uri) = base_uri {
            builder = builder.base_uri(uri).map_err(Error::Api)?;
        }
        let inner = builder.build().map_err(Error::Api)?;

        Ok(Self { inner })
    }

    /// Validates the token by calling the `/user` endpoint.
    ///
    /// # Returns
    ///
    /// The login of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthorized`] if the platform rejects the token and
    /// [`Error::Api`] for other failures.
    #[instrument(skip(self))]
    pub async fn validate_token(&self) -> Result<String> {
        debug!("validating token by calling /user endpoint");
        match self.inner.current().user().await {
            Ok(user) => {
                debug!(login = %user.login, "token validated successfully");
                Ok(user.login)
            }
            Err(e) => {
                warn!(error = %e, "token validation failed");
                Err(Error::classify(e, Operation::Authenticate))
            }
        }
    }

    /// Resolves an organization by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrganizationNotFound`] on 404, [`Error::Forbidden`]
    /// on 403, [`Error::Unauthorized`] on 401, and [`Error::Api`] otherwise.
    #[instrument(skip(self))]
    pub async fn organization(&self, name: &str) -> Result<OrganizationInfo> {
        debug!("resolving organization");
        let url = format!("/orgs/{}", encode_segment(name));
        let response: octocrab::Result<OrganizationInfo> = self.inner.get(&url, None::<&()>).await;
        match response {
            Ok(org) => {
                debug!(login = %org.login, "organization resolved");
                Ok(org)
            }
            Err(e) if status_code(&e) == Some(404) => {
                warn!("organization not found");
                Err(Error::OrganizationNotFound {
                    organization: name.to_string(),
                })
            }
            Err(e) => {
                warn!(error = %e, "failed to resolve organization");
                Err(Error::classify(e, Operation::ResolveOrganization))
            }
        }
    }

    /// Returns a reference to the underlying octocrab client.
    ///
    /// This allows direct access to the full octocrab API for operations
    /// not wrapped by this client.
    #[must_use]
    pub fn inner(&self) -> &Octocrab {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, BAD_CREDENTIALS, FORBIDDEN, NOT_FOUND, ORGANIZATION};

    #[tokio::test]
    async fn new_client_with_default_base_uri() {
        let token = SecretString::from("fake_token_for_testing".to_string());
        let client = GitHubClient::new(&token, None).unwrap();
        let _octocrab: &Octocrab = client.inner();
    }

    #[tokio::test]
    async fn new_client_with_enterprise_base_uri() {
        let token = SecretString::from("fake_token_for_testing".to_string());
        let client = GitHubClient::new(&token, Some("https://ghe.example.com/api/v3/"));
        assert!(client.is_ok());
    }

    #[test]
    fn organization_info_deserializes_extra_fields() {
        let json = r#"{"login": "acme", "id": 1, "url": "https://api.github.com/orgs/acme"}"#;
        let org: OrganizationInfo = serde_json::from_str(json).unwrap();
        assert_eq!(org.login, "acme");
    }

    #[tokio::test]
    async fn validate_token_rejected() {
        let (base_uri, server) = testing::serve(vec![(401, BAD_CREDENTIALS)]).await;
        let client = testing::client(&base_uri);

        let err = client.validate_token().await.unwrap_err();

        assert!(
            matches!(&err, Error::Unauthorized { reason } if reason == "Bad credentials"),
            "unexpected error: {err:?}"
        );
        assert!(err.is_fatal());
        assert_eq!(server.await.unwrap(), vec!["GET /user HTTP/1.1"]);
    }

    #[tokio::test]
    async fn organization_resolved() {
        let (base_uri, server) = testing::serve(vec![(200, ORGANIZATION)]).await;
        let client = testing::client(&base_uri);

        let org = client.organization("acme").await.unwrap();

        assert_eq!(org.login, "acme");
        assert_eq!(server.await.unwrap(), vec!["GET /orgs/acme HTTP/1.1"]);
    }

    #[tokio::test]
    async fn organization_not_found() {
        let (base_uri, _server) = testing::serve(vec![(404, NOT_FOUND)]).await;
        let client = testing::client(&base_uri);

        let err = client.organization("nope").await.unwrap_err();

        assert!(
            matches!(&err, Error::OrganizationNotFound { organization } if organization == "nope"),
            "unexpected error: {err:?}"
        );
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn organization_forbidden() {
        let (base_uri, _server) = testing::serve(vec![(403, FORBIDDEN)]).await;
        let client = testing::client(&base_uri);

        let err = client.organization("acme").await.unwrap_err();

        assert!(
            matches!(
                err,
                Error::Forbidden {
                    operation: Operation::ResolveOrganization,
                    ..
                }
            ),
            "unexpected error: {err:?}"
        );
        assert!(err.is_fatal());
    }
}
