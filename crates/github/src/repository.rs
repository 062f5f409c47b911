//! Organization repository endpoints.
//!
//! This module extends [`GitHubClient`] with the four raw repository calls
//! reconciliation is built on:
//!
//! - [`GitHubClient::get_repository`]: `GET /repos/{owner}/{repo}`
//! - [`GitHubClient::create_org_repository`]: `POST /orgs/{org}/repos`
//! - [`GitHubClient::edit_repository`]: `PATCH /repos/{owner}/{repo}`
//! - [`GitHubClient::delete_repository`]: `DELETE /repos/{owner}/{repo}`
//!
//! Status codes are mapped to [`Error`] variants here, so callers never have
//! to look at raw HTTP statuses.

use ghrm_protocol::RepositoryConfig;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::error::{Error, Operation, Result, is_name_conflict, status_code};
use crate::platform::RemoteRepository;

/// Characters escaped in a URL path segment. Repository names may contain
/// `-`, `_` and `.`, which are left as-is.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Escapes a single URL path segment.
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

fn repository_url(owner: &str, name: &str) -> String {
    format!("/repos/{}/{}", encode_segment(owner), encode_segment(name))
}

impl GitHubClient {
    /// Fetches a repository.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the platform answers 404.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthorized`] on 401, [`Error::Forbidden`] on 403
    /// and [`Error::Api`] for anything else.
    #[instrument(skip(self), fields(owner = %owner, repo = %name))]
    pub async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<RemoteRepository>> {
        debug!("fetching repository");

        let response: octocrab::Result<RemoteRepository> = self
            .inner()
            .get(repository_url(owner, name), None::<&()>)
            .await;

        match response {
            Ok(repo) => Ok(Some(repo)),
            Err(e) if status_code(&e) == Some(404) => Ok(None),
            Err(e) => Err(Error::classify(e, Operation::Lookup)),
        }
    }

    /// Creates a repository in an organization.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] for a name conflict (422), otherwise
    /// the classified API error.
    #[instrument(skip(self, config), fields(org = %org, repo = %config.name))]
    pub async fn create_org_repository(
        &self,
        org: &str,
        config: &RepositoryConfig,
    ) -> Result<RemoteRepository> {
        debug!(private = config.private, "creating repository");

        let url = format!("/orgs/{}/repos", encode_segment(org));
        let response: octocrab::Result<RemoteRepository> =
            self.inner().post(url, Some(config)).await;

        match response {
            Ok(repo) => {
                debug!("created repository");
                Ok(repo)
            }
            Err(e) if is_name_conflict(&e) => Err(Error::AlreadyExists {
                name: config.name.clone(),
            }),
            Err(e) => Err(Error::classify(e, Operation::Create)),
        }
    }

    /// Edits a repository with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the classified API error.
    #[instrument(skip(self, config), fields(owner = %owner, repo = %name))]
    pub async fn edit_repository(
        &self,
        owner: &str,
        name: &str,
        config: &RepositoryConfig,
    ) -> Result<RemoteRepository> {
        debug!(private = config.private, "editing repository");

        let response: octocrab::Result<RemoteRepository> = self
            .inner()
            .patch(repository_url(owner, name), Some(config))
            .await;

        response.map_err(|e| Error::classify(e, Operation::Update))
    }

    /// Deletes a repository.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Forbidden`] when the token lacks admin rights,
    /// otherwise the classified API error.
    #[instrument(skip(self), fields(owner = %owner, repo = %name))]
    pub async fn delete_repository(&self, owner: &str, name: &str) -> Result<()> {
        debug!("deleting repository");

        self.inner()
            .repos(owner, name)
            .delete()
            .await
            .map_err(|e| Error::classify(e, Operation::Delete))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, FORBIDDEN, INVALID_FIELD, NAME_CONFLICT, NOT_FOUND};

    #[test]
    fn encode_segment_keeps_name_characters() {
        assert_eq!(encode_segment("my-repo_v2.0"), "my-repo_v2.0");
    }

    #[test]
    fn encode_segment_escapes_separators() {
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("a b"), "a%20b");
    }

    #[test]
    fn repository_url_format() {
        assert_eq!(repository_url("acme", "service-a"), "/repos/acme/service-a");
    }

    #[tokio::test]
    async fn get_missing_repository_is_none() {
        let (base_uri, server) = testing::serve(vec![(404, NOT_FOUND)]).await;
        let client = testing::client(&base_uri);

        let repo = client.get_repository("acme", "missing").await.unwrap();

        assert!(repo.is_none());
        assert_eq!(
            server.await.unwrap(),
            vec!["GET /repos/acme/missing HTTP/1.1"]
        );
    }

    #[tokio::test]
    async fn get_existing_repository() {
        let (base_uri, _server) = testing::serve(vec![(
            200,
            r#"{"name": "service-a", "full_name": "acme/service-a", "private": true}"#,
        )])
        .await;
        let client = testing::client(&base_uri);

        let repo = client
            .get_repository("acme", "service-a")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(repo.full_name, "acme/service-a");
        assert!(repo.private);
    }

    #[tokio::test]
    async fn get_forbidden_is_fatal() {
        let (base_uri, _server) = testing::serve(vec![(403, FORBIDDEN)]).await;
        let client = testing::client(&base_uri);

        let err = client
            .get_repository("acme", "service-a")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Forbidden {
                operation: Operation::Lookup,
                ..
            }
        ));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn create_name_conflict_is_already_exists() {
        let (base_uri, server) = testing::serve(vec![(422, NAME_CONFLICT)]).await;
        let client = testing::client(&base_uri);

        let err = client
            .create_org_repository("acme", &RepositoryConfig::new("service-a"))
            .await
            .unwrap_err();

        assert!(
            matches!(&err, Error::AlreadyExists { name } if name == "service-a"),
            "unexpected error: {err:?}"
        );
        assert_eq!(
            server.await.unwrap(),
            vec!["POST /orgs/acme/repos HTTP/1.1"]
        );
    }

    #[tokio::test]
    async fn create_other_validation_failure_is_api_error() {
        let (base_uri, _server) = testing::serve(vec![(422, INVALID_FIELD)]).await;
        let client = testing::client(&base_uri);

        let err = client
            .create_org_repository("acme", &RepositoryConfig::new("service-a"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(_)), "unexpected error: {err:?}");
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn delete_forbidden() {
        let (base_uri, server) = testing::serve(vec![(403, FORBIDDEN)]).await;
        let client = testing::client(&base_uri);

        let err = client
            .delete_repository("acme", "service-a")
            .await
            .unwrap_err();

        assert!(
            matches!(
                &err,
                Error::Forbidden {
                    operation: Operation::Delete,
                    reason,
                } if reason == "Must have admin rights to Repository."
            ),
            "unexpected error: {err:?}"
        );
        assert!(!err.is_fatal());
        assert_eq!(
            server.await.unwrap(),
            vec!["DELETE /repos/acme/service-a HTTP/1.1"]
        );
    }
}
