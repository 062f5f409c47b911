//! Error types for GitHub API operations.
//!
//! This module defines the error types that can occur during GitHub API
//! interactions, and classifies raw API failures by HTTP status.

use std::fmt;

/// The platform operation during which an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Checking the token against the identity endpoint.
    Authenticate,
    /// Resolving the target organization.
    ResolveOrganization,
    /// Fetching a repository.
    Lookup,
    /// Creating a repository.
    Create,
    /// Editing a repository.
    Update,
    /// Deleting a repository.
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Authenticate => "authenticating",
            Self::ResolveOrganization => "resolving organization",
            Self::Lookup => "fetching repository",
            Self::Create => "creating repository",
            Self::Update => "updating repository",
            Self::Delete => "deleting repository",
        })
    }
}

/// Errors that can occur during GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error occurred while calling the GitHub API.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The platform rejected the token.
    ///
    /// This occurs when the token is invalid, expired or revoked.
    #[error("invalid GitHub token: {reason}")]
    Unauthorized {
        /// The message reported by the platform.
        reason: String,
    },

    /// The token lacks the permission the operation needs.
    #[error("access denied while {operation}: {reason}")]
    Forbidden {
        /// What was being attempted.
        operation: Operation,
        /// The message reported by the platform.
        reason: String,
    },

    /// The configured organization does not exist or is invisible to the token.
    #[error("organization `{organization}` not found")]
    OrganizationNotFound {
        /// The organization name.
        organization: String,
    },

    /// A create call conflicted with an existing repository.
    #[error("repository `{name}` already exists")]
    AlreadyExists {
        /// The repository name.
        name: String,
    },

    /// A repository name was empty.
    #[error("repository name cannot be empty")]
    EmptyRepositoryName,
}

impl Error {
    /// Returns `true` if every later operation in the run would fail the same
    /// way, so the whole batch must stop.
    ///
    /// That covers a rejected token, a missing organization, and permission
    /// failures while resolving the organization or looking repositories up.
    /// Anything else only fails the repository being processed.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Unauthorized { .. } | Self::OrganizationNotFound { .. } => true,
            Self::Forbidden { operation, .. } => matches!(
                operation,
                Operation::Authenticate | Operation::ResolveOrganization | Operation::Lookup
            ),
            Self::Api(_) | Self::AlreadyExists { .. } | Self::EmptyRepositoryName => false,
        }
    }

    /// Classifies a raw API error by HTTP status.
    ///
    /// 401 becomes [`Error::Unauthorized`], 403 becomes [`Error::Forbidden`];
    /// everything else is kept as [`Error::Api`].
    pub(crate) fn classify(err: octocrab::Error, operation: Operation) -> Self {
        match status_code(&err) {
            Some(401) => Self::Unauthorized {
                reason: message(&err),
            },
            Some(403) => Self::Forbidden {
                operation,
                reason: message(&err),
            },
            _ => Self::Api(err),
        }
    }
}

/// Returns the HTTP status of a GitHub-reported error.
pub(crate) fn status_code(err: &octocrab::Error) -> Option<u16> {
    match err {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// Returns `true` for a 422 whose message or details report a name conflict.
pub(crate) fn is_name_conflict(err: &octocrab::Error) -> bool {
    let octocrab::Error::GitHub { source, .. } = err else {
        return false;
    };
    if source.status_code.as_u16() != 422 {
        return false;
    }

    let details = source
        .errors
        .iter()
        .flatten()
        .map(serde_json::Value::to_string);
    std::iter::once(source.message.clone())
        .chain(details)
        .any(|text| text.contains("already exists"))
}

fn message(err: &octocrab::Error) -> String {
    match err {
        octocrab::Error::GitHub { source, .. } => source.message.clone(),
        other => other.to_string(),
    }
}

/// A specialized Result type for GitHub API operations.
pub type Result<T> = std::result::Result<T, Error>;
