//! Repository reconciliation.
//!
//! Each operation works on one named repository against any
//! [`RepositoryPlatform`]:
//!
//! - [`lookup`]: fetch a repository, `None` if absent
//! - [`create_or_update`]: create when absent, edit when present
//! - [`delete`]: delete when present, no-op when absent

use ghrm_protocol::{OperationOutcome, RepositoryConfig};
use tracing::{error, info, instrument, warn};

use crate::error::{Error, Result};
use crate::platform::{RemoteRepository, RepositoryPlatform};

fn ensure_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::EmptyRepositoryName);
    }
    Ok(())
}

/// Looks a repository up.
///
/// # Returns
///
/// `Ok(None)` if the repository does not exist.
///
/// # Errors
///
/// Returns [`Error::EmptyRepositoryName`] before any network call for an
/// empty name. Authentication and permission failures come back as fatal
/// errors (see [`Error::is_fatal`]); other failures are logged and returned.
#[instrument(skip(platform), fields(organization = %platform.organization()))]
pub async fn lookup<P: RepositoryPlatform>(
    platform: &P,
    name: &str,
) -> Result<Option<RemoteRepository>> {
    ensure_name(name)?;

    match platform.get_repository(name).await {
        Ok(Some(repo)) => {
            info!("repository exists");
            Ok(Some(repo))
        }
        Ok(None) => {
            info!("repository does not exist");
            Ok(None)
        }
        Err(e) => {
            error!(error = %e, "failed to fetch repository");
            Err(e)
        }
    }
}

/// Creates the repository if it is absent, or edits it to match `config`.
///
/// Attributes only accepted at creation time are stripped before the edit
/// call. A name conflict on create (the repository appeared between lookup
/// and create) is logged and reported as [`OperationOutcome::Skipped`]; the
/// repository is not edited in that case.
///
/// # Errors
///
/// Returns the lookup, create or edit error.
#[instrument(skip(platform, config), fields(organization = %platform.organization(), repo = %config.name))]
pub async fn create_or_update<P: RepositoryPlatform>(
    platform: &P,
    config: &RepositoryConfig,
) -> Result<OperationOutcome> {
    ensure_name(&config.name)?;

    if lookup(platform, &config.name).await?.is_some() {
        info!("updating existing repository");
        return match platform
            .edit_repository(&config.name, &config.for_update())
            .await
        {
            Ok(_) => Ok(OperationOutcome::Updated),
            Err(e) => {
                error!(error = %e, "failed to update repository");
                Err(e)
            }
        };
    }

    info!("creating repository");
    match platform.create_repository(config).await {
        Ok(_) => Ok(OperationOutcome::Created),
        Err(Error::AlreadyExists { .. }) => {
            warn!("repository already exists, leaving it unchanged");
            Ok(OperationOutcome::Skipped)
        }
        Err(e) => {
            error!(error = %e, "failed to create repository");
            Err(e)
        }
    }
}

/// Deletes a repository if it exists.
///
/// # Returns
///
/// `Ok(true)` if the repository was deleted, `Ok(false)` if it did not exist
/// (no delete call is made).
///
/// # Errors
///
/// Returns the lookup or delete error. A permission failure is logged
/// separately from other failures.
#[instrument(skip(platform), fields(organization = %platform.organization()))]
pub async fn delete<P: RepositoryPlatform>(platform: &P, name: &str) -> Result<bool> {
    if lookup(platform, name).await?.is_none() {
        info!("repository does not exist, skipping deletion");
        return Ok(false);
    }

    info!("deleting repository");
    match platform.delete_repository(name).await {
        Ok(()) => Ok(true),
        Err(e @ Error::Forbidden { .. }) => {
            error!(error = %e, "permission denied to delete repository");
            Err(e)
        }
        Err(e) => {
            error!(error = %e, "failed to delete repository");
            Err(e)
        }
    }
}
