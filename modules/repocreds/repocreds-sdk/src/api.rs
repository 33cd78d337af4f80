//! Consumer-facing API trait.

use async_trait::async_trait;
use repocreds_security::SecurityContext;

use crate::error::RepoCredsError;
use crate::models::{RepoCreds, RepoCredsListQuery, RepoCredsQuery};

/// Access-gated credential lookup.
///
/// Every call is authorized against the caller's [`SecurityContext`] before
/// any credential material is read. Denial and store failure are reported
/// identically, so the error cannot be used to discover which repositories
/// are configured.
#[async_trait]
pub trait RepoCredsClientV1: Send + Sync {
    /// Resolve the credentials for `query.url`.
    ///
    /// # Errors
    ///
    /// - [`RepoCredsError::PermissionDenied`] if the caller lacks rights or
    ///   the credential store failed
    /// - [`RepoCredsError::NotFound`] if the caller is authorized and no
    ///   credentials exist for the URL
    async fn get_repository_credentials(
        &self,
        ctx: &SecurityContext,
        query: &RepoCredsQuery,
    ) -> Result<RepoCreds, RepoCredsError>;

    /// List redacted credential records the caller may read.
    ///
    /// `query.url = None` lists everything visible; `Some(url)` considers
    /// only the record with exactly that URL. Records the caller may not read
    /// are omitted silently. A store failure yields the same empty list a
    /// caller without rights gets.
    ///
    /// # Errors
    ///
    /// None from the local implementation; remote implementations may
    /// return [`RepoCredsError::Internal`] for transport failures.
    async fn list_repository_credentials(
        &self,
        ctx: &SecurityContext,
        query: &RepoCredsListQuery,
    ) -> Result<Vec<RepoCreds>, RepoCredsError>;
}
