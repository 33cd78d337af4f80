//! Public error types for the `repocreds` module.
//!
//! [`RepoCredsError`] is what callers see. It deliberately carries no
//! internal cause: a failing credential store surfaces as
//! [`RepoCredsError::PermissionDenied`], indistinguishable from a policy
//! denial.

use thiserror::Error;

/// Errors returned by [`crate::RepoCredsClientV1`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepoCredsError {
    /// The caller may not read credentials for this URL, or they could not
    /// be resolved.
    #[error("permission denied")]
    PermissionDenied,

    /// The caller is authorized and no credentials exist for the URL.
    #[error("repository credentials '{url}' not found")]
    NotFound { url: String },

    /// An internal error occurred.
    #[error("internal error")]
    Internal,
}

impl RepoCredsError {
    #[must_use]
    pub fn permission_denied() -> Self {
        Self::PermissionDenied
    }

    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}

/// Errors reported by a [`crate::RepoCredsStore`].
///
/// Absence is not an error; stores return `Ok(None)` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store did not answer within the configured deadline.
    #[error("store timed out")]
    Timeout,

    /// Any other failure.
    #[error("store error: {0}")]
    Internal(String),
}
