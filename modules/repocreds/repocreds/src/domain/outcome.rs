use repocreds_sdk::{RepoCreds, RepoCredsError};

/// Result of a credential lookup as it leaves the domain.
///
/// Carries no store or policy error cause.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Found(RepoCreds),
    PermissionDenied,
    NotFound { url: String },
    /// Never produced by [`super::classify`]; kept for the public taxonomy.
    Internal,
}

impl LookupOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Convert into the caller-visible result.
    ///
    /// # Errors
    ///
    /// Every variant except [`LookupOutcome::Found`] becomes the matching
    /// [`RepoCredsError`].
    pub fn into_result(self) -> Result<RepoCreds, RepoCredsError> {
        match self {
            Self::Found(record) => Ok(record),
            Self::PermissionDenied => Err(RepoCredsError::permission_denied()),
            Self::NotFound { url } => Err(RepoCredsError::not_found(url)),
            Self::Internal => Err(RepoCredsError::internal()),
        }
    }
}
