//! Credential store API implemented by storage backends.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::RepoCreds;

/// Key-value credential store keyed by repository URL.
///
/// The three outcomes of [`RepoCredsStore::get`] are distinct and callers
/// rely on the difference:
///
/// - `Ok(Some(record))` - credentials exist
/// - `Ok(None)` - authoritative absence
/// - `Err(_)` - the store could not answer
///
/// Implementations must be safe for concurrent use. Any retry policy belongs
/// to the implementation, not to its callers.
#[async_trait]
pub trait RepoCredsStore: Send + Sync {
    /// Fetch the record for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn get(&self, url: &str) -> Result<Option<RepoCreds>, StoreError>;

    /// Return every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn list(&self) -> Result<Vec<RepoCreds>, StoreError>;
}
