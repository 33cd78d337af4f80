//! Store access with failure captured as data.

use std::sync::Arc;
use std::time::Duration;

use repocreds_sdk::{RepoCreds, RepoCredsStore, StoreError};

/// Result of a single store lookup.
#[derive(Debug)]
pub enum ResolveOutcome {
    Found(RepoCreds),
    Absent,
    /// The store could not answer. The cause stays inside the domain.
    Failed(StoreError),
}

/// Thin wrapper over a [`RepoCredsStore`].
///
/// One store call per operation, no retries. Store errors and elapsed
/// deadlines are logged here and returned as [`ResolveOutcome::Failed`].
pub struct CredentialResolver<S: RepoCredsStore + ?Sized> {
    store: Arc<S>,
    timeout: Option<Duration>,
}

impl<S: RepoCredsStore + ?Sized> CredentialResolver<S> {
    #[must_use]
    pub fn new(store: Arc<S>, timeout: Option<Duration>) -> Self {
        Self { store, timeout }
    }

    pub async fn lookup(&self, url: &str) -> ResolveOutcome {
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.store.get(url))
                .await
                .unwrap_or(Err(StoreError::Timeout)),
            None => self.store.get(url).await,
        };

        match result {
            Ok(Some(record)) => ResolveOutcome::Found(record),
            Ok(None) => ResolveOutcome::Absent,
            Err(e) => {
                tracing::error!(url, error = %e, "failed to read repository credentials");
                ResolveOutcome::Failed(e)
            }
        }
    }

    /// Every record in the store.
    ///
    /// # Errors
    ///
    /// Returns the store's error, or [`StoreError::Timeout`] when the deadline
    /// elapses. The error is logged before it is returned.
    pub async fn list(&self) -> Result<Vec<RepoCreds>, StoreError> {
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.store.list())
                .await
                .unwrap_or(Err(StoreError::Timeout)),
            None => self.store.list().await,
        };

        result.inspect_err(|e| {
            tracing::error!(error = %e, "failed to list repository credentials");
        })
    }
}

impl<S: RepoCredsStore + ?Sized> std::fmt::Debug for CredentialResolver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use async_trait::async_trait;

    use super::*;

    enum Reply {
        Record,
        Nothing,
        Error,
        Hang,
    }

    struct ScriptedStore(Reply);

    #[async_trait]
    impl RepoCredsStore for ScriptedStore {
        async fn get(&self, url: &str) -> Result<Option<RepoCreds>, StoreError> {
            match self.0 {
                Reply::Record => Ok(Some(RepoCreds::new(url))),
                Reply::Nothing => Ok(None),
                Reply::Error => Err(StoreError::Unavailable("connection refused".to_owned())),
                Reply::Hang => std::future::pending().await,
            }
        }

        async fn list(&self) -> Result<Vec<RepoCreds>, StoreError> {
            match self.0 {
                Reply::Record => Ok(vec![RepoCreds::new("https://a")]),
                Reply::Nothing => Ok(Vec::new()),
                Reply::Error => Err(StoreError::Internal("broken".to_owned())),
                Reply::Hang => std::future::pending().await,
            }
        }
    }

    fn resolver(reply: Reply, timeout: Option<Duration>) -> CredentialResolver<ScriptedStore> {
        CredentialResolver::new(Arc::new(ScriptedStore(reply)), timeout)
    }

    #[tokio::test]
    async fn store_answers_map_to_outcomes() {
        assert!(matches!(
            resolver(Reply::Record, None).lookup("https://test").await,
            ResolveOutcome::Found(r) if r.url == "https://test"
        ));
        assert!(matches!(
            resolver(Reply::Nothing, None).lookup("https://test").await,
            ResolveOutcome::Absent
        ));
        assert!(matches!(
            resolver(Reply::Error, None).lookup("https://test").await,
            ResolveOutcome::Failed(StoreError::Unavailable(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_deadline_is_a_failure() {
        let outcome = resolver(Reply::Hang, Some(Duration::from_millis(100)))
            .lookup("https://test")
            .await;
        assert!(matches!(outcome, ResolveOutcome::Failed(StoreError::Timeout)));

        let listed = resolver(Reply::Hang, Some(Duration::from_millis(100)))
            .list()
            .await;
        assert_eq!(listed.unwrap_err(), StoreError::Timeout);
    }

    #[tokio::test]
    async fn list_passes_store_result_through() {
        assert_eq!(resolver(Reply::Record, None).list().await.unwrap().len(), 1);
        assert!(resolver(Reply::Error, None).list().await.is_err());
    }

    #[tokio::test]
    async fn works_behind_a_trait_object() {
        let store: Arc<dyn RepoCredsStore> = Arc::new(ScriptedStore(Reply::Nothing));
        let resolver = CredentialResolver::new(store, None);
        assert!(matches!(
            resolver.lookup("https://test").await,
            ResolveOutcome::Absent
        ));
    }
}
