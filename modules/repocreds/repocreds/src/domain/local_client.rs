//! Local (in-process) client for the `repocreds` module.

use std::sync::Arc;

use async_trait::async_trait;
use repocreds_sdk::{
    RepoCreds, RepoCredsClientV1, RepoCredsError, RepoCredsListQuery, RepoCredsQuery,
    RepoCredsStore,
};
use repocreds_security::SecurityContext;

use super::service::LookupService;

/// Local client wrapping the service.
pub struct RepoCredsLocalClient<S: RepoCredsStore + ?Sized> {
    svc: Arc<LookupService<S>>,
}

impl<S: RepoCredsStore + ?Sized> RepoCredsLocalClient<S> {
    #[must_use]
    pub fn new(svc: Arc<LookupService<S>>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl<S: RepoCredsStore + ?Sized> RepoCredsClientV1 for RepoCredsLocalClient<S> {
    async fn get_repository_credentials(
        &self,
        ctx: &SecurityContext,
        query: &RepoCredsQuery,
    ) -> Result<RepoCreds, RepoCredsError> {
        self.svc.get_credential(ctx, &query.url).await.into_result()
    }

    async fn list_repository_credentials(
        &self,
        ctx: &SecurityContext,
        query: &RepoCredsListQuery,
    ) -> Result<Vec<RepoCreds>, RepoCredsError> {
        Ok(self.svc.list_credentials(ctx, query.url.as_deref()).await)
    }
}
