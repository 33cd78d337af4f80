//! Credential store trait implementation for the static plugin.

use async_trait::async_trait;
use repocreds_sdk::{RepoCreds, RepoCredsStore, StoreError};

use super::service::Service;

#[async_trait]
impl RepoCredsStore for Service {
    async fn get(&self, url: &str) -> Result<Option<RepoCreds>, StoreError> {
        Ok(Service::get(self, url))
    }

    async fn list(&self) -> Result<Vec<RepoCreds>, StoreError> {
        Ok(Service::list(self))
    }
}
