//! Service implementation for the static credential store.

use std::collections::BTreeMap;

use repocreds_sdk::RepoCreds;
use secrecy::SecretString;

use crate::config::{CredentialEntry, StaticRepoCredsPluginConfig, StoreConfigError};

/// In-memory credential store built once from configuration.
///
/// Keys are the configured URLs verbatim. Records are immutable after
/// construction, so concurrent reads need no locking.
#[derive(Debug, Default)]
pub struct Service {
    records: BTreeMap<String, RepoCreds>,
}

impl Service {
    /// Build the store from plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError`] if an entry has an empty URL or a URL
    /// already used by an earlier entry.
    pub fn from_config(cfg: &StaticRepoCredsPluginConfig) -> Result<Self, StoreConfigError> {
        let mut records = BTreeMap::new();
        for (index, entry) in cfg.credentials.iter().enumerate() {
            if entry.url.trim().is_empty() {
                return Err(StoreConfigError::EmptyUrl { index });
            }
            if records.contains_key(&entry.url) {
                return Err(StoreConfigError::DuplicateUrl {
                    index,
                    url: entry.url.clone(),
                });
            }
            records.insert(entry.url.clone(), to_record(entry));
        }

        tracing::info!(count = records.len(), "static credential store loaded");
        Ok(Self { records })
    }

    /// Record stored under exactly `url`.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<RepoCreds> {
        self.records.get(url).cloned()
    }

    /// All records, ordered by URL.
    #[must_use]
    pub fn list(&self) -> Vec<RepoCreds> {
        self.records.values().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn secret(value: Option<&String>) -> Option<SecretString> {
    value.map(|v| SecretString::from(v.as_str()))
}

fn to_record(entry: &CredentialEntry) -> RepoCreds {
    RepoCreds {
        url: entry.url.clone(),
        username: entry.username.clone(),
        password: secret(entry.password.as_ref()),
        ssh_private_key: secret(entry.ssh_private_key.as_ref()),
        tls_client_cert_data: secret(entry.tls_client_cert_data.as_ref()),
        tls_client_cert_key: secret(entry.tls_client_cert_key.as_ref()),
        github_app_private_key: secret(entry.github_app_private_key.as_ref()),
        github_app_id: entry.github_app_id,
        github_app_installation_id: entry.github_app_installation_id,
        github_app_enterprise_base_url: entry.github_app_enterprise_base_url.clone(),
        gcp_service_account_key: secret(entry.gcp_service_account_key.as_ref()),
        proxy: entry.proxy.clone(),
        repo_type: entry.repo_type,
        enable_oci: entry.enable_oci,
        force_http_basic_auth: entry.force_http_basic_auth,
    }
}
