//! Configuration for the static credential store.

use repocreds_sdk::RepoType;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticRepoCredsPluginConfig {
    pub credentials: Vec<CredentialEntry>,
}

/// One configured credential record.
///
/// Secret values arrive as plain strings and are wrapped when the store is
/// built. `Debug` prints them redacted.
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialEntry {
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub ssh_private_key: Option<String>,
    #[serde(default)]
    pub tls_client_cert_data: Option<String>,
    #[serde(default)]
    pub tls_client_cert_key: Option<String>,
    #[serde(default)]
    pub github_app_private_key: Option<String>,
    #[serde(default)]
    pub github_app_id: Option<i64>,
    #[serde(default)]
    pub github_app_installation_id: Option<i64>,
    #[serde(default)]
    pub github_app_enterprise_base_url: Option<String>,
    #[serde(default)]
    pub gcp_service_account_key: Option<String>,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default, rename = "type")]
    pub repo_type: RepoType,
    #[serde(default)]
    pub enable_oci: bool,
    #[serde(default)]
    pub force_http_basic_auth: bool,
}

fn redact(value: Option<&String>) -> &'static str {
    if value.is_some() { "[REDACTED]" } else { "None" }
}

impl std::fmt::Debug for CredentialEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialEntry")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &redact(self.password.as_ref()))
            .field("ssh_private_key", &redact(self.ssh_private_key.as_ref()))
            .field(
                "tls_client_cert_data",
                &redact(self.tls_client_cert_data.as_ref()),
            )
            .field(
                "tls_client_cert_key",
                &redact(self.tls_client_cert_key.as_ref()),
            )
            .field(
                "github_app_private_key",
                &redact(self.github_app_private_key.as_ref()),
            )
            .field("github_app_id", &self.github_app_id)
            .field("github_app_installation_id", &self.github_app_installation_id)
            .field(
                "github_app_enterprise_base_url",
                &self.github_app_enterprise_base_url,
            )
            .field(
                "gcp_service_account_key",
                &redact(self.gcp_service_account_key.as_ref()),
            )
            .field("proxy", &self.proxy)
            .field("repo_type", &self.repo_type)
            .field("enable_oci", &self.enable_oci)
            .field("force_http_basic_auth", &self.force_http_basic_auth)
            .finish()
    }
}

/// Invalid plugin configuration.
#[derive(Debug, thiserror::Error)]
pub enum StoreConfigError {
    #[error("credential entry #{index} has an empty url")]
    EmptyUrl { index: usize },

    #[error("credential entry #{index} duplicates url '{url}'")]
    DuplicateUrl { index: usize, url: String },
}
