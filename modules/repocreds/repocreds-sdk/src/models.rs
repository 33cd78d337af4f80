//! Models for the `repocreds` module.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Kind of repository the credentials are for.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RepoType {
    #[default]
    Git,
    Helm,
}

/// Connection credentials for an external repository, keyed by URL.
///
/// Records are produced by a [`crate::RepoCredsStore`] and are always
/// complete: a store returns either a whole record or none. Secret fields
/// are wrapped in [`SecretString`] and are skipped by `serde`, so
/// serializing a record never emits credential material.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoCreds {
    /// Canonical repository URL; the lookup key.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip)]
    pub password: Option<SecretString>,
    #[serde(skip)]
    pub ssh_private_key: Option<SecretString>,
    #[serde(skip)]
    pub tls_client_cert_data: Option<SecretString>,
    #[serde(skip)]
    pub tls_client_cert_key: Option<SecretString>,
    #[serde(skip)]
    pub github_app_private_key: Option<SecretString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_app_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_app_installation_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_app_enterprise_base_url: Option<String>,
    #[serde(skip)]
    pub gcp_service_account_key: Option<SecretString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    #[serde(default, rename = "type")]
    pub repo_type: RepoType,
    #[serde(default)]
    pub enable_oci: bool,
    #[serde(default)]
    pub force_http_basic_auth: bool,
}

impl RepoCreds {
    /// A record for `url` with no auxiliary fields set.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// `true` if any secret field carries material.
    #[must_use]
    pub fn has_secrets(&self) -> bool {
        self.password.is_some()
            || self.ssh_private_key.is_some()
            || self.tls_client_cert_data.is_some()
            || self.tls_client_cert_key.is_some()
            || self.github_app_private_key.is_some()
            || self.gcp_service_account_key.is_some()
    }

    /// A copy of this record with every secret field cleared.
    ///
    /// Used where records are enumerated rather than fetched one by one.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            password: None,
            ssh_private_key: None,
            tls_client_cert_data: None,
            tls_client_cert_key: None,
            github_app_private_key: None,
            gcp_service_account_key: None,
            ..self.clone()
        }
    }
}

/// Query for a single repository's credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoCredsQuery {
    /// Repository URL. Treated as an opaque identifier; not parsed.
    pub url: String,
}

impl RepoCredsQuery {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Query for listing credential records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoCredsListQuery {
    /// Restrict the listing to the record with exactly this URL. `None`
    /// considers every stored record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RepoCredsListQuery {
    /// Every record the caller may read.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Only the record for `url`, if the caller may read it.
    #[must_use]
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn full_record() -> RepoCreds {
        RepoCreds {
            username: Some("git".to_owned()),
            password: Some(SecretString::from("hunter2")),
            ssh_private_key: Some(SecretString::from("-----BEGIN KEY-----")),
            github_app_id: Some(42),
            proxy: Some("http://proxy:3128".to_owned()),
            repo_type: RepoType::Helm,
            enable_oci: true,
            ..RepoCreds::new("https://charts.example.com")
        }
    }

    #[test]
    fn serialization_skips_secret_fields() {
        let json = serde_json::to_string(&full_record()).unwrap();

        assert!(json.contains("https://charts.example.com"));
        assert!(json.contains(r#""type":"helm""#));
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("BEGIN KEY"));
        assert!(!json.contains("password"));
    }

    #[test]
    #[allow(clippy::use_debug)]
    fn debug_does_not_print_secrets() {
        let dbg = format!("{:?}", full_record());
        assert!(!dbg.contains("hunter2"));
    }

    #[test]
    fn redacted_clears_secrets_and_keeps_metadata() {
        let record = full_record();
        assert!(record.has_secrets());

        let redacted = record.redacted();
        assert!(!redacted.has_secrets());
        assert_eq!(redacted.url, record.url);
        assert_eq!(redacted.username, record.username);
        assert_eq!(redacted.github_app_id, Some(42));
        assert_eq!(redacted.repo_type, RepoType::Helm);
        assert!(redacted.enable_oci);

        // source record untouched
        assert_eq!(
            record.password.as_ref().map(ExposeSecret::expose_secret),
            Some("hunter2")
        );
    }

    #[test]
    fn new_record_has_defaults() {
        let record = RepoCreds::new("https://test");
        assert_eq!(record.url, "https://test");
        assert_eq!(record.repo_type, RepoType::Git);
        assert!(!record.has_secrets());
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let record: RepoCreds = serde_json::from_str(r#"{"url":"https://test"}"#).unwrap();
        assert_eq!(record.url, "https://test");
        assert_eq!(record.repo_type, RepoType::Git);
        assert!(!record.force_http_basic_auth);
    }

    #[test]
    fn list_query_distinguishes_all_from_empty_url() {
        assert_eq!(RepoCredsListQuery::all().url, None);
        assert_eq!(RepoCredsListQuery::for_url("").url.as_deref(), Some(""));

        let parsed: RepoCredsListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, RepoCredsListQuery::all());
    }
}
