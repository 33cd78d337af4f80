use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the `repocreds` module.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoCredsConfig {
    /// Deadline for a single policy evaluation. Elapsing denies the request.
    pub policy_timeout_ms: Option<u64>,
    /// Deadline for a single store call. Elapsing counts as a store failure.
    pub store_timeout_ms: Option<u64>,
}

impl RepoCredsConfig {
    #[must_use]
    pub fn policy_timeout(&self) -> Option<Duration> {
        self.policy_timeout_ms.map(Duration::from_millis)
    }

    #[must_use]
    pub fn store_timeout(&self) -> Option<Duration> {
        self.store_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_deadlines() {
        let cfg = RepoCredsConfig::default();
        assert_eq!(cfg.policy_timeout(), None);
        assert_eq!(cfg.store_timeout(), None);
    }

    #[test]
    fn millis_convert_to_durations() {
        let cfg: RepoCredsConfig =
            serde_json::from_str(r#"{"policy_timeout_ms":250,"store_timeout_ms":2000}"#).unwrap();
        assert_eq!(cfg.policy_timeout(), Some(Duration::from_millis(250)));
        assert_eq!(cfg.store_timeout(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn unknown_fields_rejected() {
        let res: Result<RepoCredsConfig, _> = serde_json::from_str(r#"{"retries":3}"#);
        assert!(res.is_err());
    }
}
