//! Policy check in front of the credential store.

use std::time::Duration;

use authz_resolver_sdk::{EnforcerError, PolicyEnforcer, ResourceType};
use repocreds_security::SecurityContext;

/// Authorization resource type for repository credentials.
///
/// The resource id is the repository URL, passed through unparsed.
pub const REPOSITORIES: ResourceType = ResourceType {
    name: "repositories",
};

pub mod actions {
    pub const GET: &str = "get";
}

/// Asks the policy engine whether a caller may read a repository's
/// credentials.
///
/// Fail-closed: an engine error or an elapsed deadline is a deny. The gate
/// itself never errors and never caches a decision.
#[derive(Debug, Clone)]
pub struct AccessGate {
    enforcer: PolicyEnforcer,
    timeout: Option<Duration>,
}

impl AccessGate {
    #[must_use]
    pub fn new(enforcer: PolicyEnforcer, timeout: Option<Duration>) -> Self {
        Self { enforcer, timeout }
    }

    /// `true` if `ctx` may `get` credentials for `url`.
    pub async fn check(&self, ctx: &SecurityContext, url: &str) -> bool {
        let enforce = self
            .enforcer
            .enforce(ctx, &REPOSITORIES, actions::GET, Some(url));

        let result = if let Some(limit) = self.timeout {
            let Ok(result) = tokio::time::timeout(limit, enforce).await else {
                tracing::warn!(
                    url,
                    timeout_ms = limit.as_millis(),
                    "policy evaluation timed out, denying"
                );
                return false;
            };
            result
        } else {
            enforce.await
        };

        match result {
            Ok(()) => true,
            Err(EnforcerError::Denied { deny_reason }) => {
                tracing::debug!(
                    url,
                    reason = deny_reason.as_ref().map_or("", |r| r.error_code.as_str()),
                    "access denied"
                );
                false
            }
            Err(EnforcerError::EvaluationFailed(e)) => {
                tracing::error!(url, error = %e, "policy evaluation failed, denying");
                false
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use authz_resolver_sdk::{
        AuthZResolverClient, AuthZResolverError, DenyReason, EvaluationRequest,
        EvaluationResponse,
    };

    use super::*;

    /// Records every request and answers with a fixed decision.
    struct RecordingResolver {
        decision: bool,
        seen: Mutex<Vec<EvaluationRequest>>,
    }

    impl RecordingResolver {
        fn new(decision: bool) -> Arc<Self> {
            Arc::new(Self {
                decision,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl AuthZResolverClient for RecordingResolver {
        async fn evaluate(
            &self,
            request: EvaluationRequest,
        ) -> Result<EvaluationResponse, AuthZResolverError> {
            self.seen.lock().unwrap().push(request);
            if self.decision {
                Ok(EvaluationResponse::allow())
            } else {
                Ok(EvaluationResponse::deny(DenyReason::new("TEST")))
            }
        }
    }

    struct FailingResolver;

    #[async_trait]
    impl AuthZResolverClient for FailingResolver {
        async fn evaluate(
            &self,
            _request: EvaluationRequest,
        ) -> Result<EvaluationResponse, AuthZResolverError> {
            Err(AuthZResolverError::ServiceUnavailable("pdp down".to_owned()))
        }
    }

    struct HangingResolver;

    #[async_trait]
    impl AuthZResolverClient for HangingResolver {
        async fn evaluate(
            &self,
            _request: EvaluationRequest,
        ) -> Result<EvaluationResponse, AuthZResolverError> {
            std::future::pending().await
        }
    }

    fn gate(authz: Arc<dyn AuthZResolverClient>, timeout: Option<Duration>) -> AccessGate {
        AccessGate::new(PolicyEnforcer::new(authz), timeout)
    }

    fn ctx() -> SecurityContext {
        SecurityContext::builder().subject_name("admin").build()
    }

    #[tokio::test]
    async fn forwards_action_resource_and_raw_url() {
        let authz = RecordingResolver::new(true);
        let url = "HTTPS://Example.com/Org/Repo.git/";

        assert!(gate(authz.clone(), None).check(&ctx(), url).await);

        let seen = authz.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].action.name, "get");
        assert_eq!(seen[0].resource.resource_type, "repositories");
        assert_eq!(seen[0].resource.id.as_deref(), Some(url));
        assert_eq!(seen[0].subject.name(), Some("admin"));
    }

    #[tokio::test]
    async fn deny_decision_is_false() {
        let authz = RecordingResolver::new(false);
        assert!(!gate(authz, None).check(&ctx(), "https://test").await);
    }

    #[tokio::test]
    async fn evaluation_failure_denies() {
        assert!(
            !gate(Arc::new(FailingResolver), None)
                .check(&ctx(), "https://test")
                .await
        );
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_deadline_denies() {
        let gate = gate(Arc::new(HangingResolver), Some(Duration::from_millis(50)));
        assert!(!gate.check(&ctx(), "https://test").await);
    }

    #[tokio::test]
    async fn decisions_are_not_cached() {
        let authz = RecordingResolver::new(true);
        let gate = gate(authz.clone(), None);

        gate.check(&ctx(), "https://test").await;
        gate.check(&ctx(), "https://test").await;

        assert_eq!(authz.seen.lock().unwrap().len(), 2);
    }
}
