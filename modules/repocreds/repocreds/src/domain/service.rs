use std::sync::Arc;
use std::time::Duration;

use authz_resolver_sdk::PolicyEnforcer;
use repocreds_sdk::{RepoCreds, RepoCredsStore};
use repocreds_security::SecurityContext;

use super::access_gate::AccessGate;
use super::mapper::classify;
use super::outcome::LookupOutcome;
use super::resolver::{CredentialResolver, ResolveOutcome};
use crate::config::RepoCredsConfig;

// ============================================================================
// Service Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    pub policy_timeout: Option<Duration>,
    pub store_timeout: Option<Duration>,
}

impl From<&RepoCredsConfig> for ServiceConfig {
    fn from(cfg: &RepoCredsConfig) -> Self {
        Self {
            policy_timeout: cfg.policy_timeout(),
            store_timeout: cfg.store_timeout(),
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

/// Access-gated credential lookup.
///
/// Holds no mutable state; share it through `Arc` and call it concurrently.
#[derive(Debug)]
pub struct LookupService<S: RepoCredsStore + ?Sized> {
    gate: AccessGate,
    resolver: CredentialResolver<S>,
}

impl<S: RepoCredsStore + ?Sized> LookupService<S> {
    #[must_use]
    pub fn new(store: Arc<S>, policy_enforcer: PolicyEnforcer, config: ServiceConfig) -> Self {
        Self {
            gate: AccessGate::new(policy_enforcer, config.policy_timeout),
            resolver: CredentialResolver::new(store, config.store_timeout),
        }
    }

    /// Resolve the credentials for `url` on behalf of `ctx`.
    ///
    /// The store is consulted only when the policy engine allows the request.
    #[tracing::instrument(skip_all, fields(url = %url))]
    pub async fn get_credential(&self, ctx: &SecurityContext, url: &str) -> LookupOutcome {
        if !self.gate.check(ctx, url).await {
            return classify(false, None, url);
        }

        let outcome = classify(true, Some(self.resolver.lookup(url).await), url);
        tracing::debug!(found = outcome.is_found(), "credential lookup finished");
        outcome
    }

    /// Redacted records `ctx` may read, optionally narrowed to one URL.
    ///
    /// Records the caller may not read are dropped silently. With a filter the
    /// policy engine is asked before the store is read. A failing store
    /// yields the same empty list a caller without rights gets; the failure
    /// is logged by the resolver.
    #[tracing::instrument(skip_all, fields(url_filter = url_filter.unwrap_or("*")))]
    pub async fn list_credentials(
        &self,
        ctx: &SecurityContext,
        url_filter: Option<&str>,
    ) -> Vec<RepoCreds> {
        let Some(url) = url_filter else {
            return self.list_visible(ctx).await;
        };

        if !self.gate.check(ctx, url).await {
            return Vec::new();
        }
        match self.resolver.lookup(url).await {
            ResolveOutcome::Found(record) => vec![record.redacted()],
            ResolveOutcome::Absent | ResolveOutcome::Failed(_) => Vec::new(),
        }
    }

    async fn list_visible(&self, ctx: &SecurityContext) -> Vec<RepoCreds> {
        let Ok(candidates) = self.resolver.list().await else {
            return Vec::new();
        };

        let decisions = futures::future::join_all(
            candidates
                .iter()
                .map(|r| self.gate.check(ctx, r.url.as_str())),
        )
        .await;

        let visible: Vec<RepoCreds> = candidates
            .iter()
            .zip(decisions)
            .filter_map(|(record, allowed)| allowed.then(|| record.redacted()))
            .collect();

        tracing::debug!(
            candidates = candidates.len(),
            visible = visible.len(),
            "listed repository credentials"
        );
        visible
    }
}
