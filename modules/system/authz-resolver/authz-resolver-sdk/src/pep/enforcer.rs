//! Policy Enforcement Point (`PEP`) object.
//!
//! [`PolicyEnforcer`] encapsulates the PEP flow:
//! build evaluation request from the caller's [`SecurityContext`] → call the
//! PDP → turn the decision into `Ok(())` or [`EnforcerError::Denied`].
//!
//! Constructed once during service initialisation with the `AuthZ` client.
//! The resource type is supplied per call via a [`ResourceType`] descriptor,
//! so a single enforcer can serve all resource types in a service.

use std::collections::HashMap;
use std::sync::Arc;

use repocreds_security::SecurityContext;

use crate::api::AuthZResolverClient;
use crate::error::AuthZResolverError;
use crate::models::{
    Action, DenyReason, EvaluationRequest, EvaluationRequestContext, Resource, Subject,
    subject_properties,
};

/// Error from the PEP enforcement flow.
#[derive(Debug, thiserror::Error)]
pub enum EnforcerError {
    /// The PDP explicitly denied access.
    #[error("access denied by PDP")]
    Denied {
        /// Optional deny reason from the PDP.
        deny_reason: Option<DenyReason>,
    },

    /// The `AuthZ` evaluation call failed.
    #[error("authorization evaluation failed: {0}")]
    EvaluationFailed(#[from] AuthZResolverError),
}

/// Static descriptor for a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceType {
    /// Resource type name as understood by the policy engine (e.g. `"repositories"`).
    pub name: &'static str,
}

/// Policy Enforcement Point.
///
/// Holds the `AuthZ` client. Cloneable and cheap to pass around (`Arc`
/// inside). Keeps no per-request state and never caches decisions.
///
/// # Example
///
/// ```ignore
/// use authz_resolver_sdk::pep::{PolicyEnforcer, ResourceType};
///
/// const REPOSITORIES: ResourceType = ResourceType { name: "repositories" };
///
/// let enforcer = PolicyEnforcer::new(authz.clone());
/// enforcer.enforce(&ctx, &REPOSITORIES, "get", Some("https://github.com/org/repo")).await?;
/// ```
#[derive(Clone)]
pub struct PolicyEnforcer {
    authz: Arc<dyn AuthZResolverClient>,
}

impl PolicyEnforcer {
    /// Create a new enforcer.
    pub fn new(authz: Arc<dyn AuthZResolverClient>) -> Self {
        Self { authz }
    }

    /// Build an evaluation request for `action` on `resource_id` of `resource`.
    ///
    /// The resource id is forwarded verbatim; it is not parsed or normalized.
    #[must_use]
    pub fn build_request(
        &self,
        ctx: &SecurityContext,
        resource: &ResourceType,
        action: &str,
        resource_id: Option<&str>,
    ) -> EvaluationRequest {
        let mut subject_props = HashMap::new();
        if let Some(name) = ctx.subject_name() {
            subject_props.insert(
                subject_properties::NAME.to_owned(),
                serde_json::Value::String(name.to_owned()),
            );
        }
        if !ctx.groups().is_empty() {
            subject_props.insert(
                subject_properties::GROUPS.to_owned(),
                serde_json::Value::Array(
                    ctx.groups()
                        .iter()
                        .cloned()
                        .map(serde_json::Value::String)
                        .collect(),
                ),
            );
        }

        EvaluationRequest {
            subject: Subject {
                id: ctx.subject_id(),
                subject_type: ctx.subject_type().map(ToOwned::to_owned),
                properties: subject_props,
            },
            action: Action {
                name: action.to_owned(),
            },
            resource: Resource {
                resource_type: resource.name.to_owned(),
                id: resource_id.map(ToOwned::to_owned),
                properties: HashMap::new(),
            },
            context: EvaluationRequestContext {
                token_scopes: ctx.token_scopes().to_vec(),
                bearer_token: ctx.bearer_token().cloned(),
            },
        }
    }

    /// Execute the PEP flow: build request → evaluate → check decision.
    ///
    /// # Errors
    ///
    /// - [`EnforcerError::Denied`] if the PDP returned `decision == false`
    /// - [`EnforcerError::EvaluationFailed`] if the PDP call fails
    pub async fn enforce(
        &self,
        ctx: &SecurityContext,
        resource: &ResourceType,
        action: &str,
        resource_id: Option<&str>,
    ) -> Result<(), EnforcerError> {
        let request = self.build_request(ctx, resource, action, resource_id);
        let response = self.authz.evaluate(request).await?;

        if response.decision {
            Ok(())
        } else {
            Err(EnforcerError::Denied {
                deny_reason: response.context.deny_reason,
            })
        }
    }
}

impl std::fmt::Debug for PolicyEnforcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyEnforcer").finish_non_exhaustive()
    }
}
