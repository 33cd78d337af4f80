//! Service implementation for the static `AuthZ` plugin.

use std::collections::{BTreeSet, HashMap};

use authz_resolver_sdk::{DenyReason, EvaluationRequest, EvaluationResponse};
use glob::Pattern;

use crate::config::{AuthZMode, Effect, PolicyConfigError, StaticAuthZPluginConfig};

/// Deny reason codes returned by this plugin.
pub mod deny_codes {
    pub const DENY_ALL: &str = "DENY_ALL";
    pub const EXPLICIT_DENY: &str = "EXPLICIT_DENY";
    pub const NO_MATCHING_POLICY: &str = "NO_MATCHING_POLICY";
}

const WILDCARD: &str = "*";

#[derive(Debug)]
struct CompiledRule {
    role: String,
    resource: String,
    action: String,
    object: Pattern,
    effect: Effect,
}

impl CompiledRule {
    fn matches(&self, roles: &BTreeSet<&str>, request: &EvaluationRequest) -> bool {
        roles.contains(self.role.as_str())
            && (self.resource == WILDCARD || self.resource == request.resource.resource_type)
            && (self.action == WILDCARD || self.action == request.action.name)
            && self
                .object
                .matches(request.resource.id.as_deref().unwrap_or_default())
    }
}

/// Static `AuthZ` service.
///
/// Role resolution for a subject, in `rules` mode:
/// - the subject name and each group claim act as roles themselves;
/// - `role_bindings` add roles for a matching subject name or group;
/// - `default_role` is added for every non-anonymous subject.
///
/// A matching `deny` rule wins over any `allow` rule. No match means deny.
///
/// Group claims are matched against policy roles verbatim, with no binding
/// required: a caller whose identity provider reports a group named
/// `role:admin` holds `role:admin`. Keep identity-provider group names out
/// of the `role:` namespace used by policies.
#[derive(Debug)]
pub struct Service {
    mode: AuthZMode,
    default_role: Option<String>,
    bindings: HashMap<String, Vec<String>>,
    rules: Vec<CompiledRule>,
}

impl Service {
    /// Build the service from plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyConfigError`] if a rule has an empty role, resource
    /// or action, or an object pattern that is not a valid glob.
    pub fn from_config(cfg: &StaticAuthZPluginConfig) -> Result<Self, PolicyConfigError> {
        let mut rules = Vec::with_capacity(cfg.policies.len());
        for (index, p) in cfg.policies.iter().enumerate() {
            for (field, value) in [
                ("role", &p.role),
                ("resource", &p.resource),
                ("action", &p.action),
            ] {
                if value.trim().is_empty() {
                    return Err(PolicyConfigError::EmptyField { index, field });
                }
            }
            let object =
                Pattern::new(&p.object).map_err(|e| PolicyConfigError::InvalidPattern {
                    index,
                    pattern: p.object.clone(),
                    reason: e.to_string(),
                })?;
            rules.push(CompiledRule {
                role: p.role.clone(),
                resource: p.resource.clone(),
                action: p.action.clone(),
                object,
                effect: p.effect,
            });
        }

        let mut bindings: HashMap<String, Vec<String>> = HashMap::new();
        for b in &cfg.role_bindings {
            bindings
                .entry(b.subject.clone())
                .or_default()
                .push(b.role.clone());
        }

        Ok(Self {
            mode: cfg.mode,
            default_role: cfg.default_role.clone(),
            bindings,
            rules,
        })
    }

    /// A service that allows every request.
    #[must_use]
    pub fn allow_all() -> Self {
        Self::with_mode(AuthZMode::AllowAll)
    }

    /// A service that denies every request.
    #[must_use]
    pub fn deny_all() -> Self {
        Self::with_mode(AuthZMode::DenyAll)
    }

    fn with_mode(mode: AuthZMode) -> Self {
        Self {
            mode,
            default_role: None,
            bindings: HashMap::new(),
            rules: Vec::new(),
        }
    }

    /// Evaluate an authorization request.
    #[must_use]
    pub fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResponse {
        match self.mode {
            AuthZMode::AllowAll => EvaluationResponse::allow(),
            AuthZMode::DenyAll => EvaluationResponse::deny(DenyReason::new(deny_codes::DENY_ALL)),
            AuthZMode::Rules => self.evaluate_rules(request),
        }
    }

    fn evaluate_rules(&self, request: &EvaluationRequest) -> EvaluationResponse {
        let roles = self.roles_for(request);
        let mut allowed = false;

        for rule in self.rules.iter().filter(|r| r.matches(&roles, request)) {
            match rule.effect {
                Effect::Deny => {
                    tracing::debug!(
                        role = %rule.role,
                        action = %request.action.name,
                        resource = %request.resource.resource_type,
                        "explicit deny rule matched"
                    );
                    return EvaluationResponse::deny(
                        DenyReason::new(deny_codes::EXPLICIT_DENY)
                            .with_details(format!("denied by rule for {}", rule.role)),
                    );
                }
                Effect::Allow => allowed = true,
            }
        }

        if allowed {
            EvaluationResponse::allow()
        } else {
            EvaluationResponse::deny(DenyReason::new(deny_codes::NO_MATCHING_POLICY))
        }
    }

    fn roles_for<'a>(&'a self, request: &'a EvaluationRequest) -> BTreeSet<&'a str> {
        let subject = &request.subject;
        let mut principals: Vec<&str> = subject.groups().collect();
        if let Some(name) = subject.name() {
            principals.push(name);
        }

        let mut roles: BTreeSet<&str> = principals.iter().copied().collect();
        for principal in &principals {
            if let Some(bound) = self.bindings.get(*principal) {
                roles.extend(bound.iter().map(String::as_str));
            }
        }
        if !subject.is_anonymous()
            && let Some(role) = &self.default_role
        {
            roles.insert(role.as_str());
        }
        roles
    }
}
