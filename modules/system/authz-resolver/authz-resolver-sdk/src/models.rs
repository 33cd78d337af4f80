//! Evaluation models.
//!
//! Shaped after the `AuthZEN` 1.0 evaluation model:
//! Subject + Action + Resource + Context.

use std::collections::HashMap;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known keys in [`Subject::properties`].
pub mod subject_properties {
    /// Login name of the subject (`String`).
    pub const NAME: &str = "name";
    /// Group claims of the subject (`Array<String>`).
    pub const GROUPS: &str = "groups";
}

/// Reason for an explicit deny from the PDP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DenyReason {
    /// Machine-readable error code.
    pub error_code: String,
    /// Human-readable details (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl DenyReason {
    pub fn new(error_code: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Authorization evaluation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The subject (who is making the request).
    pub subject: Subject,
    /// The action being performed.
    pub action: Action,
    /// The resource being accessed.
    pub resource: Resource,
    /// Additional context for the evaluation.
    pub context: EvaluationRequestContext,
}

/// The authenticated subject making the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::struct_field_names)] // field names follow AuthZEN
pub struct Subject {
    /// Subject identifier (nil for anonymous callers).
    pub id: Uuid,
    /// Subject type (e.g., "user", "service").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    /// Claims for policy evaluation; see [`subject_properties`].
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

impl Subject {
    /// Login name from [`subject_properties::NAME`], if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.properties
            .get(subject_properties::NAME)
            .and_then(serde_json::Value::as_str)
    }

    /// Group claims from [`subject_properties::GROUPS`]; non-string entries are skipped.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.properties
            .get(subject_properties::GROUPS)
            .and_then(serde_json::Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(serde_json::Value::as_str)
    }

    /// `true` for a subject without id and without name.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.id.is_nil() && self.name().is_none()
    }
}

/// The action being performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Action name (e.g., "get", "list", "create").
    pub name: String,
}

/// The resource being accessed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::struct_field_names)] // field names follow AuthZEN
pub struct Resource {
    /// Resource type identifier (e.g., `"repositories"`).
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Opaque resource identifier. For repositories this is the URL, passed
    /// through unparsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Additional resource properties for policy evaluation.
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

/// Additional evaluation request context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationRequestContext {
    /// Token scopes from the `AuthN` result.
    #[serde(default)]
    pub token_scopes: Vec<String>,
    /// Original bearer token for PDP forwarding. Skipped during
    /// serialization so it never leaves the process through this model.
    #[serde(skip)]
    pub bearer_token: Option<SecretString>,
}

/// Authorization evaluation response context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationResponseContext {
    /// Reason for denial (present when `decision` is `false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_reason: Option<DenyReason>,
}

/// Authorization evaluation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// Whether access is granted.
    pub decision: bool,
    #[serde(default)]
    pub context: EvaluationResponseContext,
}

impl EvaluationResponse {
    #[must_use]
    pub fn allow() -> Self {
        Self {
            decision: true,
            context: EvaluationResponseContext::default(),
        }
    }

    #[must_use]
    pub fn deny(reason: DenyReason) -> Self {
        Self {
            decision: false,
            context: EvaluationResponseContext {
                deny_reason: Some(reason),
            },
        }
    }
}
