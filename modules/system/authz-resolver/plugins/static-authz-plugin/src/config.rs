//! Configuration for the static `AuthZ` plugin.

use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAuthZPluginConfig {
    /// Authorization mode.
    pub mode: AuthZMode,

    /// Role granted to every authenticated (non-anonymous) subject.
    pub default_role: Option<String>,

    /// Subject-name or group to role assignments.
    pub role_bindings: Vec<RoleBinding>,

    /// Permission rules evaluated in `rules` mode.
    pub policies: Vec<PolicyRule>,
}

/// Authorization mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthZMode {
    /// Allow every request.
    AllowAll,
    /// Deny every request.
    DenyAll,
    /// Evaluate `role_bindings` and `policies`.
    #[default]
    Rules,
}

/// Binds a subject name or group claim to a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleBinding {
    /// Subject name or group name.
    pub subject: String,
    /// Role name, e.g. `role:admin`.
    pub role: String,
}

/// A single permission rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyRule {
    pub role: String,
    /// Resource type, or `*`.
    pub resource: String,
    /// Action name, or `*`.
    pub action: String,
    /// Glob pattern matched against the resource id.
    #[serde(default = "default_object")]
    pub object: String,
    #[serde(default)]
    pub effect: Effect,
}

fn default_object() -> String {
    "*".to_owned()
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    #[default]
    Allow,
    Deny,
}

/// Invalid plugin configuration.
#[derive(Debug, thiserror::Error)]
pub enum PolicyConfigError {
    #[error("policy #{index} has invalid object pattern '{pattern}': {reason}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        reason: String,
    },

    #[error("policy #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}
