#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static `AuthZ` Plugin
//!
//! A policy engine driven entirely by configuration.
//!
//! ## Modes
//!
//! - `allow_all` - every request is allowed (local development, tests)
//! - `deny_all` - every request is denied
//! - `rules` (default) - static RBAC: role bindings plus allow/deny rules
//!
//! With the default configuration no rule exists, so every request is denied.
//!
//! ## Configuration
//!
//! ```yaml
//! authz:
//!   mode: rules
//!   default_role: "role:readonly"
//!   role_bindings:
//!     - { subject: "admin", role: "role:admin" }
//!     - { subject: "platform-team", role: "role:admin" }
//!   policies:
//!     - { role: "role:admin", resource: "repositories", action: "*", object: "*" }
//!     - { role: "role:readonly", resource: "repositories", action: "get", object: "https://github.com/public/*" }
//!     - { role: "role:readonly", resource: "repositories", action: "get", object: "https://github.com/public/secret", effect: deny }
//! ```

pub mod config;
pub mod domain;

pub use config::StaticAuthZPluginConfig;
pub use domain::Service;
