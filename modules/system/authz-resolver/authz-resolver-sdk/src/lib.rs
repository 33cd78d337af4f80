#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! `AuthZ` Resolver SDK
//!
//! This crate provides the policy engine contract used by services that gate
//! access to resources:
//!
//! - [`AuthZResolverClient`] - Policy engine (PDP) trait; any strategy that can
//!   decide `(subject, action, resource) -> allow/deny` implements it
//! - [`EvaluationRequest`], [`EvaluationResponse`] - Evaluation models
//! - [`AuthZResolverError`] - PDP infrastructure errors
//! - [`pep`] - PEP helpers ([`PolicyEnforcer`], [`ResourceType`])
//!
//! ## Usage
//!
//! ```ignore
//! use authz_resolver_sdk::pep::{PolicyEnforcer, ResourceType};
//!
//! const REPOSITORIES: ResourceType = ResourceType { name: "repositories" };
//!
//! // Create an enforcer once, during service construction
//! let enforcer = PolicyEnforcer::new(authz);
//!
//! // Per request: Ok(()) means allowed
//! enforcer.enforce(&ctx, &REPOSITORIES, "get", Some(url)).await?;
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod pep;

// Re-export main types at crate root
pub use api::AuthZResolverClient;
pub use error::AuthZResolverError;
pub use models::{
    Action, DenyReason, EvaluationRequest, EvaluationRequestContext, EvaluationResponse,
    EvaluationResponseContext, Resource, Subject, subject_properties,
};
pub use pep::{EnforcerError, PolicyEnforcer, ResourceType};
