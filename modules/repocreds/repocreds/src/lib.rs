#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Access-gated repository credentials lookup.
//!
//! [`LookupService`] checks the caller against the policy engine, then reads
//! the credential store, then classifies the result. [`RepoCredsLocalClient`]
//! exposes it through [`repocreds_sdk::RepoCredsClientV1`].

pub mod config;
pub mod domain;

pub use config::RepoCredsConfig;
pub use domain::{
    AccessGate, CredentialResolver, LookupOutcome, LookupService, RepoCredsLocalClient,
    ResolveOutcome, ServiceConfig, classify,
};
