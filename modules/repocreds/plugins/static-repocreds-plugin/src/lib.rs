#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static `RepoCreds` store plugin
//!
//! Serves repository credentials from configuration. Lookup is by exact URL;
//! nothing is normalized.

pub mod config;
pub mod domain;

pub use config::{CredentialEntry, StaticRepoCredsPluginConfig, StoreConfigError};
pub use domain::Service;
