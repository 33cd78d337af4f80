#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! `RepoCreds` SDK
//!
//! This crate provides the public API for the `repocreds` module:
//!
//! - [`RepoCredsClientV1`] - Consumer API: access-gated credential lookup by URL
//! - [`RepoCredsStore`] - Backend API implemented by credential stores
//! - [`RepoCreds`], [`RepoType`], [`RepoCredsQuery`], [`RepoCredsListQuery`] - Models
//! - [`RepoCredsError`], [`StoreError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use repocreds_sdk::{RepoCredsClientV1, RepoCredsError, RepoCredsQuery};
//!
//! match client.get_repository_credentials(&ctx, &RepoCredsQuery::new(url)).await {
//!     Ok(creds) => connect(&creds),
//!     Err(RepoCredsError::NotFound { url }) => tracing::info!(%url, "no credentials"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod store_api;

pub use api::RepoCredsClientV1;
pub use error::{RepoCredsError, StoreError};
pub use models::{RepoCreds, RepoCredsListQuery, RepoCredsQuery, RepoType};
pub use store_api::RepoCredsStore;
