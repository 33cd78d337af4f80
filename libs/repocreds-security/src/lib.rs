#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Caller identity for the repository credentials service.
//!
//! [`SecurityContext`] is built by the authentication layer and handed to
//! the lookup service unchanged for the lifetime of one request. The policy
//! engine reads subject name, groups and scopes from it; nothing else in the
//! service interprets these claims.

pub mod constants;
pub mod context;

pub use context::{SecurityContext, SecurityContextBuilder};
