//! PEP (Policy Enforcement Point) helpers.
//!
//! - [`PolicyEnforcer`] - PEP object (build request → evaluate → decide)
//! - [`ResourceType`] - Static descriptor for a resource type

pub mod enforcer;

pub use enforcer::{EnforcerError, PolicyEnforcer, ResourceType};
