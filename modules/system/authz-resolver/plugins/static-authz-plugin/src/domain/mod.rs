//! Domain layer for the static `AuthZ` plugin.

mod client;
pub mod service;

pub use service::{Service, deny_codes};
