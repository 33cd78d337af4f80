pub mod access_gate;
pub mod local_client;
pub mod mapper;
pub mod outcome;
pub mod resolver;
pub mod service;


pub use access_gate::AccessGate;
pub use local_client::RepoCredsLocalClient;
pub use mapper::classify;
pub use outcome::LookupOutcome;
pub use resolver::{CredentialResolver, ResolveOutcome};
pub use service::{LookupService, ServiceConfig};
