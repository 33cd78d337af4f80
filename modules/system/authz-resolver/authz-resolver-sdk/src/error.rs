//! Error types for the `AuthZ` resolver.

use thiserror::Error;

/// Errors returned by a policy engine.
///
/// These represent infrastructure failures only.
/// Access denial is expressed via `EvaluationResponse.decision == false`,
/// not as an error variant.
#[derive(Debug, Error)]
pub enum AuthZResolverError {
    /// The engine is not ready to evaluate requests.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
