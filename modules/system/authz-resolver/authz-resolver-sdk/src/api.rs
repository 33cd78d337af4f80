//! Policy engine trait.

use async_trait::async_trait;

use crate::error::AuthZResolverError;
use crate::models::{EvaluationRequest, EvaluationResponse};

/// Policy decision point consumed by PEPs.
///
/// Implementations are injected as `Arc<dyn AuthZResolverClient>`; there is
/// no process-wide enforcer. Strategies such as allow-all, deny-all or a
/// static RBAC table are interchangeable behind this trait.
///
/// ```ignore
/// let authz: Arc<dyn AuthZResolverClient> = Arc::new(static_authz_plugin::Service::allow_all());
/// let response = authz.evaluate(request).await?;
/// ```
///
/// Implementations must be safe for concurrent use by many in-flight
/// requests.
#[async_trait]
pub trait AuthZResolverClient: Send + Sync {
    /// Evaluate an authorization request.
    ///
    /// A denial is a successful evaluation with `decision == false`.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the engine cannot evaluate right now
    /// - `Internal` for unexpected errors
    async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationResponse, AuthZResolverError>;
}
