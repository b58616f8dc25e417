//! The generic invoker: one method name, one parameter map, one classified
//! response.

use inwx_types::{InvocationRequest, Params, status};
use serde_json::Value;
use tracing::debug;

use crate::{ApiError, Session};

/// Calls `method` with `params` and classifies the response.
///
/// Bodies with code `1000` or `1001` are returned unchanged. Any other code,
/// or a body without a numeric code, becomes [`ApiError::Remote`] carrying
/// the full body. Transport failures pass through untouched.
pub async fn invoke(session: &mut dyn Session, method: &str, params: &Params) -> Result<Value, ApiError> {
    debug!(method, params = params.len(), "invoking DomRobot method");
    let body = session.call(method, params).await?;
    if status::is_success(&body) {
        Ok(body)
    } else {
        debug!(method, code = ?status::response_code(&body), "DomRobot call failed");
        Err(ApiError::Remote(body))
    }
}

/// [`invoke`] for a prepared [`InvocationRequest`].
pub async fn invoke_request(session: &mut dyn Session, request: &InvocationRequest) -> Result<Value, ApiError> {
    invoke(session, &request.method, &request.params).await
}
