//! DomRobot response status codes.

use serde_json::Value;

/// Command completed successfully.
pub const SUCCESS: i64 = 1000;
/// Command completed successfully; action pending or with warnings.
pub const SUCCESS_PENDING: i64 = 1001;
/// Command completed successfully; ending session.
pub const LOGOUT_SUCCESS: i64 = 1500;

/// Reads the numeric `code` field of a response body.
pub fn response_code(body: &Value) -> Option<i64> {
    body.get("code").and_then(Value::as_i64)
}

/// Whether a regular call finished with a success code (`1000` or `1001`).
pub fn is_success(body: &Value) -> bool {
    matches!(response_code(body), Some(SUCCESS | SUCCESS_PENDING))
}
