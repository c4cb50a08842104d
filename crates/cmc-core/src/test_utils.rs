//! JSON builders for provider-shaped payloads used across the test suites

use serde_json::{json, Value};

/// Provider `status` block as returned on a successful call
pub fn status_block(error_code: i64, error_message: Option<&str>) -> Value {
  json!({
    "timestamp": "2018-06-02T22:51:28.209Z",
    "error_code": error_code,
    "error_message": error_message,
    "elapsed": 10,
    "credit_count": 1
  })
}

/// Full response body wrapping `data` in a healthy status block
pub fn envelope(data: Value) -> Value {
  json!({ "status": status_block(0, None), "data": data })
}

/// Response body for a provider-side error (no `data`)
pub fn error_envelope(error_code: i64, message: &str) -> Value {
  json!({ "status": status_block(error_code, Some(message)) })
}
