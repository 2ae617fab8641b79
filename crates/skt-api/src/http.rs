//! Response decoding shared by every endpoint.
//!
//! Centralizes the status check (non-success → [`RequestError::Server`] with
//! the backend's `error` field) and JSON parsing so the endpoint modules
//! only build requests and map payloads.

use serde_json::Value;

use crate::error::RequestError;
use crate::transport::ApiResponse;

/// Decode a raw response into JSON.
///
/// - Empty bodies decode to `null` (no-content deletes).
/// - Non-success statuses become [`RequestError::Server`] with the body's
///   `error` string, or `HTTP <status>` when the body has none or is not JSON.
/// - A success status with a non-JSON body is [`RequestError::Decode`].
pub fn decode_response(response: &ApiResponse) -> Result<Value, RequestError> {
    let body = response.body.trim();
    let parsed = if body.is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(body)
    };

    if !response.is_success() {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(|value| value.get("error"))
            .and_then(Value::as_str)
            .map_or_else(|| format!("HTTP {}", response.status), str::to_string);
        return Err(RequestError::Server {
            status: response.status,
            message,
        });
    }

    parsed.map_err(|error| RequestError::decode(error.to_string()))
}

/// Append URL-encoded query parameters; no `?` when there are none.
#[must_use]
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}
