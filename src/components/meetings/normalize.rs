use super::models::Meeting;
use crate::error::{AppResult, Error};
use serde_json::Value;

/// Normalize the heterogeneous response shapes the meetings API produces.
///
/// The backend has been observed returning the payload three ways: as the
/// value itself, as a JSON-encoded string, and as an envelope
/// `{ "message": "<json string>" }` (the wrapping an intermediate layer adds
/// to non-JSON bodies). All three must keep working; existing deployments
/// depend on each branch.
pub fn normalize_response(value: Value) -> AppResult<Value> {
    match value {
        Value::String(text) => serde_json::from_str(&text).map_err(|e| {
            Error::Serialization(format!("Failed to parse string response: {}", e))
        }),
        Value::Object(map) if map.get("message").is_some_and(Value::is_string) => {
            let inner = map
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default();
            serde_json::from_str(inner).map_err(|e| {
                Error::Serialization(format!("Failed to parse enveloped response: {}", e))
            })
        }
        other => Ok(other),
    }
}

/// Normalize and deserialize a meetings-list response body
pub fn meetings_from_response(value: Value) -> AppResult<Vec<Meeting>> {
    let normalized = normalize_response(value)?;
    serde_json::from_value(normalized)
        .map_err(|e| Error::Serialization(format!("Unexpected meetings payload: {}", e)))
}
