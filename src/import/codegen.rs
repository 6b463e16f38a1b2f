//! Stable code identifiers for imported tools.
//!
//! Codes may serve as natural keys downstream, so generation is pure and
//! deterministic: the same operation metadata always yields the same code.
//! Collisions between operations are not resolved here; the registry owns
//! uniqueness.

use serde_json::Value;

use crate::domain::HttpMethod;

/// Lower-case the input and replace every character outside `[a-zA-Z0-9-]`
/// with `-`.
pub fn sanitize_code(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Derive the code for one operation.
///
/// Prefers a non-empty `operationId`; otherwise synthesizes
/// `<method>-<path>` with the same sanitization applied.
pub fn generate_code(operation: &Value, method: HttpMethod, path: &str) -> String {
    match operation.get("operationId").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => sanitize_code(id),
        _ => sanitize_code(&format!("{}-{}", method.openapi_key(), path)),
    }
}
