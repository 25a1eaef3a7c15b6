//! Request body envelope and shared payload checks
//!
//! Clients wrap every write payload in `{ "data": { ... } }`. The wrapper is
//! modeled explicitly: a missing `data` key deserializes to `Value::Null`,
//! and every downstream field lookup treats that the same as an empty object,
//! so the individual field checks produce the rejection.

use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;

/// JSON request wrapper `{ "data": { ... } }`
#[derive(Debug, Default, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub data: Value,
}

/// Route-id vs body-id consistency check used by both update handlers
///
/// The body id is optional: an absent key, JSON `null`, and the empty string
/// all count as "not supplied" and pass silently. Anything else is rendered
/// to text and must match the route id exactly.
pub fn require_matching_id(
    resource: &'static str,
    route_id: &str,
    data: &Value,
) -> Result<(), ApiError> {
    let body_id = match data.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    match body_id {
        Some(id) if id != route_id => Err(ApiError::validation(format!(
            "{} id in the body ({}) does not match {} id in the route ({})",
            resource,
            id,
            resource.to_ascii_lowercase(),
            route_id
        ))),
        _ => Ok(()),
    }
}
