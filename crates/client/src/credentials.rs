//! Choosing and encoding the API key for a request.

use base64::Engine as _;

use crate::error::{ClientError, Result};

/// Picks the key to present: a non-empty per-call key, else a non-empty default.
///
/// # Errors
///
/// [`ClientError::MissingApiKey`] when neither is usable.
pub fn resolve_api_key<'a>(explicit: Option<&'a str>, default: Option<&'a str>) -> Result<&'a str> {
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| default.filter(|key| !key.is_empty()))
        .ok_or(ClientError::MissingApiKey)
}

/// The `Authorization` header value for `api_key`.
///
/// The key is encoded as is, with no `:password` suffix.
pub fn basic_auth_value(api_key: &str) -> String {
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(api_key.as_bytes())
    )
}
