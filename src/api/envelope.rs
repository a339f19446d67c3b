//! Response Envelope
//!
//! Every service response is `{status, message?, data?}`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, ApiResult};

const SUCCESS: &str = "success";

#[derive(Deserialize)]
struct Envelope {
    status: String,
    message: Option<String>,
    data: Option<serde_json::Value>,
}

/// Parse an envelope, returning its optional payload on success
pub fn parse_envelope<T: DeserializeOwned>(text: &str) -> ApiResult<Option<T>> {
    let envelope: Envelope =
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))?;
    if envelope.status != SUCCESS {
        let message = envelope
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("request failed with status {}", envelope.status));
        return Err(ApiError::Rejected(message));
    }
    // Payload shape is only checked once the status says it is meaningful
    match envelope.data {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(data) => serde_json::from_value(data)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
    }
}

/// Parse an envelope whose payload is required
pub fn parse_envelope_data<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    parse_envelope(text)?.ok_or_else(|| ApiError::Decode("missing data".to_string()))
}
