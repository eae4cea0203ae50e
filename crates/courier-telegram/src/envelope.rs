use courier_core::error::{CourierError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// The response wrapper every remote operation returns.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub error_code: Option<i64>,
    pub description: Option<String>,
}

/// Unwrap a response body into the operation's result shape.
///
/// Malformed bodies and shape mismatches are `Decode` errors; a well-formed body with
/// `ok == false` is an `Api` error carrying the platform's code and description.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope<Value> = serde_json::from_slice(body)
        .map_err(|e| CourierError::Decode(format!("malformed response body: {e}")))?;

    if !envelope.ok {
        return Err(CourierError::Api {
            code: envelope.error_code.unwrap_or_default(),
            description: envelope
                .description
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    let result = envelope
        .result
        .ok_or_else(|| CourierError::Decode("missing result in response".to_string()))?;

    serde_json::from_value(result)
        .map_err(|e| CourierError::Decode(format!("unexpected result shape: {e}")))
}
