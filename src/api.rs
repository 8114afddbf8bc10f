//! JSON request boundary: `{ "text": ... }` in, analysis result or
//! `{ "error": ... }` out. This is the shape request handlers forward
//! verbatim to persistence and rendering collaborators.

use serde_json::{json, Value};
use tracing::warn;

use crate::analyzer::analyze;
use crate::error::AnalyzeError;

/// Handle one analyze payload. Always returns a JSON body; failures carry a
/// single `error` field and no partial analysis data.
pub fn handle_request(payload: &Value) -> Value {
    let text = match payload.get("text").and_then(Value::as_str) {
        Some(t) => t,
        None => return error_body(&AnalyzeError::missing_text()),
    };

    match analyze(text) {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to serialize analysis result - {}", e);
                json!({ "error": e.to_string() })
            }
        },
        Err(e) => error_body(&e),
    }
}

fn error_body(err: &AnalyzeError) -> Value {
    json!({ "error": err.to_string() })
}
