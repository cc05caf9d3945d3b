//! Request handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::processor::ProcessedText;
use crate::server::AppState;
use crate::server::error::ApiError;

/// Body of `POST /process_text`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessTextRequest {
    /// The text to analyze. Any JSON value is accepted here; validation
    /// rejects falsy values as missing and other non-strings as invalid.
    #[serde(default)]
    pub text: Option<Value>,
}

impl ProcessTextRequest {
    /// Create a request for `text`.
    pub fn new<S: Into<String>>(text: S) -> Self {
        ProcessTextRequest {
            text: Some(Value::String(text.into())),
        }
    }

    /// Return the text if it is a non-empty string.
    ///
    /// Missing, `null`, `""`, `false`, `0`, `[]` and `{}` all count as no text.
    pub fn validated_text(&self) -> Result<&str, ApiError> {
        match &self.text {
            Some(Value::String(text)) if !text.is_empty() => Ok(text.as_str()),
            Some(value) if !is_falsy(value) => Err(ApiError::InvalidPayload(
                "text must be a string".to_string(),
            )),
            _ => Err(ApiError::MissingText),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// `POST /process_text`
pub async fn process_text(
    State(state): State<AppState>,
    payload: Result<Json<ProcessTextRequest>, JsonRejection>,
) -> Result<Json<ProcessedText>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected payload: {rejection}");
        ApiError::InvalidPayload(rejection.body_text())
    })?;

    let text = request.validated_text()?;
    let result = state.processor().process(text)?;

    Ok(Json(result))
}
