//! Lenient JSON body extraction.
//!
//! - A body without a JSON `Content-Type`, or an empty body, yields
//!   `T::default()`
//! - A top-level JSON array also yields `T::default()`
//! - Object fields holding `null`, `false`, `0` or `""` are dropped before
//!   typed deserialization, so they read as absent
//! - Unparseable JSON or an unreadable body is a server error, not a 4xx

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::response::ApiError;

/// JSON request body, defaulted when absent.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Internal(rejection.body_text()))?;

        parse(&bytes).map(Self)
    }
}

fn parse<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::Internal(e.to_string()))?;
    match value {
        Value::Object(mut fields) => {
            fields.retain(|_, field| !is_falsy(field));
            serde_json::from_value(Value::Object(fields))
                .map_err(|e| ApiError::Internal(e.to_string()))
        }
        Value::Array(_) => Ok(T::default()),
        other => Err(ApiError::Internal(format!(
            "Expected a JSON object body, found {other}"
        ))),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
        || mime.to_ascii_lowercase().ends_with("+json")
}
