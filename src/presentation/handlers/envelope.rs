use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const SUCCESS_CODE: i32 = 0;
pub const FAILURE_CODE: i32 = -1;

/// `{"code": 0, "data": ...}`
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T: Serialize> {
    pub code: i32,
    pub data: T,
}

/// `{"code": -1, "msg": ...}`. Failures still travel with HTTP 200.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: i32,
    pub msg: String,
}

/// Serializes as `{}`.
#[derive(Debug, Serialize)]
pub struct Empty {}

pub fn success<T: Serialize>(data: T) -> Response {
    Json(SuccessEnvelope {
        code: SUCCESS_CODE,
        data,
    })
    .into_response()
}

pub fn failure(msg: impl Into<String>) -> Response {
    Json(ErrorEnvelope {
        code: FAILURE_CODE,
        msg: msg.into(),
    })
    .into_response()
}

/// Reads a string field from a JSON object body. Anything that is not a JSON
/// object, including an empty body, is treated as carrying no fields.
pub fn body_field<'a>(body: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    body.as_object().and_then(|map| map.get(key))
}

pub fn parse_body(raw: &[u8]) -> serde_json::Value {
    serde_json::from_slice(raw).unwrap_or(serde_json::Value::Null)
}
