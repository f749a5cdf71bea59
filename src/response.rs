use crate::constants::{APPLICATION_JSON, STATUS_ERROR, STATUS_OK, header};
use crate::error::ApiError;
use crate::handler::{Request, Response};
use bytes::Bytes;
use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderValue};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// The JSON envelope every API response is wrapped in.
///
/// Serializes as `{"status":"OK","data":...}` (with `data` omitted when there
/// is no payload) or `{"error":"...","status":"ERROR"}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Data(Option<Value>),
    Error(String),
}

impl ApiResponse {
    /// Success envelope. A payload that fails to serialize becomes an error
    /// envelope carrying the serializer's message.
    pub fn data<T: serde::Serialize>(payload: T) -> Self {
        match serde_json::to_value(payload) {
            Ok(Value::Null) => ApiResponse::Data(None),
            Ok(value) => ApiResponse::Data(Some(value)),
            Err(err) => ApiResponse::from(&ApiError::Serialization {
                reason: err.to_string(),
            }),
        }
    }

    pub fn ok() -> Self {
        ApiResponse::Data(None)
    }

    pub fn string_error<S: Into<String>>(text: S) -> Self {
        ApiResponse::Error(text.into())
    }

    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        ApiResponse::Error(err.to_string())
    }

    pub fn status(&self) -> &'static str {
        match self {
            ApiResponse::Data(_) => STATUS_OK,
            ApiResponse::Error(_) => STATUS_ERROR,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            ApiResponse::Error(text) => Some(text),
            ApiResponse::Data(_) => None,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiResponse::Data(payload) => payload.as_ref(),
            ApiResponse::Error(_) => None,
        }
    }

    /// Writes the envelope with `200 OK` for data and `500` for errors.
    pub fn write(&self, request: &Request) -> Response {
        let status = if self.is_error() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        };
        self.write_with_status(request, status)
    }

    /// Writes the envelope as a JSON response. Error envelopes are logged with
    /// the request path and user agent first.
    pub fn write_with_status(&self, request: &Request, status: StatusCode) -> Response {
        if let ApiResponse::Error(text) = self {
            log_error(request, text);
        }

        match serde_json::to_vec(self) {
            Ok(body) => json_response(status, body),
            Err(err) => {
                let fallback = ApiResponse::Error(format!("failed to serialize response: {err}"));
                log_error(request, fallback.error_text().unwrap_or_default());
                // A string-only envelope always serializes.
                let body = serde_json::to_vec(&fallback).unwrap_or_default();
                json_response(StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        }
    }
}

impl From<&ApiError> for ApiResponse {
    fn from(err: &ApiError) -> Self {
        ApiResponse::error(err)
    }
}

impl Serialize for ApiResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiResponse::Data(payload) => {
                let mut map = serializer.serialize_map(Some(1 + usize::from(payload.is_some())))?;
                map.serialize_entry("status", STATUS_OK)?;
                if let Some(payload) = payload {
                    map.serialize_entry("data", payload)?;
                }
                map.end()
            }
            ApiResponse::Error(text) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("error", text)?;
                map.serialize_entry("status", STATUS_ERROR)?;
                map.end()
            }
        }
    }
}

/// Writes `err` as an error envelope using the error's own status code.
pub fn write_error(request: &Request, err: &ApiError) -> Response {
    ApiResponse::from(err).write_with_status(request, err.status_code())
}

fn log_error(request: &Request, text: &str) {
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    tracing::error!(
        path = %request.uri(),
        error = text,
        user_agent,
        "error handling request"
    );
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    let mut response = http::Response::new(Bytes::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    response
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
