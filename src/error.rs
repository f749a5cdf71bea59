use http::StatusCode;
use thiserror::Error;

/// Failures a request can end in. The display text is the envelope's `error`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("forbidden")]
    Forbidden,

    #[error("origin '{origin}' is not allowed")]
    OriginNotAllowed { origin: String },

    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("not recognized")]
    NotRecognized,

    /// The handler asked for a route parameter but the request never went
    /// through a parameterized route.
    #[error("route parameters are not attached to this request")]
    ParamsNotAttached,

    #[error("route parameter '{name}' is not defined for this route")]
    UnknownParam { name: String },

    #[error("failed to serialize response: {reason}")]
    Serialization { reason: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forbidden | ApiError::OriginNotAllowed { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingRequiredData => StatusCode::BAD_REQUEST,
            ApiError::NotRecognized => StatusCode::UNAUTHORIZED,
            ApiError::ParamsNotAttached
            | ApiError::UnknownParam { .. }
            | ApiError::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors raised while registering routes.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid route '{method} {path}': {source}")]
    Insert {
        method: String,
        path: String,
        #[source]
        source: matchit::InsertError,
    },

    #[error("route path '{path}' must begin with '/'")]
    MissingLeadingSlash { path: String },
}

/// Errors raised while building a typed claims value from a raw token payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("claims payload must be a JSON object")]
    NotAnObject,

    #[error("claim '{claim}' has an unsupported type")]
    InvalidClaimType { claim: &'static str },
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
