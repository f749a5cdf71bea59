use crate::constants::{config, defaults};
use crate::origin::OriginMatching;
use crate::util::is_http_token;
use thiserror::Error;

/// Settings of the CORS entry gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOptions {
    /// Configuration key the origin allow-list is read from.
    pub allow_list_key: String,
    pub methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub credentials: bool,
    /// Defaults to [`OriginMatching::Contains`]; [`OriginMatching::Exact`]
    /// only admits whole list entries.
    pub origin_matching: OriginMatching,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            allow_list_key: config::CORS_ALLOWED_LIST.to_string(),
            methods: defaults::ALLOWED_METHODS.iter().map(|m| m.to_string()).collect(),
            allowed_headers: defaults::ALLOWED_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            credentials: true,
            origin_matching: OriginMatching::default(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allow-list configuration key must not be empty")]
    EmptyAllowListKey,
    #[error("allowed method '{0}' is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("allowed header '{0}' is not a valid HTTP token")]
    InvalidHeader(String),
}

impl GateOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allow_list_key.trim().is_empty() {
            return Err(ValidationError::EmptyAllowListKey);
        }

        if let Some(method) = self.methods.iter().find(|m| !is_http_token(m)) {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if let Some(name) = self.allowed_headers.iter().find(|h| !is_http_token(h)) {
            return Err(ValidationError::InvalidHeader(name.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
