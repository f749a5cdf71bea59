use crate::constants::claim;
use crate::error::ClaimsError;
use crate::util::split_list;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity facts taken from a verified token.
///
/// The authentication layer builds this once, after it has checked the token
/// signature, and attaches it to the request with
/// [`attach_claims`](crate::attach_claims).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    roles: Vec<String>,
}

impl SessionClaims {
    pub fn new<S: Into<String>>(uid: S) -> Self {
        Self {
            uid: Some(uid.into()),
            roles: Vec::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Reads a decoded claims object.
    ///
    /// `uid` may be a string or a number. `roles` may be an array of strings,
    /// a single string or a comma separated string; non-string entries are
    /// dropped. Any other shape for `uid` is rejected.
    pub fn from_json(value: &Value) -> Result<Self, ClaimsError> {
        let object = value.as_object().ok_or(ClaimsError::NotAnObject)?;

        let uid = match object.get(claim::UID) {
            None | Some(Value::Null) => None,
            Some(Value::String(uid)) => Some(uid.clone()),
            Some(Value::Number(uid)) => Some(uid.to_string()),
            Some(_) => return Err(ClaimsError::InvalidClaimType { claim: claim::UID }),
        };

        let roles = match object.get(claim::ROLES) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
            Some(Value::String(joined)) => split_list(joined).map(str::to_owned).collect(),
            _ => Vec::new(),
        };

        Ok(Self { uid, roles })
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref().filter(|uid| !uid.is_empty())
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|granted| granted == role)
    }
}

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;
