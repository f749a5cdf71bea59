//! Session identity lookups and the resource-owner check.
//!
//! All lookups read the claims the authentication layer attached to the
//! request. A request without claims is anonymous: lookups return empty values
//! and never fail.

use crate::constants::OWNER_PARAM;
use crate::context::{claims, param_by_name};
use crate::error::ApiError;
use crate::handler::Request;

/// The session user's id, or `""` for an anonymous request.
pub fn session_user_id(request: &Request) -> String {
    claims(request)
        .and_then(|claims| claims.uid())
        .unwrap_or_default()
        .to_string()
}

/// The session user's roles, or an empty list for an anonymous request.
pub fn user_roles(request: &Request) -> Vec<String> {
    claims(request)
        .map(|claims| claims.roles().to_vec())
        .unwrap_or_default()
}

pub fn has_role(request: &Request, role: &str) -> bool {
    claims(request).is_some_and(|claims| claims.has_role(role))
}

/// Checks that the session user owns the resource named by the `uid` route
/// parameter.
///
/// Nothing is written to the client. On `Err` the caller must answer with the
/// error (see [`write_error`](crate::write_error)) and return:
///
/// ```
/// use bunner_router_rs::{Request, Response, authorize, write_error};
///
/// fn update_user(req: Request) -> Response {
///     if let Err(err) = authorize(&req) {
///         return write_error(&req, &err);
///     }
///     bunner_router_rs::ApiResponse::ok().write(&req)
/// }
/// # let _ = update_user;
/// ```
///
/// An anonymous session is never the owner. A request dispatched without a
/// `uid` route parameter fails with the parameter lookup error.
pub fn authorize(request: &Request) -> Result<(), ApiError> {
    let owner = param_by_name(request, OWNER_PARAM)?;
    match claims(request).and_then(|claims| claims.uid()) {
        Some(session) if session == owner => Ok(()),
        session => {
            tracing::debug!(
                owner,
                session = session.unwrap_or_default(),
                "resource owner check failed"
            );
            Err(ApiError::Forbidden)
        }
    }
}

#[cfg(test)]
#[path = "authz_test.rs"]
mod authz_test;
