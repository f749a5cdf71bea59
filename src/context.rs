//! Request-scoped values carried in [`http::Extensions`].
//!
//! Every carrier lives under a crate-private wrapper type, so code outside
//! this crate can only reach it through the accessors below.

use crate::claims::SessionClaims;
use crate::error::ApiError;
use crate::handler::Request;
use crate::params::Params;
use serde_json::Value;
use url::form_urlencoded;

#[derive(Clone)]
struct RouteParams(Params);

#[derive(Clone)]
struct RequestBody(Value);

#[derive(Clone)]
struct Claims(SessionClaims);

/// Returns `request` with `params` bound to its context.
///
/// Bindings already on the request (claims, body, foreign extensions) are
/// kept. An empty parameter set leaves the request untouched.
pub fn with_params(mut request: Request, params: Params) -> Request {
    if params.is_empty() {
        return request;
    }
    tracing::trace!(count = params.len(), "binding route parameters");
    request.extensions_mut().insert(RouteParams(params));
    request
}

/// All route parameters bound to this request, if a parameterized route
/// matched it.
pub fn params(request: &Request) -> Option<&Params> {
    request
        .extensions()
        .get::<RouteParams>()
        .map(|RouteParams(params)| params)
}

/// Looks up a route parameter.
///
/// A request that reached a handler without a parameterized route has no
/// carrier at all; that is a wiring mistake and yields
/// [`ApiError::ParamsNotAttached`].
pub fn param_by_name<'r>(request: &'r Request, name: &str) -> Result<&'r str, ApiError> {
    let params = params(request).ok_or(ApiError::ParamsNotAttached)?;
    params.by_name(name).ok_or_else(|| ApiError::UnknownParam {
        name: name.to_string(),
    })
}

/// First query string value for `name`, or `""`.
pub fn query_param_by_name(request: &Request, name: &str) -> String {
    query_pairs(request)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Every query string value for `name`, in order.
pub fn query_params_by_name(request: &Request, name: &str) -> Vec<String> {
    query_pairs(request)
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value)
        .collect()
}

fn query_pairs(request: &Request) -> impl Iterator<Item = (String, String)> + '_ {
    let query = request.uri().query().unwrap_or_default();
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
}

/// Binds a parsed body to the request.
pub fn attach_body(request: &mut Request, body: Value) {
    request.extensions_mut().insert(RequestBody(body));
}

pub fn request_body(request: &Request) -> Option<&Value> {
    request
        .extensions()
        .get::<RequestBody>()
        .map(|RequestBody(body)| body)
}

/// Parses the raw body as JSON and binds it to the request.
///
/// An empty body binds nothing. Malformed JSON is reported as
/// [`ApiError::MissingRequiredData`].
pub fn parse_json_body(request: &mut Request) -> Result<(), ApiError> {
    if request.body().is_empty() {
        return Ok(());
    }
    let body: Value = serde_json::from_slice(request.body()).map_err(|err| {
        tracing::debug!(error = %err, "rejecting malformed JSON body");
        ApiError::MissingRequiredData
    })?;
    attach_body(request, body);
    Ok(())
}

/// Binds verified session claims to the request.
pub fn attach_claims(request: &mut Request, claims: SessionClaims) {
    request.extensions_mut().insert(Claims(claims));
}

pub fn claims(request: &Request) -> Option<&SessionClaims> {
    request
        .extensions()
        .get::<Claims>()
        .map(|Claims(claims)| claims)
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
