//! A CORS-gated adapter around a radix-tree path router.
//!
//! Requests enter through [`CorsGate`], which applies the origin allow-list
//! read from a [`ConfigSource`], then reach the [`Router`]. Route handlers are
//! plain `Fn(Request) -> Response` values; captured path parameters, the
//! parsed body and the session [`SessionClaims`] travel in the request's
//! context and are read with the accessors re-exported here.

mod authz;
mod claims;
mod config;
pub mod constants;
mod context;
mod error;
mod gate;
mod handler;
mod headers;
mod options;
mod origin;
mod params;
mod response;
mod router;
mod util;

pub use authz::{authorize, has_role, session_user_id, user_roles};
pub use claims::SessionClaims;
pub use config::{ConfigSource, EnvConfig};
pub use context::{
    attach_body, attach_claims, claims, param_by_name, params, parse_json_body,
    query_param_by_name, query_params_by_name, request_body, with_params,
};
pub use error::{ApiError, ClaimsError, RouteError};
pub use gate::{CorsDecision, CorsGate, CorsRequest};
pub use handler::{Handler, ParamHandler, Request, Response, WrappedHandler, wrap_handler};
pub use headers::Headers;
pub use options::{GateOptions, ValidationError};
pub use origin::{AllowList, OriginDecision, OriginMatching};
pub use params::{Param, Params};
pub use response::{ApiResponse, write_error};
pub use router::Router;
pub use util::equals_ignore_case;
