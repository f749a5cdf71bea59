use crate::config::ConfigSource;
use crate::constants::{header, method};
use crate::error::ApiError;
use crate::handler::{Handler, Request, Response};
use crate::headers::{HeaderCollection, Headers, apply_headers};
use crate::options::{GateOptions, ValidationError};
use crate::origin::{AllowList, OriginDecision};
use crate::response::write_error;
use crate::router::Router;
use http::StatusCode;
use std::borrow::Cow;
use std::sync::Arc;

/// The parts of a request the CORS decision depends on.
#[derive(Debug, Clone)]
pub struct CorsRequest<'a> {
    pub method: &'a str,
    pub origin: Option<Cow<'a, str>>,
}

impl<'a> CorsRequest<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self {
            method,
            origin: origin.map(Cow::Borrowed),
        }
    }

    /// Reads the method and `Origin` header.
    ///
    /// An empty `Origin` counts as absent. Bytes that are not valid UTF-8 are
    /// replaced, so such an origin stays present and readable in logs.
    pub fn from_request(request: &'a Request) -> Self {
        let origin = request
            .headers()
            .get(header::ORIGIN)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .filter(|origin| !origin.is_empty());

        Self {
            method: request.method().as_str(),
            origin,
        }
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// `OPTIONS` request: headers are committed with `200 OK` before dispatch.
    Preflight { headers: Headers },
    /// Any other allowed request: headers are added to the handler's response.
    Simple { headers: Headers },
    /// Origin not on the allow-list: answer `403` and skip dispatch.
    Rejected { origin: String },
}

/// Entry point for every request: applies the origin policy, then hands the
/// request to the router.
pub struct CorsGate {
    router: Router,
    config: Arc<dyn ConfigSource>,
    options: GateOptions,
}

impl CorsGate {
    pub fn new<C>(router: Router, config: C, options: GateOptions) -> Result<Self, ValidationError>
    where
        C: ConfigSource + 'static,
    {
        options.validate()?;
        Ok(Self {
            router,
            config: Arc::new(config),
            options,
        })
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn options(&self) -> &GateOptions {
        &self.options
    }

    /// Reads the allow-list from configuration. Nothing is cached, so a
    /// reloaded configuration applies to the next request.
    pub fn allow_list(&self) -> AllowList {
        self.config
            .get(&self.options.allow_list_key)
            .map(|raw| AllowList::parse(&raw).with_matching(self.options.origin_matching))
            .unwrap_or_default()
    }

    pub fn check(&self, request: &CorsRequest<'_>) -> CorsDecision {
        let mut headers = HeaderCollection::new();

        match self.allow_list().resolve(request.origin.as_deref()) {
            OriginDecision::Any => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            }
            OriginDecision::Mirror(origin) => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                headers.add_vary(header::ORIGIN);
            }
            OriginDecision::Disallow => {
                let origin = request.origin.as_deref().unwrap_or_default().to_string();
                tracing::debug!(origin = %origin, "origin rejected");
                return CorsDecision::Rejected { origin };
            }
        }

        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        if !self.options.methods.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                self.options.methods.join(", "),
            );
        }
        if !self.options.allowed_headers.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                self.options.allowed_headers.join(", "),
            );
        }

        let headers = headers.into_headers();
        if request.is_preflight() {
            CorsDecision::Preflight { headers }
        } else {
            CorsDecision::Simple { headers }
        }
    }

    /// Runs one request through the gate and the router.
    ///
    /// A rejected origin ends here with a `403` envelope and the router never
    /// sees the request.
    ///
    /// A preflight still reaches the router, but the gate has already
    /// committed `200 OK` and the CORS headers. Only the body of the dispatched
    /// response survives: its status and every header it set are dropped,
    /// `Content-Type` included, so a JSON body written by an `OPTIONS` handler
    /// goes out untyped.
    pub fn handle(&self, request: Request) -> Response {
        let decision = self.check(&CorsRequest::from_request(&request));

        match decision {
            CorsDecision::Rejected { origin } => {
                write_error(&request, &ApiError::OriginNotAllowed { origin })
            }
            CorsDecision::Preflight { headers } => {
                let dispatched = self.router.dispatch(request);
                let mut response = http::Response::new(dispatched.into_body());
                *response.status_mut() = StatusCode::OK;
                apply_headers(response.headers_mut(), &headers);
                response
            }
            CorsDecision::Simple { headers } => {
                let mut response = self.router.dispatch(request);
                apply_headers(response.headers_mut(), &headers);
                response
            }
        }
    }
}

impl Handler for CorsGate {
    fn call(&self, request: Request) -> Response {
        self.handle(request)
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;
