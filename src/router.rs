use crate::constants::method;
use crate::error::{ApiError, RouteError};
use crate::handler::{Handler, ParamHandler, Request, Response, wrap_handler};
use crate::params::Params;
use crate::response::write_error;
use bytes::Bytes;
use http::header::{ALLOW, HeaderValue, LOCATION};
use http::{Method, StatusCode};
use indexmap::IndexMap;
use std::sync::Arc;

type Routes = matchit::Router<Arc<dyn ParamHandler>>;

/// Method-keyed path router built on a radix tree.
///
/// Routes are registered up front; afterwards the router is only read, so one
/// instance can serve any number of concurrent requests.
pub struct Router {
    routes: IndexMap<Method, Routes>,
    auto_options: bool,
    method_not_allowed: bool,
    redirect_trailing_slash: bool,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            routes: IndexMap::new(),
            auto_options: true,
            method_not_allowed: true,
            redirect_trailing_slash: true,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `OPTIONS` requests without a matching handler with an `Allow`
    /// header. Enabled by default.
    pub fn auto_options(&mut self, enabled: bool) -> &mut Self {
        self.auto_options = enabled;
        self
    }

    /// Answer `405` instead of `404` when the path exists for other methods.
    /// Enabled by default.
    pub fn method_not_allowed(&mut self, enabled: bool) -> &mut Self {
        self.method_not_allowed = enabled;
        self
    }

    /// Redirect to the path with the trailing slash added or removed when only
    /// that variant is registered. Enabled by default.
    pub fn redirect_trailing_slash(&mut self, enabled: bool) -> &mut Self {
        self.redirect_trailing_slash = enabled;
        self
    }

    /// Registers a plain handler; captured parameters reach it through the
    /// request context.
    pub fn handle<H: Handler>(
        &mut self,
        method: Method,
        path: &str,
        handler: H,
    ) -> Result<&mut Self, RouteError> {
        self.handle_params(method, path, wrap_handler(handler))
    }

    /// Registers a handler that receives the captured parameters directly.
    pub fn handle_params<P: ParamHandler>(
        &mut self,
        method: Method,
        path: &str,
        handler: P,
    ) -> Result<&mut Self, RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash {
                path: path.to_string(),
            });
        }

        let handler: Arc<dyn ParamHandler> = Arc::new(handler);
        self.routes
            .entry(method.clone())
            .or_insert_with(matchit::Router::new)
            .insert(path, handler)
            .map_err(|source| RouteError::Insert {
                method: method.to_string(),
                path: path.to_string(),
                source,
            })?;

        tracing::debug!(%method, path, "route registered");
        Ok(self)
    }

    pub fn get<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.handle(Method::GET, path, handler)
    }

    pub fn post<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.handle(Method::POST, path, handler)
    }

    pub fn put<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.handle(Method::PUT, path, handler)
    }

    pub fn delete<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.handle(Method::DELETE, path, handler)
    }

    pub fn patch<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.handle(Method::PATCH, path, handler)
    }

    pub fn head<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.handle(Method::HEAD, path, handler)
    }

    pub fn options<H: Handler>(&mut self, path: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.handle(Method::OPTIONS, path, handler)
    }

    /// Routes `request` to the handler registered for its method and path.
    pub fn dispatch(&self, request: Request) -> Response {
        let path = request.uri().path().to_string();

        if let Some(routes) = self.routes.get(request.method()) {
            if let Ok(matched) = routes.at(&path) {
                let params = Params::from(&matched.params);
                return matched.value.call(request, params);
            }

            if self.redirect_trailing_slash
                && request.method() != Method::CONNECT
                && path != "/"
            {
                let alternate = toggle_trailing_slash(&path);
                if routes.at(&alternate).is_ok() {
                    return redirect(&request, &alternate);
                }
            }
        }

        if request.method() == Method::OPTIONS {
            if self.auto_options {
                let allow = self.allowed(&path, &Method::OPTIONS);
                if !allow.is_empty() {
                    return allow_response(&allow);
                }
            }
        } else if self.method_not_allowed {
            let allow = self.allowed(&path, request.method());
            if !allow.is_empty() {
                let mut response = write_error(&request, &ApiError::MethodNotAllowed);
                set_allow(&mut response, &allow);
                return response;
            }
        }

        tracing::debug!(method = %request.method(), path = %path, "no route matched");
        write_error(&request, &ApiError::NotFound)
    }

    /// Methods that can serve `path`, other than `request_method`, followed by
    /// `OPTIONS`. The path `*` lists every registered method.
    pub fn allowed(&self, path: &str, request_method: &Method) -> Vec<&str> {
        let mut allow: Vec<&str> = if path == "*" {
            self.routes
                .keys()
                .filter(|method| **method != Method::OPTIONS)
                .map(Method::as_str)
                .collect()
        } else {
            self.routes
                .iter()
                .filter(|(method, _)| *method != request_method && **method != Method::OPTIONS)
                .filter(|(_, routes)| routes.at(path).is_ok())
                .map(|(method, _)| method.as_str())
                .collect()
        };

        if !allow.is_empty() {
            allow.push(method::OPTIONS);
        }
        allow
    }
}

fn toggle_trailing_slash(path: &str) -> String {
    match path.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => format!("{path}/"),
    }
}

fn redirect(request: &Request, target: &str) -> Response {
    let status = if request.method() == Method::GET {
        StatusCode::MOVED_PERMANENTLY
    } else {
        StatusCode::TEMPORARY_REDIRECT
    };
    let location = match request.uri().query() {
        Some(query) => format!("{target}?{query}"),
        None => target.to_string(),
    };

    let mut response = http::Response::new(Bytes::new());
    *response.status_mut() = status;
    if let Ok(value) = HeaderValue::from_str(&location) {
        response.headers_mut().insert(LOCATION, value);
    }
    response
}

fn allow_response(allow: &[&str]) -> Response {
    let mut response = http::Response::new(Bytes::new());
    set_allow(&mut response, allow);
    response
}

fn set_allow(response: &mut Response, allow: &[&str]) {
    if let Ok(value) = HeaderValue::from_str(&allow.join(", ")) {
        response.headers_mut().insert(ALLOW, value);
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;
