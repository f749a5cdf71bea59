use crate::context::with_params;
use crate::params::Params;
use bytes::Bytes;
use std::sync::Arc;

pub type Request = http::Request<Bytes>;
pub type Response = http::Response<Bytes>;

/// A plain request handler: it sees only the request.
///
/// Route parameters, claims and the parsed body travel in the request's
/// context; see the accessors re-exported at the crate root.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, request: Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(Request) -> Response + Send + Sync + 'static,
{
    fn call(&self, request: Request) -> Response {
        self(request)
    }
}

/// What the path router invokes: the request plus the captures of the
/// matched pattern.
pub trait ParamHandler: Send + Sync + 'static {
    fn call(&self, request: Request, params: Params) -> Response;
}

/// Adapts a [`Handler`] to the router by moving captured parameters into the
/// request context before calling it.
pub struct WrappedHandler {
    inner: Arc<dyn Handler>,
}

impl WrappedHandler {
    pub fn new<H: Handler>(handler: H) -> Self {
        Self {
            inner: Arc::new(handler),
        }
    }
}

impl ParamHandler for WrappedHandler {
    fn call(&self, request: Request, params: Params) -> Response {
        self.inner.call(with_params(request, params))
    }
}

pub fn wrap_handler<H: Handler>(handler: H) -> WrappedHandler {
    WrappedHandler::new(handler)
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;
