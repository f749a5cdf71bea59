use std::future::Future;
use std::pin::Pin;

use bunner_router_rs::{Request, SessionClaims, attach_claims};
use http_body_util::{BodyExt, Full};
use hyper::Response;
use hyper::body::{Bytes, Incoming};
use hyper::service::Service;

use super::SharedGate;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Stand-in for a real authentication layer: a JSON claims object sent in
/// this header is trusted as-is.
const DEMO_CLAIMS_HEADER: &str = "X-Demo-Claims";

/// Adapts the synchronous gate to a hyper service by buffering each body.
#[derive(Clone)]
pub struct GateService {
    gate: SharedGate,
}

impl GateService {
    pub fn new(gate: SharedGate) -> Self {
        Self { gate }
    }
}

impl Service<hyper::Request<Incoming>> for GateService {
    type Response = Response<Full<Bytes>>;
    type Error = hyper::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
        let gate = self.gate.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = body.collect().await?.to_bytes();
            let mut request = Request::from_parts(parts, body);

            if let Some(claims) = demo_claims(&request) {
                attach_claims(&mut request, claims);
            }

            Ok(gate.handle(request).map(Full::new))
        })
    }
}

fn demo_claims(request: &Request) -> Option<SessionClaims> {
    let raw = request.headers().get(DEMO_CLAIMS_HEADER)?.to_str().ok()?;
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    match SessionClaims::from_json(&value) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed demo claims");
            None
        }
    }
}
