#![allow(dead_code)]

use bunner_router_rs::constants::{config, header};
use bunner_router_rs::{
    ApiResponse, CorsGate, GateOptions, Request, Response, Router, SessionClaims, attach_claims,
    authorize, param_by_name, write_error,
};
use bytes::Bytes;
use http::Method;
use std::collections::HashMap;

pub struct GateBuilder {
    allow_list: Option<String>,
    options: GateOptions,
    router: Router,
}

impl GateBuilder {
    pub fn new() -> Self {
        Self {
            allow_list: None,
            options: GateOptions::default(),
            router: users_router(),
        }
    }

    pub fn allow_list(mut self, list: impl Into<String>) -> Self {
        self.allow_list = Some(list.into());
        self
    }

    pub fn options(mut self, options: GateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn router(mut self, router: Router) -> Self {
        self.router = router;
        self
    }

    pub fn build(self) -> CorsGate {
        let mut values = HashMap::new();
        if let Some(list) = self.allow_list {
            values.insert(self.options.allow_list_key.clone(), list);
        }
        CorsGate::new(self.router, values, self.options).expect("valid gate options")
    }
}

pub struct RequestBuilder {
    method: Method,
    uri: String,
    origin: Option<String>,
    claims: Option<SessionClaims>,
    body: Bytes,
    user_agent: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            origin: None,
            claims: None,
            body: Bytes::new(),
            user_agent: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn claims(mut self, claims: SessionClaims) -> Self {
        self.claims = Some(claims);
        self
    }

    pub fn body(mut self, body: &'static str) -> Self {
        self.body = Bytes::from_static(body.as_bytes());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Request {
        let mut builder = http::Request::builder().method(self.method).uri(self.uri);
        if let Some(origin) = self.origin {
            builder = builder.header(header::ORIGIN, origin);
        }
        if let Some(agent) = self.user_agent {
            builder = builder.header(header::USER_AGENT, agent);
        }
        let mut request = builder.body(self.body).expect("valid request");
        if let Some(claims) = self.claims {
            attach_claims(&mut request, claims);
        }
        request
    }

    pub fn send(self, gate: &CorsGate) -> Response {
        gate.handle(self.build())
    }
}

/// `GET/PUT /users/:uid` guarded by the owner check, plus an open `GET /health`.
pub fn users_router() -> Router {
    let mut router = Router::new();
    router
        .get("/users/:uid", show_user)
        .expect("valid route")
        .put("/users/:uid", update_user)
        .expect("valid route")
        .get("/health", |req: Request| ApiResponse::ok().write(&req))
        .expect("valid route");
    router
}

fn show_user(req: Request) -> Response {
    match param_by_name(&req, "uid") {
        Ok(uid) => ApiResponse::data(serde_json::json!({ "uid": uid })).write(&req),
        Err(err) => write_error(&req, &err),
    }
}

fn update_user(req: Request) -> Response {
    if let Err(err) = authorize(&req) {
        return write_error(&req, &err);
    }
    ApiResponse::data(serde_json::json!({ "updated": true })).write(&req)
}

pub fn gate() -> GateBuilder {
    GateBuilder::new()
}

pub fn request(method: Method, uri: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method, uri)
}

pub fn allow_list_key() -> &'static str {
    config::CORS_ALLOWED_LIST
}
