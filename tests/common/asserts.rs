#![allow(dead_code)]

use bunner_router_rs::Response;
use http::StatusCode;
use serde_json::Value;

pub fn body_json(response: &Response) -> Value {
    serde_json::from_slice(response.body()).expect("response body should be JSON")
}

pub fn assert_ok_envelope(response: &Response) -> Value {
    assert_eq!(response.status(), StatusCode::OK, "unexpected status");
    let body = body_json(response);
    assert_eq!(body["status"], "OK");
    assert!(body.get("error").is_none(), "success envelope carries error");
    body
}

pub fn assert_error_envelope(response: &Response, status: StatusCode) -> String {
    assert_eq!(response.status(), status, "unexpected status");
    let body = body_json(response);
    assert_eq!(body["status"], "ERROR");
    assert!(body.get("data").is_none(), "error envelope carries data");
    body["error"]
        .as_str()
        .expect("error envelope must carry text")
        .to_string()
}
