#![allow(dead_code)]

use bunner_router_rs::Response;
use bunner_router_rs::constants::header;
use std::collections::HashSet;

pub fn header_value<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

pub fn has_header(response: &Response, name: &str) -> bool {
    response.headers().contains_key(name)
}

pub fn has_any_cors_header(response: &Response) -> bool {
    [
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        header::ACCESS_CONTROL_ALLOW_METHODS,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
    ]
    .iter()
    .any(|name| has_header(response, name))
}

pub fn vary_values(response: &Response) -> HashSet<String> {
    response
        .headers()
        .get_all(header::VARY)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}
