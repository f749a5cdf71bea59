use bunner_router_rs::{
    ApiError, ApiResponse, Request, Response, RouteError, Router, authorize, has_role,
    param_by_name, parse_json_body, query_param_by_name, request_body, session_user_id,
    user_roles, write_error,
};
use serde_json::json;

pub fn router() -> Result<Router, RouteError> {
    let mut router = Router::new();
    router
        .get("/greet", greet)?
        .get("/me", me)?
        .get("/users/:uid", show_user)?
        .put("/users/:uid", update_user)?
        .delete("/users/:uid", delete_user)?;
    Ok(router)
}

fn greet(req: Request) -> Response {
    let name = query_param_by_name(&req, "name");
    let name = if name.is_empty() { "stranger" } else { name.as_str() };
    ApiResponse::data(json!({ "greeting": format!("Hello, {name}!") })).write(&req)
}

fn me(req: Request) -> Response {
    ApiResponse::data(json!({
        "uid": session_user_id(&req),
        "roles": user_roles(&req),
    }))
    .write(&req)
}

fn show_user(req: Request) -> Response {
    match param_by_name(&req, "uid") {
        Ok(uid) => ApiResponse::data(json!({ "uid": uid })).write(&req),
        Err(err) => write_error(&req, &err),
    }
}

fn update_user(mut req: Request) -> Response {
    if let Err(err) = authorize(&req) {
        return write_error(&req, &err);
    }
    if let Err(err) = parse_json_body(&mut req) {
        return write_error(&req, &err);
    }
    match request_body(&req) {
        Some(body) => ApiResponse::data(json!({ "updated": body })).write(&req),
        None => write_error(&req, &ApiError::MissingRequiredData),
    }
}

fn delete_user(req: Request) -> Response {
    // Admins may delete any account; everyone else only their own.
    if has_role(&req, "admin") {
        return ApiResponse::ok().write(&req);
    }
    match authorize(&req) {
        Ok(()) => ApiResponse::ok().write(&req),
        Err(err) => write_error(&req, &err),
    }
}
