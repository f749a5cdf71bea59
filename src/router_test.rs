use super::*;
use crate::context::param_by_name;
use crate::error::RouteError;
use http::header::CONTENT_TYPE;

fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Bytes::new())
        .unwrap()
}

fn text(body: &'static str) -> impl Handler {
    move |_req: Request| http::Response::new(Bytes::from_static(body.as_bytes()))
}

fn echo_uid(req: Request) -> Response {
    let body = param_by_name(&req, "uid").unwrap_or("<none>").to_string();
    http::Response::new(Bytes::from(body))
}

fn users_router() -> Router {
    let mut router = Router::new();
    router
        .get("/users/:uid", echo_uid)
        .unwrap()
        .put("/users/:uid", echo_uid)
        .unwrap()
        .post("/users", text("created"))
        .unwrap();
    router
}

mod handle {
    use super::*;

    #[test]
    fn when_path_lacks_leading_slash_should_return_error() {
        // Arrange
        let mut router = Router::new();

        // Act
        let result = router.get("users", text("x")).map(|_| ());

        // Assert
        assert!(matches!(
            result,
            Err(RouteError::MissingLeadingSlash { path }) if path == "users"
        ));
    }

    #[test]
    fn when_route_conflicts_should_return_insert_error() {
        // Arrange
        let mut router = Router::new();
        router.get("/users/:uid", text("a")).unwrap();

        // Act
        let result = router.get("/users/:uid", text("b")).map(|_| ());

        // Assert
        assert!(matches!(result, Err(RouteError::Insert { .. })));
    }

    #[test]
    fn when_same_path_registered_for_other_method_should_succeed() {
        // Arrange
        let mut router = Router::new();
        router.get("/items", text("list")).unwrap();

        // Act
        let result = router.delete("/items", text("purge")).map(|_| ());

        // Assert
        assert!(result.is_ok());
    }
}

mod dispatch {
    use super::*;

    #[test]
    fn when_route_has_params_should_expose_them_to_handler() {
        // Arrange
        let router = users_router();

        // Act
        let response = router.dispatch(request(Method::PUT, "/users/42"));

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_ref(), b"42");
    }

    #[test]
    fn when_route_has_no_params_should_not_attach_carrier() {
        // Arrange
        let mut router = Router::new();
        router.get("/health", echo_uid).unwrap();

        // Act
        let response = router.dispatch(request(Method::GET, "/health"));

        // Assert
        assert_eq!(response.body().as_ref(), b"<none>");
    }

    #[test]
    fn when_params_handler_registered_should_receive_captures_directly() {
        // Arrange
        struct Captures;
        impl ParamHandler for Captures {
            fn call(&self, _request: Request, params: Params) -> Response {
                let joined = params
                    .iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect::<Vec<_>>()
                    .join("&");
                http::Response::new(Bytes::from(joined))
            }
        }
        let mut router = Router::new();
        router
            .handle_params(Method::GET, "/orgs/:org/users/:uid", Captures)
            .unwrap();

        // Act
        let response = router.dispatch(request(Method::GET, "/orgs/acme/users/7"));

        // Assert
        assert_eq!(response.body().as_ref(), b"org=acme&uid=7");
    }

    #[test]
    fn when_catch_all_route_should_capture_remainder() {
        // Arrange
        let mut router = Router::new();
        router
            .get("/static/*file", |req: Request| {
                let file = param_by_name(&req, "file").unwrap_or_default().to_string();
                http::Response::new(Bytes::from(file))
            })
            .unwrap();

        // Act
        let response = router.dispatch(request(Method::GET, "/static/css/site.css"));

        // Assert
        assert_eq!(response.body().as_ref(), b"css/site.css");
    }

    #[test]
    fn when_path_unknown_should_return_not_found_envelope() {
        // Arrange
        let router = users_router();

        // Act
        let response = router.dispatch(request(Method::GET, "/missing"));

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.body().as_ref(),
            br#"{"error":"not found","status":"ERROR"}"#
        );
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn when_method_not_registered_for_path_should_return_405_with_allow() {
        // Arrange
        let router = users_router();

        // Act
        let response = router.dispatch(request(Method::DELETE, "/users/42"));

        // Assert
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(ALLOW).unwrap(),
            "GET, PUT, OPTIONS"
        );
    }

    #[test]
    fn when_method_not_allowed_disabled_should_return_404() {
        // Arrange
        let mut router = users_router();
        router.method_not_allowed(false);

        // Act
        let response = router.dispatch(request(Method::DELETE, "/users/42"));

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn when_options_without_handler_should_answer_with_allow() {
        // Arrange
        let router = users_router();

        // Act
        let response = router.dispatch(request(Method::OPTIONS, "/users/42"));

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().is_empty());
        assert_eq!(
            response.headers().get(ALLOW).unwrap(),
            "GET, PUT, OPTIONS"
        );
    }

    #[test]
    fn when_options_handler_registered_should_call_it() {
        // Arrange
        let mut router = users_router();
        router.options("/users/:uid", text("custom preflight")).unwrap();

        // Act
        let response = router.dispatch(request(Method::OPTIONS, "/users/42"));

        // Assert
        assert_eq!(response.body().as_ref(), b"custom preflight");
    }

    #[test]
    fn when_auto_options_disabled_should_return_not_found() {
        // Arrange
        let mut router = users_router();
        router.auto_options(false);

        // Act
        let response = router.dispatch(request(Method::OPTIONS, "/users/42"));

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn when_get_path_has_extra_trailing_slash_should_redirect_permanently() {
        // Arrange
        let router = users_router();

        // Act
        let response = router.dispatch(request(Method::GET, "/users/42/?full=1"));

        // Assert
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/users/42?full=1"
        );
    }

    #[test]
    fn when_post_path_missing_trailing_slash_should_redirect_temporarily() {
        // Arrange
        let mut router = Router::new();
        router.post("/uploads/", text("ok")).unwrap();

        // Act
        let response = router.dispatch(request(Method::POST, "/uploads"));

        // Assert
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/uploads/");
    }

    #[test]
    fn when_redirect_disabled_should_return_not_found() {
        // Arrange
        let mut router = users_router();
        router.redirect_trailing_slash(false);

        // Act
        let response = router.dispatch(request(Method::GET, "/users/42/"));

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

mod allowed {
    use super::*;

    #[test]
    fn when_path_is_asterisk_should_list_every_method() {
        // Arrange
        let router = users_router();

        // Act
        let allow = router.allowed("*", &Method::OPTIONS);

        // Assert
        assert_eq!(allow, vec!["GET", "PUT", "POST", "OPTIONS"]);
    }

    #[test]
    fn when_path_unknown_should_be_empty() {
        // Arrange
        let router = users_router();

        // Act & Assert
        assert!(router.allowed("/nowhere", &Method::GET).is_empty());
    }

    #[test]
    fn when_request_method_matches_should_exclude_it() {
        // Arrange
        let router = users_router();

        // Act
        let allow = router.allowed("/users/1", &Method::GET);

        // Assert
        assert_eq!(allow, vec!["PUT", "OPTIONS"]);
    }
}
