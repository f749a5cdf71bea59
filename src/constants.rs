pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ALLOW: &str = "Allow";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const LOCATION: &str = "Location";
    pub const ORIGIN: &str = "Origin";
    pub const USER_AGENT: &str = "User-Agent";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod config {
    /// Configuration key holding the comma separated origin allow-list.
    pub const CORS_ALLOWED_LIST: &str = "cors.allowed.list";
}

pub mod defaults {
    use super::method;

    pub const ALLOWED_METHODS: [&str; 5] = [
        method::POST,
        method::GET,
        method::OPTIONS,
        method::PUT,
        method::DELETE,
    ];

    pub const ALLOWED_HEADERS: [&str; 9] = [
        "Accept",
        "Content-Type",
        "Content-Length",
        "Accept-Encoding",
        "X-CSRF-Token",
        "Authorization",
        "X-Requested-With",
        "X-App-Source",
        "X-Request-Id",
    ];
}

pub mod claim {
    pub const UID: &str = "uid";
    pub const ROLES: &str = "roles";
}

pub const APPLICATION_JSON: &str = "application/json";
pub const STATUS_OK: &str = "OK";
pub const STATUS_ERROR: &str = "ERROR";
/// Route parameter compared against the session user by `authorize`.
pub const OWNER_PARAM: &str = "uid";
