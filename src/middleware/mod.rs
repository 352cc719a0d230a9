pub mod auth;
pub mod cors;
pub mod rate_limit;
pub mod security_headers;

pub use auth::AuthMiddleware;
pub use cors::cors_policy;
pub use security_headers::SecurityHeaders;
