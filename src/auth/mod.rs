mod jwt;
mod middleware;

pub use jwt::*;
pub use middleware::*;

pub const AUTH_COOKIE_NAME: &str = "auth_token";
