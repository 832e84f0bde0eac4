pub mod auth_middleware;
pub mod password;
pub mod tokens;
