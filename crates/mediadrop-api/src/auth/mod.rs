//! Session-cookie authentication: middleware, request-scoped user context,
//! password hashing, and session token helpers.

pub mod middleware;
pub mod models;
pub mod password;
pub mod session;
