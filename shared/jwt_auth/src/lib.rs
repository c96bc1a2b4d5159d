//!
//! Session tokens shared by cinebook services.
//!
//! Tokens are HMAC (or asymmetric) signed JWTs carrying the user id and email.
//! They are read from the `token` cookie or from a `Bearer` Authorization header.
//!

pub mod cookie;
pub mod dto;
pub mod error;
pub mod issuer;
pub mod middleware;
pub mod util;

#[cfg(feature = "test_utils")]
pub mod test;

pub use dto::User;
pub use issuer::JwtIssuer;
pub use middleware::JwtAuthLayer;
