//!
//! Session cookie helpers.
//!

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap,
};
use std::time::Duration;

pub const TOKEN_COOKIE_NAME: &str = "token";

///
/// Finds session token in request headers.
///
/// The `token` cookie takes precedence over the Authorization header.
///
pub fn find_token(headers: &HeaderMap) -> Option<&str> {
    find_cookie_token(headers).or_else(|| find_bearer_token(headers))
}

fn find_cookie_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == TOKEN_COOKIE_NAME)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

fn find_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    match token.is_empty() {
        true => None,
        false => Some(token),
    }
}

///
/// Value of Set-Cookie header that stores the session token
///
pub fn session_cookie(token: &str, max_age: Duration, secure: bool) -> String {
    let mut cookie = format!(
        "{TOKEN_COOKIE_NAME}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        max_age.as_secs()
    );
    if secure {
        cookie.push_str("; Secure");
    }

    cookie
}

///
/// Value of Set-Cookie header that removes the session token
///
pub fn expired_session_cookie(secure: bool) -> String {
    session_cookie("", Duration::ZERO, secure)
}
