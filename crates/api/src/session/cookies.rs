//! Session cookie construction and parsing.

use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use cookie::time::Duration;
use cookie::{Cookie, SameSite};

use crate::config::SessionConfig;
use crate::error::AppError;

/// Cookie carrying `token`, valid for the session TTL.
pub fn session_cookie(config: &SessionConfig, token: &str) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::days(config.ttl_days))
        .secure(config.secure)
        .build()
}

/// Cookie that tells the browser to drop the session cookie.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(config, "");
    cookie.make_removal();
    cookie
}

/// Render a cookie as a `Set-Cookie` header value.
pub fn set_cookie_value(cookie: &Cookie<'_>) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&cookie.to_string())
        .map_err(|e| AppError::InternalError(format!("Unencodable cookie: {e}")))
}

/// Find the session token among the request's `Cookie` headers.
pub fn token_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == name && !c.value().is_empty())
        .map(|c| c.value().to_string())
}
