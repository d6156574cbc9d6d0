#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{HeaderValue, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use monastery_api::config::{AppEnvironment, ServerConfig, SessionConfig};
use monastery_api::router::build_app_router;
use monastery_api::session;
use monastery_api::state::AppState;
use monastery_db::models::user::{UpsertUser, User};
use monastery_db::repositories::UserRepo;

pub const COOKIE_NAME: &str = "monastery.sid";

/// Build a test `ServerConfig` with safe defaults for `environment`.
pub fn test_config(environment: AppEnvironment) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        database_max_connections: 5,
        environment,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        session: SessionConfig {
            cookie_name: COOKIE_NAME.to_string(),
            ttl_days: 30,
            sweep_interval_secs: 900,
            secure: !environment.is_development(),
        },
    }
}

/// Build the full application router in development mode.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_in(pool, AppEnvironment::Development)
}

/// Build the full application router for a given environment.
pub fn build_test_app_in(pool: PgPool, environment: AppEnvironment) -> Router {
    let config = test_config(environment);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, "GET", uri, None, None).await
}

pub async fn get_as(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, "GET", uri, None, Some(cookie)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, "POST", uri, Some(body), None).await
}

pub async fn post_json_as(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, "POST", uri, Some(body), Some(cookie)).await
}

/// POST a raw, possibly malformed, JSON body.
pub async fn post_raw_as(app: Router, uri: &str, body: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(COOKIE, cookie)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_as(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, "PUT", uri, Some(body), Some(cookie)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, "DELETE", uri, None, None).await
}

pub async fn delete_as(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, "DELETE", uri, None, Some(cookie)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Session helpers
// ---------------------------------------------------------------------------

/// Create (or refresh) a user and return it.
pub async fn create_user(pool: &PgPool, email: &str, is_admin: bool) -> User {
    UserRepo::upsert_by_email(
        pool,
        &UpsertUser {
            email: email.to_string(),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            profile_image_url: None,
            is_admin,
        },
    )
    .await
    .expect("user upsert should succeed")
}

/// Start a session for `user` and return the `Cookie` header value.
pub async fn session_cookie_for(pool: &PgPool, user: &User) -> String {
    let config = test_config(AppEnvironment::Development);
    let token = session::start(pool, &config.session, user.id)
        .await
        .expect("session creation should succeed");
    format!("{COOKIE_NAME}={token}")
}

/// Cookie for a fresh admin session.
pub async fn admin_cookie(pool: &PgPool) -> String {
    let admin = create_user(pool, "admin@test.local", true).await;
    session_cookie_for(pool, &admin).await
}

/// Cookie for a fresh non-admin session.
pub async fn visitor_cookie(pool: &PgPool) -> String {
    let visitor = create_user(pool, "visitor@test.local", false).await;
    session_cookie_for(pool, &visitor).await
}

/// Extract the `name=value` pair from a `Set-Cookie` response header.
pub fn set_cookie_pair(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}
