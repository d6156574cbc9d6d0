//! Integration tests for session authentication endpoints.

mod common;

use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::StatusCode;
use common::{body_json, get, get_as, post_json_as, COOKIE_NAME};
use monastery_api::config::AppEnvironment;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_current_user_requires_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/auth/user").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_as(app, "/api/auth/user", &format!("{COOKIE_NAME}=forged-token")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_current_user_returns_profile(pool: PgPool) {
    let user = common::create_user(&pool, "pilgrim@test.local", false).await;
    let cookie = common::session_cookie_for(&pool, &user).await;

    let app = common::build_test_app(pool);
    let response = get_as(app, "/api/auth/user", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["email"], "pilgrim@test.local");
    assert_eq!(json["isAdmin"], false);
    assert_eq!(json["id"], user.id.to_string());
}

// ---------------------------------------------------------------------------
// Development login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dev_login_issues_admin_session(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/dev-login").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/");
    let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    assert!(set_cookie.contains("HttpOnly"));
    let cookie = common::set_cookie_pair(&response).unwrap();
    assert!(cookie.starts_with(&format!("{COOKIE_NAME}=")));

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_as(app, "/api/auth/user", &cookie).await).await;
    assert_eq!(json["email"], "dev-admin@monastery360.local");
    assert_eq!(json["isAdmin"], true);

    // The dev admin can write.
    let app = common::build_test_app(pool);
    let response = post_json_as(
        app,
        "/api/monasteries",
        serde_json::json!({
            "name": "Tashiding Monastery",
            "location": "Tashiding",
            "district": "West Sikkim",
            "foundedYear": 1641,
            "history": "Founded by Ngadak Sempa Chempo."
        }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dev_login_replaces_existing_session(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = common::set_cookie_pair(&get(app, "/api/dev-login").await).unwrap();

    let app = common::build_test_app(pool.clone());
    let second = common::set_cookie_pair(&get_as(app, "/api/dev-login", &first).await).unwrap();
    assert_ne!(first, second);

    let app = common::build_test_app(pool.clone());
    let response = get_as(app, "/api/auth/user", &first).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get_as(app, "/api/auth/user", &second).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dev_login_absent_in_production(pool: PgPool) {
    let app = common::build_test_app_in(pool, AppEnvironment::Production);
    let response = get(app, "/api/dev-login").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Login / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_redirects_to_dev_login_in_development(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/login").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/api/dev-login");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_not_implemented_in_production(pool: PgPool) {
    let app = common::build_test_app_in(pool, AppEnvironment::Production);
    let response = get(app, "/api/login").await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body_json(response).await["code"], "NOT_IMPLEMENTED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_destroys_session(pool: PgPool) {
    let cookie = common::admin_cookie(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get_as(app, "/api/logout", &cookie).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/");
    let cleared = common::set_cookie_pair(&response).unwrap();
    assert_eq!(cleared, format!("{COOKIE_NAME}="));

    let app = common::build_test_app(pool);
    let response = get_as(app, "/api/auth/user", &cookie).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_without_session_still_redirects(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/logout").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(response.headers().contains_key(SET_COOKIE));
}
